// Copyright 2023 Jeremy Wall
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::collections::BTreeMap;

use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_state::{Handler, MessageMapper};
use tracing::{debug, error, info, instrument};

use dishes::{filter_by_dietary, Dish, MealType, SelectionSummary};

use crate::api::HttpStore;

// TODO(jwall): Pull this from an authenticated session once accounts exist.
pub const USER_ID: &str = "user123";

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub meal_type: MealType,
    pub search: String,
    pub veg: bool,
    pub non_veg: bool,
    /// The dish list on display. Always the dietary pass applied over the
    /// most recent server response.
    pub dishes: Vec<Dish>,
    pub loading: bool,
    /// Sequence tag of the most recently issued dish fetch. Responses
    /// carrying an older tag are stale and get dropped.
    pub dish_fetch_seq: u64,
    pub selected: BTreeMap<i64, u32>,
    pub summary: SelectionSummary,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            meal_type: MealType::Starter,
            search: String::new(),
            veg: true,
            non_veg: true,
            dishes: Vec::new(),
            loading: false,
            dish_fetch_seq: 0,
            selected: BTreeMap::new(),
            summary: SelectionSummary::default(),
        }
    }
}

#[derive(Debug)]
pub enum Message {
    SetMealType(MealType),
    SetSearchText(String),
    SetVegFilter(bool),
    SetNonVegFilter(bool),
    AddDish(i64),
    RemoveDish(i64),
    LoadState,
}

pub struct StateMachine(HttpStore);

impl StateMachine {
    /// Fetch the dish list for the current menu state and apply it, unless a
    /// newer fetch was issued while this one was in flight.
    async fn fetch_dishes(store: HttpStore, seq: u64, original: &Signal<AppState>) {
        let (meal_type, search) = {
            let state = original.get();
            (state.meal_type, state.search.clone())
        };
        let fetched = match store.get_dishes(meal_type, &search).await {
            Ok(dishes) => dishes,
            Err(err) => {
                error!(?err, "Failed to fetch dishes");
                let mut state = original.get().as_ref().clone();
                if state.dish_fetch_seq == seq {
                    state.loading = false;
                    original.set(state);
                }
                return;
            }
        };
        let mut state = original.get().as_ref().clone();
        // NOTE(jwall): Responses can resolve out of order when filters are
        // toggled quickly. Only the most recently issued fetch may land.
        if state.dish_fetch_seq != seq {
            debug!(
                seq,
                latest = state.dish_fetch_seq,
                "Dropping stale dish response"
            );
            return;
        }
        state.dishes = filter_by_dietary(fetched, state.veg, state.non_veg);
        state.loading = false;
        original.set(state);
    }

    /// Re-derive the selection summary from the server. Mutations never
    /// update the summary locally. On failure the displayed summary simply
    /// stays stale until the next successful fetch.
    async fn refresh_summary(store: HttpStore, original: &Signal<AppState>) {
        match store.get_selections(USER_ID).await {
            Ok(summary) => {
                let mut state = original.get().as_ref().clone();
                state.selected = summary
                    .selections
                    .iter()
                    .map(|sel| (sel.dish_id, sel.quantity))
                    .collect();
                state.summary = summary;
                original.set(state);
            }
            Err(err) => error!(?err, "Failed to fetch the selection summary"),
        }
    }

    async fn load_state(store: HttpStore, seq: u64, original: &Signal<AppState>) {
        info!("Synchronizing dishes and selections");
        Self::fetch_dishes(store.clone(), seq, original).await;
        Self::refresh_summary(store, original).await;
    }
}

impl MessageMapper<Message, AppState> for StateMachine {
    #[instrument(skip_all, fields(?msg))]
    fn map<'ctx>(&self, cx: Scope<'ctx>, msg: Message, original: &'ctx Signal<AppState>) {
        let mut original_copy = original.get().as_ref().clone();
        let mut refetch = false;
        let mut initial_load = false;
        match msg {
            Message::SetMealType(meal_type) => {
                original_copy.meal_type = meal_type;
                refetch = true;
            }
            Message::SetSearchText(text) => {
                original_copy.search = text;
                refetch = true;
            }
            Message::SetVegFilter(flag) => {
                original_copy.veg = flag;
                refetch = true;
            }
            Message::SetNonVegFilter(flag) => {
                original_copy.non_veg = flag;
                refetch = true;
            }
            Message::AddDish(dish_id) => {
                let store = self.0.clone();
                spawn_local_scoped(cx, async move {
                    match store.add_selection(USER_ID, dish_id).await {
                        Ok(()) => Self::refresh_summary(store, original).await,
                        // The summary stays stale. No rollback, no retry.
                        Err(err) => error!(?err, "Failed to add dish to the selection"),
                    }
                });
            }
            Message::RemoveDish(dish_id) => {
                let store = self.0.clone();
                spawn_local_scoped(cx, async move {
                    match store.remove_selection(USER_ID, dish_id).await {
                        Ok(()) => Self::refresh_summary(store, original).await,
                        Err(err) => error!(?err, "Failed to remove dish from the selection"),
                    }
                });
            }
            Message::LoadState => {
                refetch = true;
                initial_load = true;
            }
        }
        if refetch {
            original_copy.dish_fetch_seq += 1;
            original_copy.loading = true;
            let seq = original_copy.dish_fetch_seq;
            let store = self.0.clone();
            spawn_local_scoped(cx, async move {
                if initial_load {
                    Self::load_state(store, seq, original).await;
                } else {
                    Self::fetch_dishes(store, seq, original).await;
                }
            });
        }
        original.set(original_copy);
    }
}

pub type StateHandler<'ctx> = &'ctx Handler<'ctx, StateMachine, AppState, Message>;

pub fn get_state_handler<'ctx>(
    cx: Scope<'ctx>,
    initial: AppState,
    store: HttpStore,
) -> StateHandler<'ctx> {
    Handler::new(cx, initial, StateMachine(store))
}
