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
use sycamore::prelude::*;
use tracing::instrument;

use crate::app_state::StateHandler;
use crate::components::{DishCard, FilterToggle, MealTypeTabs, SearchBar, SelectionSummaryBar};

/// The menu. Owns nothing itself. Every piece of state lives in the app
/// state machine and every control dispatches into it.
#[instrument(skip_all)]
#[component]
pub fn MenuPage<'ctx, G: Html>(cx: Scope<'ctx>, sh: StateHandler<'ctx>) -> View<G> {
    let dishes = sh.get_selector(cx, |state| state.get().dishes.clone());
    let loading = sh.get_selector(cx, |state| state.get().loading);
    view! {cx,
        div(class="menu-page") {
            header(class="page-header") {
                h1 { "Party Menu Selection" }
                p { "Choose delicious dishes for your party" }
            }
            SearchBar(sh)
            FilterToggle(sh)
            MealTypeTabs(sh)
            (if *loading.get() {
                view! {cx, div(class="loading") { "Loading dishes..." } }
            } else if dishes.get().is_empty() {
                view! {cx,
                    div(class="empty-state") {
                        p { "No dishes found" }
                        p(class="hint") { "Try adjusting your search or filters" }
                    }
                }
            } else {
                view! {cx,
                    div(class="dish-grid") {
                        Keyed(
                            iterable=dishes,
                            view=move |cx, dish| view! {cx,
                                DishCard(sh=sh, dish=dish)
                            },
                            key=|dish| dish.id,
                        )
                    }
                }
            })
            SelectionSummaryBar(sh)
        }
    }
}
