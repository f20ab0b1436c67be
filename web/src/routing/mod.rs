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
use sycamore_router::{HistoryIntegration, Route, Router};
use tracing::instrument;

use crate::app_state::StateHandler;
use crate::pages::*;

#[derive(Route, Debug)]
pub enum Routes {
    #[to("/ui/menu")]
    Menu,
    #[to("/ui/ingredients/<id>")]
    Ingredients(String),
    #[not_found]
    NotFound,
}

#[instrument(skip_all)]
fn route_switch<'ctx, G: Html>(
    cx: Scope<'ctx>,
    sh: StateHandler<'ctx>,
    route: &'ctx ReadSignal<Routes>,
) -> View<G> {
    // NOTE(jwall): This needs to not be a dynamic node. The rules around
    // this are somewhat unclear and underdocumented for Sycamore. But basically
    // avoid conditionals in the `view!` macro calls here.
    view! {cx,
        (match route.get().as_ref() {
            Routes::Menu => view! {cx,
                MenuPage(sh)
            },
            Routes::Ingredients(id) => {
                let id = id.clone();
                view! {cx,
                    IngredientsPage(id)
                }
            }
            Routes::NotFound => view! {cx,
                MenuPage(sh)
            },
        })
    }
}

#[component]
pub fn RouteHandler<'ctx, G: Html>(cx: Scope<'ctx>, sh: StateHandler<'ctx>) -> View<G> {
    view! {cx,
        Router(
            integration=HistoryIntegration::new(),
            view=move |cx, route: &ReadSignal<Routes>| route_switch(cx, sh, route),
        )
    }
}
