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
use tracing::{info, instrument};

use crate::api::HttpStore;
use crate::app_state::{self, AppState, Message};
use crate::components::Header;
use crate::routing::RouteHandler;

#[instrument(skip_all)]
#[component]
pub fn UI<G: Html>(cx: Scope) -> View<G> {
    HttpStore::provide_context(cx, "/api");
    info!("Starting UI");

    let sh = app_state::get_state_handler(cx, AppState::new(), HttpStore::new("/api".to_owned()));
    sh.dispatch(cx, Message::LoadState);
    view! {cx,
        div(class="app") {
            Header()
            RouteHandler(sh)
        }
    }
}
