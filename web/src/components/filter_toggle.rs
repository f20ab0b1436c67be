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
use web_sys::Event;

use crate::app_state::{Message, StateHandler};
use crate::js_lib;

/// The veg / non-veg toggles. Both default on. Turning both off is a valid
/// "show nothing" state, not an error.
#[component]
pub fn FilterToggle<'ctx, G: Html>(cx: Scope<'ctx>, sh: StateHandler<'ctx>) -> View<G> {
    view! {cx,
        div(class="filter-toggle") {
            label(class="toggle veg") {
                input(
                    type="checkbox",
                    checked=true,
                    on:change=move |event: Event| {
                        sh.dispatch(cx, Message::SetVegFilter(js_lib::event_target_checked(&event)));
                    },
                )
                span(class="diet-marker veg")
                span { "Veg" }
            }
            label(class="toggle non-veg") {
                input(
                    type="checkbox",
                    checked=true,
                    on:change=move |event: Event| {
                        sh.dispatch(cx, Message::SetNonVegFilter(js_lib::event_target_checked(&event)));
                    },
                )
                span(class="diet-marker non-veg")
                span { "Non-Veg" }
            }
        }
    }
}
