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

use dishes::MealType;

use crate::app_state::StateHandler;

/// The running selection totals. Entirely server derived. The client never
/// recomputes a count from its own state.
#[component]
pub fn SelectionSummaryBar<'ctx, G: Html>(cx: Scope<'ctx>, sh: StateHandler<'ctx>) -> View<G> {
    let total = sh.get_selector(cx, |state| state.get().summary.total_count);
    let nonzero_counts = sh.get_selector(cx, |state| {
        state
            .get()
            .summary
            .category_counts
            .iter()
            .filter(|&(_, count)| *count > 0)
            .map(|(meal_type, count)| (*meal_type, *count))
            .collect::<Vec<(MealType, u32)>>()
    });
    view! {cx,
        (if *total.get() == 0 {
            view! {cx,
                div(class="selection-summary empty") {
                    p(class="title") { "Your cart is empty" }
                    p { "Add some delicious dishes to get started!" }
                }
            }
        } else {
            view! {cx,
                div(class="selection-summary") {
                    div(class="category-counts") {
                        Indexed(
                            iterable=nonzero_counts,
                            view=|cx, (meal_type, count)| view! {cx,
                                span(class="category-count") {
                                    (format!("{}: {}", meal_type.display_name(), count))
                                }
                            }
                        )
                    }
                    div(class="summary-total") {
                        span { "Total Items: " }
                        span(class="total-badge") { (total.get()) }
                        button(class="continue", on:click=|_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.alert_with_message("Proceeding with your selection!");
                            }
                        }) { "Continue" }
                    }
                }
            }
        })
    }
}
