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

use crate::app_state::{Message, StateHandler};

/// The meal type category tabs, each with its selected count badge from the
/// server derived summary.
#[component]
pub fn MealTypeTabs<'ctx, G: Html>(cx: Scope<'ctx>, sh: StateHandler<'ctx>) -> View<G> {
    let selected = sh.get_selector(cx, |state| state.get().meal_type);
    let counts = sh.get_selector(cx, |state| state.get().summary.category_counts.clone());
    let tablist = create_signal(cx, MealType::ALL.to_vec());
    view! {cx,
        nav(class="meal-type-tabs") {
            ul(class="tabs") {
                Indexed(
                    iterable=tablist,
                    view=move |cx, meal_type| {
                        let count = create_memo(cx, move || {
                            counts.get().get(&meal_type).copied().unwrap_or_default()
                        });
                        view! {cx,
                            li(class=(if *selected.get() == meal_type { "tab selected" } else { "tab" })) {
                                button(on:click=move |_| {
                                    sh.dispatch(cx, Message::SetMealType(meal_type));
                                }) {
                                    (meal_type.display_name())
                                    (if *count.get() > 0 {
                                        view! {cx, span(class="count-badge") { (count.get()) } }
                                    } else {
                                        View::empty()
                                    })
                                }
                            }
                        }
                    }
                )
            }
        }
    }
}
