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

use dishes::Dish;

use crate::app_state::{Message, StateHandler};
use crate::components::FALLBACK_DISH_IMAGE;
use crate::js_lib;

#[derive(Prop)]
pub struct DishCardProps<'ctx> {
    pub sh: StateHandler<'ctx>,
    pub dish: Dish,
}

/// One dish in the grid. Stateless apart from the selection lookup. Add and
/// remove dispatch into the state machine.
#[component]
pub fn DishCard<'ctx, G: Html>(cx: Scope<'ctx>, props: DishCardProps<'ctx>) -> View<G> {
    let DishCardProps { sh, dish } = props;
    let dish_id = dish.id;
    let selected_quantity = sh.get_selector(cx, move |state| {
        state.get().selected.get(&dish_id).copied()
    });
    let is_selected = create_memo(cx, move || selected_quantity.get().is_some());

    let image = dish
        .image
        .clone()
        .unwrap_or_else(|| FALLBACK_DISH_IMAGE.to_owned());
    let name = dish.name.clone();
    let alt_text = dish.name.clone();
    let description = dish.description.clone();
    let category_line = format!("{} • {}", dish.category.name, dish.dish_type);
    let marker_class = if dish.dietary.is_veg() {
        "diet-marker veg"
    } else {
        "diet-marker non-veg"
    };

    view! {cx,
        div(class=(if *is_selected.get() { "dish-card selected" } else { "dish-card" })) {
            div(class="dish-image") {
                img(
                    src=image,
                    alt=alt_text,
                    on:error=|event: Event| {
                        js_lib::swap_image_to_fallback(&event, FALLBACK_DISH_IMAGE);
                    },
                )
                (if *is_selected.get() {
                    view! {cx,
                        div(class="selected-badge") {
                            (format!("Added ({})", selected_quantity.get().unwrap_or_default()))
                        }
                    }
                } else {
                    View::empty()
                })
            }
            div(class="dish-body") {
                div(class="dish-title") {
                    h3 { (name) }
                    span(class=marker_class)
                }
                p(class="dish-description") { (description) }
                div(class="dish-category") { (category_line) }
                div(class="dish-actions") {
                    a(class="ingredients-link", href=format!("/ui/ingredients/{}", dish_id)) {
                        "Ingredients"
                    }
                    (if *is_selected.get() {
                        view! {cx,
                            button(class="remove", on:click=move |_| {
                                sh.dispatch(cx, Message::RemoveDish(dish_id));
                            }) { "Remove" }
                        }
                    } else {
                        view! {cx,
                            button(class="add", on:click=move |_| {
                                sh.dispatch(cx, Message::AddDish(dish_id));
                            }) { "Add" }
                        }
                    })
                }
            }
        }
    }
}
