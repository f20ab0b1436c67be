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
use sycamore::{futures::spawn_local_scoped, prelude::*};
use tracing::{error, instrument};
use web_sys::Event;

use dishes::DishIngredients;

use crate::api::HttpStore;
use crate::components::FALLBACK_DISH_IMAGE;
use crate::js_lib;

fn ingredient_detail<G: Html>(cx: Scope, payload: DishIngredients) -> View<G> {
    let DishIngredients { dish, ingredients } = payload;
    let image = dish
        .image
        .clone()
        .unwrap_or_else(|| FALLBACK_DISH_IMAGE.to_owned());
    let name = dish.name.clone();
    let alt_text = dish.name.clone();
    let description = dish.description.clone();
    let category_name = dish.category.name.clone();
    let dish_type = dish.dish_type.clone();
    let dietary_label = dish.dietary.display_name();
    let dietary_class = if dish.dietary.is_veg() {
        "chip veg"
    } else {
        "chip non-veg"
    };
    let rows = if ingredients.is_empty() {
        view! {cx,
            div(class="empty-state") {
                p { "No ingredients information available" }
                p(class="hint") { "We'll add a detailed ingredient list soon!" }
            }
        }
    } else {
        let items = View::new_fragment(
            ingredients
                .iter()
                .map(|ingredient| {
                    let name = ingredient.name.clone();
                    let amount = format!("{} {}", ingredient.quantity, ingredient.unit);
                    view! {cx,
                        li(class="ingredient-row") {
                            span(class="ingredient-name") { (name) }
                            span(class="ingredient-amount") { (amount) }
                        }
                    }
                })
                .collect(),
        );
        view! {cx,
            ul(class="ingredient-list") { (items) }
        }
    };
    view! {cx,
        div(class="dish-detail") {
            div(class="dish-image") {
                img(
                    src=image,
                    alt=alt_text,
                    on:error=|event: Event| {
                        js_lib::swap_image_to_fallback(&event, FALLBACK_DISH_IMAGE);
                    },
                )
            }
            div(class="dish-body") {
                h2 { (name) }
                p(class="dish-description") { (description) }
                div(class="chips") {
                    span(class="chip") { (category_name) }
                    span(class="chip") { (dish_type) }
                    span(class=dietary_class) { (dietary_label) }
                }
            }
        }
        section(class="ingredients") {
            h3 { "Ingredients & Quantities" }
            (rows)
        }
    }
}

/// The ingredient lookup for one dish, keyed by the route parameter. A pure
/// read. An empty ingredient list is a valid state with its own rendering.
#[instrument(skip(cx))]
#[component]
pub fn IngredientsPage<G: Html>(cx: Scope, dish_id: String) -> View<G> {
    let store = HttpStore::get_from_context(cx);
    let fetched = create_signal(cx, None::<DishIngredients>);
    let failed = create_signal(cx, false);
    let loading = create_signal(cx, true);
    spawn_local_scoped(cx, async move {
        match store.get_dish_ingredients(&dish_id).await {
            Ok(Some(payload)) => fetched.set(Some(payload)),
            Ok(None) => failed.set(true),
            Err(err) => {
                error!(?err, "Failed to fetch dish ingredients");
                failed.set(true);
            }
        }
        loading.set(false);
    });
    view! {cx,
        div(class="ingredients-page") {
            header(class="page-header") {
                button(class="back", on:click=|_| sycamore_router::navigate("/ui/menu")) {
                    "Back"
                }
                h1 { "Ingredients" }
            }
            (if *loading.get() {
                view! {cx, div(class="loading") { "Loading ingredients..." } }
            } else if *failed.get() {
                view! {cx,
                    div(class="error-state") {
                        p { "Failed to load dish ingredients" }
                        button(on:click=|_| sycamore_router::navigate("/ui/menu")) {
                            "Back to Menu"
                        }
                    }
                }
            } else {
                match fetched.get().as_ref() {
                    Some(payload) => {
                        let payload = payload.clone();
                        ingredient_detail(cx, payload)
                    }
                    None => View::empty(),
                }
            })
        }
    }
}
