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
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::{boxed, Full},
    extract::{Extension, Path, Query},
    http::{header, StatusCode},
    response::{IntoResponse, Redirect, Response},
    routing::{delete, get, Router},
    Json,
};
use mime_guess;
use rust_embed::RustEmbed;
use serde::Deserialize;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, instrument};

use client_api::{
    DishListResponse, IngredientsResponse, MealTypesData, MealTypesResponse, SelectionsResponse,
};
use dishes::{DietaryType, MealType, Selection};

use crate::store::{DishStore, SelectionStore};

mod metrics;
#[cfg(test)]
mod test;

#[derive(RustEmbed)]
#[folder = "../web/dist"]
struct UiAssets;

pub struct StaticFile<T>(pub T);

impl<T> IntoResponse for StaticFile<T>
where
    T: Into<String>,
{
    fn into_response(self) -> Response {
        let path = self.0.into();

        match UiAssets::get(path.as_str()) {
            Some(content) => {
                let body = boxed(Full::from(content.data));
                let mime = mime_guess::from_path(path).first_or_octet_stream();
                Response::builder()
                    .header(header::CONTENT_TYPE, mime.as_ref())
                    .body(body)
                    .unwrap()
            }
            None => Response::builder()
                .status(StatusCode::NOT_FOUND)
                .body(boxed(Full::from("404")))
                .unwrap(),
        }
    }
}

#[instrument]
async fn ui_static_assets(Path(path): Path<String>) -> impl IntoResponse {
    info!("Serving ui path");

    let mut path = path.trim_start_matches('/');
    // The client routed paths get the app shell. Everything else is a real
    // asset in the bundle.
    if path.is_empty() || path == "menu" || path.starts_with("ingredients") {
        path = "index.html";
    }
    debug!(path = path, "Serving transformed path");
    StaticFile(path.to_owned())
}

#[derive(Debug, Deserialize)]
pub struct DishQuery {
    pub meal_type: Option<String>,
    pub dish_type: Option<String>,
    pub search: Option<String>,
}

#[instrument(skip(store))]
async fn api_dishes(
    Extension(store): Extension<Arc<DishStore>>,
    Query(query): Query<DishQuery>,
) -> impl IntoResponse {
    metrics::count_request("dishes");
    // Unrecognized filter values match nothing rather than erroring, the
    // same way the upper-cased string comparison used to behave.
    let meal_type = match query.meal_type.as_deref().map(str::parse::<MealType>) {
        None => None,
        Some(Ok(mt)) => Some(mt),
        Some(Err(_)) => return DishListResponse::success(Vec::new()),
    };
    let dietary = match query.dish_type.as_deref().map(str::parse::<DietaryType>) {
        None => None,
        Some(Ok(dt)) => Some(dt),
        Some(Err(_)) => return DishListResponse::success(Vec::new()),
    };
    DishListResponse::success(store.dishes(meal_type, dietary, query.search.as_deref()))
}

#[instrument(skip(store))]
async fn api_dish_ingredients(
    Extension(store): Extension<Arc<DishStore>>,
    Path(dish_id): Path<i64>,
) -> impl IntoResponse {
    metrics::count_request("dish_ingredients");
    match store.ingredients(dish_id) {
        Some(payload) => IngredientsResponse::success(payload),
        None => IngredientsResponse::NotFound,
    }
}

#[instrument]
async fn api_meal_types() -> impl IntoResponse {
    metrics::count_request("meal_types");
    MealTypesResponse::success(MealTypesData::catalog())
}

async fn summary_for(
    dish_store: &DishStore,
    selection_store: &SelectionStore,
    user_id: &str,
) -> SelectionsResponse {
    match selection_store.selections_for(user_id).await {
        Ok(selections) => SelectionsResponse::success(dish_store.summarize(selections)),
        Err(err) => SelectionsResponse::error(500, format!("{:?}", err)),
    }
}

#[instrument(skip(dish_store, selection_store))]
async fn api_get_selections(
    Extension(dish_store): Extension<Arc<DishStore>>,
    Extension(selection_store): Extension<SelectionStore>,
    Path(user_id): Path<String>,
) -> impl IntoResponse {
    metrics::count_request("get_selections");
    summary_for(&dish_store, &selection_store, &user_id).await
}

#[instrument(skip(dish_store, selection_store))]
async fn api_add_selection(
    Extension(dish_store): Extension<Arc<DishStore>>,
    Extension(selection_store): Extension<SelectionStore>,
    Path(user_id): Path<String>,
    Json(selection): Json<Selection>,
) -> impl IntoResponse {
    metrics::count_request("add_selection");
    if selection.quantity < 1 {
        return SelectionsResponse::error(400, "Selection quantity must be at least 1");
    }
    if let Err(err) = selection_store.add(&user_id, selection).await {
        return SelectionsResponse::error(500, format!("{:?}", err));
    }
    summary_for(&dish_store, &selection_store, &user_id).await
}

#[instrument(skip(dish_store, selection_store))]
async fn api_remove_selection(
    Extension(dish_store): Extension<Arc<DishStore>>,
    Extension(selection_store): Extension<SelectionStore>,
    Path((user_id, dish_id)): Path<(String, i64)>,
) -> impl IntoResponse {
    metrics::count_request("remove_selection");
    if let Err(err) = selection_store.remove(&user_id, dish_id).await {
        return SelectionsResponse::error(500, format!("{:?}", err));
    }
    summary_for(&dish_store, &selection_store, &user_id).await
}

pub fn api_router(dish_store: Arc<DishStore>, selection_store: SelectionStore) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary("/ui/menu") }))
        .route("/ui/*path", get(ui_static_assets))
        .route("/api/dishes", get(api_dishes))
        .route("/api/dishes/:dish_id/ingredients", get(api_dish_ingredients))
        .route("/api/meal-types", get(api_meal_types))
        .route(
            "/api/selections/:user_id",
            get(api_get_selections).post(api_add_selection),
        )
        .route("/api/selections/:user_id/:dish_id", delete(api_remove_selection))
        // NOTE(jwall): Layers only apply to the routes that precede them.
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(Extension(dish_store))
                .layer(Extension(selection_store)),
        )
}

#[instrument(fields(listen=?listen_socket), skip_all)]
pub async fn ui_main(
    dish_store: Arc<DishStore>,
    selection_store: SelectionStore,
    listen_socket: SocketAddr,
) {
    let metrics_handle = metrics::install();
    let router = api_router(dish_store, selection_store)
        .route("/metrics", get(metrics::export))
        .layer(Extension(metrics_handle));
    info!(
        http = format!("http://{}", listen_socket),
        "Starting server"
    );
    axum::Server::bind(&listen_socket)
        .serve(router.into_make_service())
        .await
        .expect("Failed to start service");
}
