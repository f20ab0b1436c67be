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
use std::sync::Arc;

use async_std::task::block_on;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use client_api::{
    DishListResponse, IngredientsResponse, MealTypesResponse, Response, SelectionsResponse,
};
use dishes::{DietaryType, MealType, Selection, SelectionSummary};

use crate::migrations;
use crate::store::{DishStore, SelectionStore};

use super::api_router;

async fn test_router() -> Router {
    let dish_store = Arc::new(DishStore::seeded());
    let selection_store = SelectionStore::in_memory()
        .await
        .expect("Unable to open an in memory selection store");
    migrations::run_migration(selection_store.pool()).await;
    api_router(dish_store, selection_store)
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    (status, bytes.to_vec())
}

async fn send_json(router: &Router, method: &str, uri: &str, body: String) -> StatusCode {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    response.status()
}

fn decode<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> T {
    serde_json::from_slice(bytes).expect("Unparseable api response")
}

async fn fetch_dishes(router: &Router, uri: &str) -> Vec<dishes::Dish> {
    let (status, bytes) = get(router, uri).await;
    assert_eq!(status, StatusCode::OK);
    match decode::<DishListResponse>(&bytes) {
        Response::Success(dishes) => dishes,
        other => panic!("Expected a dish list, got {:?}", other),
    }
}

async fn fetch_summary(router: &Router, user_id: &str) -> SelectionSummary {
    let (status, bytes) = get(router, &format!("/api/selections/{}", user_id)).await;
    assert_eq!(status, StatusCode::OK);
    match decode::<SelectionsResponse>(&bytes) {
        Response::Success(summary) => summary,
        other => panic!("Expected a selection summary, got {:?}", other),
    }
}

async fn add_selection(router: &Router, user_id: &str, selection: Selection) -> StatusCode {
    send_json(
        router,
        "POST",
        &format!("/api/selections/{}", user_id),
        serde_json::to_string(&selection).unwrap(),
    )
    .await
}

#[test]
fn test_dish_query_scopes_by_meal_type_and_search() {
    block_on(async {
        let router = test_router().await;
        // The exact url the menu builds for a dessert search.
        let dishes = fetch_dishes(&router, "/api/dishes?meal_type=DESSERT&search=cake").await;
        assert_eq!(dishes.len(), 1);
        assert_eq!(dishes[0].name, "Chocolate Cake");
        assert_eq!(dishes[0].meal_type, MealType::Dessert);
    });
}

#[test]
fn test_dish_query_filters_compose_and_ignore_case() {
    block_on(async {
        let router = test_router().await;
        let starters = fetch_dishes(&router, "/api/dishes?meal_type=starter").await;
        assert_eq!(starters.len(), 5);
        assert!(starters.iter().all(|d| d.meal_type == MealType::Starter));

        let veg_starters =
            fetch_dishes(&router, "/api/dishes?meal_type=STARTER&dish_type=VEG").await;
        assert_eq!(veg_starters.len(), 3);
        assert!(veg_starters.iter().all(|d| d.dietary == DietaryType::Veg));

        let paneer = fetch_dishes(&router, "/api/dishes?search=paneer").await;
        assert_eq!(paneer.len(), 2);
    });
}

#[test]
fn test_dish_query_with_unrecognized_meal_type_matches_nothing() {
    block_on(async {
        let router = test_router().await;
        let dishes = fetch_dishes(&router, "/api/dishes?meal_type=BRUNCH").await;
        assert!(dishes.is_empty());
    });
}

#[test]
fn test_unfiltered_dish_query_serves_the_whole_catalog() {
    block_on(async {
        let router = test_router().await;
        let dishes = fetch_dishes(&router, "/api/dishes").await;
        assert_eq!(dishes.len(), 18);
    });
}

#[test]
fn test_ingredient_lookup_returns_the_dish_payload() {
    block_on(async {
        let router = test_router().await;
        let (status, bytes) = get(&router, "/api/dishes/101/ingredients").await;
        assert_eq!(status, StatusCode::OK);
        match decode::<IngredientsResponse>(&bytes) {
            Response::Success(payload) => {
                assert_eq!(payload.dish.id, 101);
                assert_eq!(payload.ingredients.len(), 3);
            }
            other => panic!("Expected an ingredient payload, got {:?}", other),
        }
    });
}

#[test]
fn test_ingredient_lookup_with_no_rows_is_success_not_error() {
    block_on(async {
        let router = test_router().await;
        let (status, bytes) = get(&router, "/api/dishes/304/ingredients").await;
        assert_eq!(status, StatusCode::OK);
        match decode::<IngredientsResponse>(&bytes) {
            Response::Success(payload) => assert!(payload.ingredients.is_empty()),
            other => panic!("Expected an ingredient payload, got {:?}", other),
        }
    });
}

#[test]
fn test_ingredient_lookup_for_an_unknown_dish_is_not_found() {
    block_on(async {
        let router = test_router().await;
        let (status, bytes) = get(&router, "/api/dishes/999/ingredients").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(matches!(
            decode::<IngredientsResponse>(&bytes),
            Response::NotFound
        ));
    });
}

#[test]
fn test_selection_lifecycle_maintains_the_summary_invariants() {
    block_on(async {
        let router = test_router().await;

        let summary = fetch_summary(&router, "user123").await;
        assert_eq!(summary.total_count, 0);
        assert_eq!(summary.category_counts.len(), 4);

        assert_eq!(
            add_selection(&router, "user123", Selection::single(101)).await,
            StatusCode::OK
        );
        assert_eq!(
            add_selection(&router, "user123", Selection::single(301)).await,
            StatusCode::OK
        );

        let summary = fetch_summary(&router, "user123").await;
        assert_eq!(summary.total_count, 2);
        assert_eq!(summary.count_for(MealType::Starter), 1);
        assert_eq!(summary.count_for(MealType::Dessert), 1);
        let summed: u32 = summary.category_counts.values().sum();
        assert_eq!(summed, summary.total_count);

        // Removing what was added restores the prior total.
        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/selections/user123/301")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let summary = fetch_summary(&router, "user123").await;
        assert_eq!(summary.total_count, 1);
        assert_eq!(summary.count_for(MealType::Dessert), 0);
    });
}

#[test]
fn test_repeated_adds_accumulate_quantity() {
    block_on(async {
        let router = test_router().await;
        add_selection(&router, "user123", Selection::single(101)).await;
        add_selection(&router, "user123", Selection::single(101)).await;
        let summary = fetch_summary(&router, "user123").await;
        assert_eq!(summary.total_count, 2);
        assert_eq!(summary.selections, vec![Selection::new(101, 2)]);
    });
}

#[test]
fn test_zero_quantity_selections_are_rejected() {
    block_on(async {
        let router = test_router().await;
        assert_eq!(
            add_selection(&router, "user123", Selection::new(101, 0)).await,
            StatusCode::BAD_REQUEST
        );
        let summary = fetch_summary(&router, "user123").await;
        assert_eq!(summary.total_count, 0);
    });
}

#[test]
fn test_meal_types_endpoint_serves_the_catalog() {
    block_on(async {
        let router = test_router().await;
        let (status, bytes) = get(&router, "/api/meal-types").await;
        assert_eq!(status, StatusCode::OK);
        match decode::<MealTypesResponse>(&bytes) {
            Response::Success(data) => {
                assert_eq!(data.meal_types.len(), 4);
                assert_eq!(
                    data.display_names.get(&MealType::MainCourse),
                    Some(&"Main Course".to_owned())
                );
            }
            other => panic!("Expected the meal type catalog, got {:?}", other),
        }
    });
}

#[test]
fn test_root_redirects_to_the_menu() {
    block_on(async {
        let router = test_router().await;
        let (status, _) = get(&router, "/").await;
        assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    });
}

#[test]
fn test_client_routed_paths_serve_the_app_shell() {
    block_on(async {
        let router = test_router().await;
        let (status, bytes) = get(&router, "/ui/menu").await;
        assert_eq!(status, StatusCode::OK);
        let body = String::from_utf8_lossy(&bytes).to_string();
        assert!(body.contains("<html"));

        let (status, _) = get(&router, "/ui/ingredients/101").await;
        assert_eq!(status, StatusCode::OK);
    });
}
