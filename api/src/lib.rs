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
use std::collections::BTreeMap;

#[cfg(feature = "server")]
use axum::{
    self,
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
};
use serde::{Deserialize, Serialize};

use dishes::{Dish, DishIngredients, MealType, SelectionSummary};

#[derive(Serialize, Deserialize, Debug)]
pub enum Response<T> {
    Success(T),
    Err { status: u16, message: String },
    NotFound,
}

impl<T> Response<T> {
    pub fn error<S: Into<String>>(code: u16, msg: S) -> Self {
        Self::Err {
            status: code,
            message: msg.into(),
        }
    }

    pub fn success(payload: T) -> Self {
        Self::Success(payload)
    }

    #[cfg(feature = "browser")]
    pub fn as_success(self) -> Option<T> {
        if let Self::Success(val) = self {
            Some(val)
        } else {
            None
        }
    }
}

#[cfg(feature = "server")]
impl<T> IntoResponse for Response<T>
where
    T: Serialize,
{
    fn into_response(self) -> AxumResponse {
        match &self {
            Self::Success(_) => (StatusCode::OK, axum::Json::from(self)).into_response(),
            Self::Err { status, message: _ } => {
                let code = match StatusCode::from_u16(*status) {
                    Ok(c) => c,
                    Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (code, axum::Json::from(self)).into_response()
            }
            Self::NotFound => (StatusCode::NOT_FOUND, axum::Json::from(self)).into_response(),
        }
    }
}

impl<T> From<Result<T, String>> for Response<T> {
    fn from(val: Result<T, String>) -> Self {
        match val {
            Ok(val) => Response::Success(val),
            Err(e) => Response::error(500, e),
        }
    }
}

pub type DishListResponse = Response<Vec<Dish>>;

impl From<Vec<Dish>> for DishListResponse {
    fn from(dishes: Vec<Dish>) -> Self {
        Response::Success(dishes)
    }
}

pub type IngredientsResponse = Response<DishIngredients>;

impl From<DishIngredients> for IngredientsResponse {
    fn from(payload: DishIngredients) -> Self {
        Response::Success(payload)
    }
}

pub type SelectionsResponse = Response<SelectionSummary>;

impl From<SelectionSummary> for SelectionsResponse {
    fn from(summary: SelectionSummary) -> Self {
        Response::Success(summary)
    }
}

/// The meal type catalog with human labels, as served by the meal-types
/// endpoint.
#[derive(Serialize, Deserialize, Debug)]
pub struct MealTypesData {
    pub meal_types: Vec<MealType>,
    pub display_names: BTreeMap<MealType, String>,
}

impl MealTypesData {
    pub fn catalog() -> Self {
        Self {
            meal_types: MealType::ALL.to_vec(),
            display_names: MealType::ALL
                .iter()
                .map(|mt| (*mt, mt.display_name()))
                .collect(),
        }
    }
}

pub type MealTypesResponse = Response<MealTypesData>;

impl From<MealTypesData> for MealTypesResponse {
    fn from(data: MealTypesData) -> Self {
        Response::Success(data)
    }
}
