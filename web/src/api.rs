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
use gloo_net;
use sycamore::prelude::*;
use tracing::{debug, instrument};
use wasm_bindgen::JsValue;

use client_api::{DishListResponse, IngredientsResponse, SelectionsResponse};
use dishes::{Dish, DishIngredients, MealType, Selection, SelectionSummary};

#[derive(Debug)]
pub struct Error(String);

impl From<Error> for String {
    fn from(item: Error) -> Self {
        format!("{:?}", item)
    }
}

impl From<JsValue> for Error {
    fn from(item: JsValue) -> Self {
        Error(format!("{:?}", item))
    }
}

impl From<String> for Error {
    fn from(item: String) -> Self {
        Error(item)
    }
}

impl From<&'static str> for Error {
    fn from(item: &'static str) -> Self {
        Error(item.to_owned())
    }
}

impl From<gloo_net::Error> for Error {
    fn from(item: gloo_net::Error) -> Self {
        Error(format!("{:?}", item))
    }
}

#[derive(Clone, Debug)]
pub struct HttpStore {
    root: String,
}

impl HttpStore {
    pub fn new(root: String) -> Self {
        Self { root }
    }

    pub fn provide_context<S: Into<String>>(cx: Scope, root: S) {
        provide_context(cx, std::rc::Rc::new(Self::new(root.into())));
    }

    pub fn get_from_context(cx: Scope) -> std::rc::Rc<Self> {
        use_context::<std::rc::Rc<Self>>(cx).clone()
    }

    /// The dish list url for a menu state. The search text only rides along
    /// when it is non empty, encoded the way the browser encodes query
    /// components.
    fn dish_query_path(&self, meal_type: MealType, search: &str) -> String {
        let mut path = format!("{}/dishes?meal_type={}", self.root, meal_type);
        if !search.is_empty() {
            path.push_str("&search=");
            path.push_str(&String::from(js_sys::encode_uri_component(search)));
        }
        path
    }

    #[instrument]
    pub async fn get_dishes(&self, meal_type: MealType, search: &str) -> Result<Vec<Dish>, Error> {
        let path = self.dish_query_path(meal_type, search);
        let resp = gloo_net::http::Request::get(&path).send().await?;
        if resp.status() != 200 {
            return Err(format!("Status: {}", resp.status()).into());
        }
        debug!("We got a valid response back!");
        Ok(resp
            .json::<DishListResponse>()
            .await
            .map_err(|e| format!("{}", e))?
            .as_success()
            .unwrap_or_default())
    }

    #[instrument]
    pub async fn get_dish_ingredients<S: AsRef<str> + std::fmt::Display + std::fmt::Debug>(
        &self,
        dish_id: S,
    ) -> Result<Option<DishIngredients>, Error> {
        let mut path = self.root.clone();
        path.push_str("/dishes/");
        path.push_str(dish_id.as_ref());
        path.push_str("/ingredients");
        let resp = gloo_net::http::Request::get(&path).send().await?;
        if resp.status() == 404 {
            debug!("Dish doesn't exist");
            return Ok(None);
        }
        if resp.status() != 200 {
            return Err(format!("Status: {}", resp.status()).into());
        }
        debug!("We got a valid response back!");
        Ok(resp
            .json::<IngredientsResponse>()
            .await
            .map_err(|e| format!("{}", e))?
            .as_success())
    }

    #[instrument]
    pub async fn get_selections(&self, user_id: &str) -> Result<SelectionSummary, Error> {
        let mut path = self.root.clone();
        path.push_str("/selections/");
        path.push_str(user_id);
        let resp = gloo_net::http::Request::get(&path).send().await?;
        if resp.status() != 200 {
            return Err(format!("Status: {}", resp.status()).into());
        }
        debug!("We got a valid response back!");
        resp.json::<SelectionsResponse>()
            .await
            .map_err(|e| format!("{}", e))?
            .as_success()
            .ok_or_else(|| "Unexpected selection summary payload".into())
    }

    /// Always posts a single unit. The menu has no increment affordance.
    #[instrument]
    pub async fn add_selection(&self, user_id: &str, dish_id: i64) -> Result<(), Error> {
        let mut path = self.root.clone();
        path.push_str("/selections/");
        path.push_str(user_id);
        let resp = gloo_net::http::Request::post(&path)
            .json(&Selection::single(dish_id))?
            .send()
            .await?;
        if resp.status() != 200 {
            return Err(format!("Status: {}", resp.status()).into());
        }
        debug!("We got a valid response back!");
        Ok(())
    }

    #[instrument]
    pub async fn remove_selection(&self, user_id: &str, dish_id: i64) -> Result<(), Error> {
        let path = format!("{}/selections/{}/{}", self.root, user_id, dish_id);
        let resp = gloo_net::http::Request::delete(&path).send().await?;
        if resp.status() != 200 {
            return Err(format!("Status: {}", resp.status()).into());
        }
        debug!("We got a valid response back!");
        Ok(())
    }
}
