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
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use tracing::{instrument, warn};

use dishes::{
    DietaryType, Dish, DishIngredients, Ingredient, MealType, Selection, SelectionAccumulator,
    SelectionSummary,
};

/// The dish catalog that ships in the binary when no catalog file is given.
const SEED_CATALOG: &str = include_str!("../seed/dishes.json");

#[derive(Debug)]
pub enum LoadError {
    IO(std::io::Error),
    Syntax(String),
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::IO(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Syntax(format!("{}", err))
    }
}

/// One catalog entry. The dish as the api serves it plus the ingredient list
/// that only the ingredient lookup exposes.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DishRecord {
    #[serde(flatten)]
    pub dish: Dish,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

/// The immutable dish catalog. Loaded once at startup and shared behind an
/// Arc.
pub struct DishStore {
    records: Vec<DishRecord>,
}

impl DishStore {
    pub fn from_json(content: &str) -> Result<Self, LoadError> {
        Ok(Self {
            records: serde_json::from_str(content)?,
        })
    }

    #[instrument]
    pub async fn from_file(path: &str) -> Result<Self, LoadError> {
        let content = async_std::fs::read_to_string(path).await?;
        Self::from_json(&content)
    }

    pub fn seeded() -> Self {
        Self::from_json(SEED_CATALOG).expect("The embedded dish catalog is valid json")
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// List dishes, narrowed by any of the query predicates. The predicates
    /// compose the way the dishes endpoint composes them.
    pub fn dishes(
        &self,
        meal_type: Option<MealType>,
        dietary: Option<DietaryType>,
        search: Option<&str>,
    ) -> Vec<Dish> {
        self.records
            .iter()
            .map(|r| &r.dish)
            .filter(|d| meal_type.map_or(true, |mt| d.meal_type == mt))
            .filter(|d| dietary.map_or(true, |dt| d.dietary == dt))
            .filter(|d| search.map_or(true, |text| d.name_matches(text)))
            .cloned()
            .collect()
    }

    pub fn get(&self, dish_id: i64) -> Option<&DishRecord> {
        self.records.iter().find(|r| r.dish.id == dish_id)
    }

    pub fn ingredients(&self, dish_id: i64) -> Option<DishIngredients> {
        self.get(dish_id).map(|record| DishIngredients {
            dish: record.dish.clone(),
            ingredients: record.ingredients.clone(),
        })
    }

    /// Derive the summary for a selection set. Selections that reference a
    /// dish the catalog no longer carries contribute nothing.
    pub fn summarize(&self, selections: Vec<Selection>) -> SelectionSummary {
        let mut acc = SelectionAccumulator::new();
        for selection in selections {
            match self.get(selection.dish_id) {
                Some(record) => acc.accumulate(selection, record.dish.meal_type),
                None => {
                    warn!(
                        dish_id = selection.dish_id,
                        "Selection references an unknown dish"
                    );
                }
            }
        }
        acc.summary()
    }
}

/// Per user selections, persisted in sqlite.
#[derive(Clone)]
pub struct SelectionStore {
    pool: SqlitePool,
}

impl SelectionStore {
    pub async fn new(db_url: &str) -> sqlx::Result<Self> {
        let options = SqliteConnectOptions::from_str(db_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        Ok(Self { pool })
    }

    #[cfg(test)]
    pub async fn in_memory() -> sqlx::Result<Self> {
        // A single connection or every query sees its own empty database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    #[instrument(skip(self))]
    pub async fn selections_for(&self, user_id: &str) -> sqlx::Result<Vec<Selection>> {
        let rows = sqlx::query(
            "SELECT dish_id, quantity FROM selections WHERE user_id = ? ORDER BY dish_id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .iter()
            .map(|row| {
                Selection::new(
                    row.get::<i64, _>("dish_id"),
                    row.get::<i64, _>("quantity") as u32,
                )
            })
            .collect())
    }

    /// Adding a dish that is already selected increments the stored quantity
    /// by the posted amount rather than replacing it.
    #[instrument(skip(self))]
    pub async fn add(&self, user_id: &str, selection: Selection) -> sqlx::Result<()> {
        sqlx::query(
            "INSERT INTO selections (user_id, dish_id, quantity) VALUES (?, ?, ?) \
             ON CONFLICT (user_id, dish_id) DO UPDATE SET quantity = quantity + excluded.quantity",
        )
        .bind(user_id)
        .bind(selection.dish_id)
        .bind(selection.quantity as i64)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Removal deletes the whole row. There is no zero quantity state.
    #[instrument(skip(self))]
    pub async fn remove(&self, user_id: &str, dish_id: i64) -> sqlx::Result<()> {
        sqlx::query("DELETE FROM selections WHERE user_id = ? AND dish_id = ?")
            .bind(user_id)
            .bind(dish_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
