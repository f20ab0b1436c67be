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
use std::fmt;
use std::str::FromStr;

use inflector::Inflector;
use serde::{Deserialize, Serialize};

/// The primary browsing category for a dish.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MealType {
    Starter,
    MainCourse,
    Dessert,
    Sides,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Starter,
        MealType::MainCourse,
        MealType::Dessert,
        MealType::Sides,
    ];

    /// The wire name. Matches what serde produces for this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Starter => "STARTER",
            MealType::MainCourse => "MAIN_COURSE",
            MealType::Dessert => "DESSERT",
            MealType::Sides => "SIDES",
        }
    }

    pub fn display_name(&self) -> String {
        self.as_str().to_title_case()
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MealType {
    type Err = String;

    /// Case insensitive. Query parameters arrive in whatever case the caller
    /// felt like using.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "STARTER" => Ok(MealType::Starter),
            "MAIN_COURSE" => Ok(MealType::MainCourse),
            "DESSERT" => Ok(MealType::Dessert),
            "SIDES" => Ok(MealType::Sides),
            _ => Err(format!("Not a meal type: {}", s)),
        }
    }
}

/// Vegetarian or not. There is no third option.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DietaryType {
    Veg,
    NonVeg,
}

impl DietaryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryType::Veg => "VEG",
            DietaryType::NonVeg => "NON_VEG",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DietaryType::Veg => "Vegetarian",
            DietaryType::NonVeg => "Non-Vegetarian",
        }
    }

    pub fn is_veg(&self) -> bool {
        matches!(self, DietaryType::Veg)
    }
}

impl fmt::Display for DietaryType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DietaryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "VEG" => Ok(DietaryType::Veg),
            "NON_VEG" => Ok(DietaryType::NonVeg),
            _ => Err(format!("Not a dietary type: {}", s)),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub is_recommended_for_meal_suggestion: bool,
}

impl Category {
    pub fn new<S: Into<String>>(id: i64, name: S) -> Self {
        Self {
            id,
            name: name.into(),
            image: String::new(),
            is_recommended_for_meal_suggestion: true,
        }
    }
}

/// A dish on the party menu. Ingredients are not embedded here. They are
/// served on demand by the ingredient lookup.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    pub meal_type: MealType,
    #[serde(rename = "type")]
    pub dietary: DietaryType,
    pub category_id: i64,
    pub dish_type: String,
    pub category: Category,
}

impl Dish {
    pub fn new<S: Into<String>>(
        id: i64,
        name: S,
        description: S,
        meal_type: MealType,
        dietary: DietaryType,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            image: None,
            meal_type,
            dietary,
            category_id: 0,
            dish_type: String::new(),
            category: Category::new(0, ""),
        }
    }

    pub fn with_image<S: Into<String>>(mut self, url: S) -> Self {
        self.image = Some(url.into());
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category_id = category.id;
        self.category = category;
        self
    }

    pub fn with_dish_type<S: Into<String>>(mut self, dish_type: S) -> Self {
        self.dish_type = dish_type.into();
        self
    }

    /// Case insensitive name containment. An empty search matches everything.
    pub fn name_matches(&self, search: &str) -> bool {
        self.name.to_lowercase().contains(&search.to_lowercase())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub name: String,
    pub quantity: u32,
    pub unit: String,
}

impl Ingredient {
    pub fn new<S: Into<String>>(name: S, quantity: u32, unit: S) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.quantity, self.unit, self.name)
    }
}

/// The payload of the ingredient lookup. An empty ingredient list is a valid
/// state, not an error.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DishIngredients {
    pub dish: Dish,
    pub ingredients: Vec<Ingredient>,
}

/// One line of a user's running selection. A dish that is not selected has no
/// entry at all. Present entries always carry a quantity of at least one.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub dish_id: i64,
    pub quantity: u32,
}

impl Selection {
    pub fn new(dish_id: i64, quantity: u32) -> Self {
        Self { dish_id, quantity }
    }

    /// The shape the menu always submits. Adds are a single unit.
    pub fn single(dish_id: i64) -> Self {
        Self {
            dish_id,
            quantity: 1,
        }
    }
}

/// The server derived aggregate of a user's selections. All four meal type
/// keys are always present, zeros included.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SelectionSummary {
    pub selections: Vec<Selection>,
    pub total_count: u32,
    pub category_counts: BTreeMap<MealType, u32>,
}

impl SelectionSummary {
    pub fn count_for(&self, meal_type: MealType) -> u32 {
        self.category_counts
            .get(&meal_type)
            .copied()
            .unwrap_or_default()
    }
}

impl Default for SelectionSummary {
    fn default() -> Self {
        SelectionAccumulator::new().summary()
    }
}

/// Accumulates selection lines into a [SelectionSummary], bucketed by meal
/// type.
pub struct SelectionAccumulator {
    selections: Vec<Selection>,
    counts: BTreeMap<MealType, u32>,
    total: u32,
}

impl SelectionAccumulator {
    pub fn new() -> Self {
        Self {
            selections: Vec::new(),
            counts: MealType::ALL.iter().map(|mt| (*mt, 0)).collect(),
            total: 0,
        }
    }

    pub fn accumulate(&mut self, selection: Selection, meal_type: MealType) {
        *self
            .counts
            .get_mut(&meal_type)
            .expect("every meal type is seeded at construction") += selection.quantity;
        self.total += selection.quantity;
        self.selections.push(selection);
    }

    pub fn summary(self) -> SelectionSummary {
        SelectionSummary {
            selections: self.selections,
            total_count: self.total,
            category_counts: self.counts,
        }
    }
}

/// The client side dietary pass applied over a fetched dish list.
///
/// Both flags off is a deliberate "show nothing" state and both flags on
/// leaves the server's response untouched. The dietary reduction is never
/// sent as a query parameter by the menu.
pub fn filter_by_dietary(dishes: Vec<Dish>, veg: bool, non_veg: bool) -> Vec<Dish> {
    match (veg, non_veg) {
        (true, true) => dishes,
        (false, false) => Vec::new(),
        (true, false) => dishes
            .into_iter()
            .filter(|d| d.dietary == DietaryType::Veg)
            .collect(),
        (false, true) => dishes
            .into_iter()
            .filter(|d| d.dietary == DietaryType::NonVeg)
            .collect(),
    }
}

#[cfg(test)]
mod test;
