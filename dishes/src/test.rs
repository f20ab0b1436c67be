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
use crate::*;

fn dish(id: i64, name: &str, meal_type: MealType, dietary: DietaryType) -> Dish {
    Dish::new(id, name, "a test dish", meal_type, dietary)
        .with_category(Category::new(1, "Test Category"))
        .with_dish_type("TEST")
}

fn mixed_menu() -> Vec<Dish> {
    vec![
        dish(1, "Samosa", MealType::Starter, DietaryType::Veg),
        dish(2, "Chicken Wings", MealType::Starter, DietaryType::NonVeg),
        dish(3, "Paneer Tikka", MealType::Starter, DietaryType::Veg),
        dish(4, "Fish Fry", MealType::Starter, DietaryType::NonVeg),
    ]
}

#[test]
fn test_meal_type_parsing() {
    let cases = vec![
        ("STARTER", MealType::Starter),
        ("starter", MealType::Starter),
        ("Main_Course", MealType::MainCourse),
        ("MAIN_COURSE", MealType::MainCourse),
        ("dessert", MealType::Dessert),
        ("SIDES", MealType::Sides),
    ];
    for (input, expected) in cases {
        assert_eq!(input.parse::<MealType>(), Ok(expected));
    }
    assert!("BRUNCH".parse::<MealType>().is_err());
}

#[test]
fn test_meal_type_round_trips_through_its_wire_name() {
    for mt in MealType::ALL {
        assert_eq!(mt.as_str().parse::<MealType>(), Ok(mt));
    }
}

#[test]
fn test_meal_type_display_names() {
    assert_eq!(MealType::Starter.display_name(), "Starter");
    assert_eq!(MealType::MainCourse.display_name(), "Main Course");
    assert_eq!(MealType::Dessert.display_name(), "Dessert");
    assert_eq!(MealType::Sides.display_name(), "Sides");
}

#[test]
fn test_dietary_type_parsing_and_display() {
    assert_eq!("veg".parse::<DietaryType>(), Ok(DietaryType::Veg));
    assert_eq!("NON_VEG".parse::<DietaryType>(), Ok(DietaryType::NonVeg));
    assert!("VEGAN".parse::<DietaryType>().is_err());
    assert_eq!(DietaryType::Veg.display_name(), "Vegetarian");
    assert_eq!(DietaryType::NonVeg.display_name(), "Non-Vegetarian");
}

#[test]
fn test_dish_wire_format_uses_camel_case_keys() {
    let d = dish(101, "Samosa", MealType::Starter, DietaryType::Veg)
        .with_image("https://example.com/samosa.jpg");
    let json = serde_json::to_value(&d).unwrap();
    assert_eq!(json["mealType"], "STARTER");
    assert_eq!(json["type"], "VEG");
    assert_eq!(json["categoryId"], 1);
    assert_eq!(json["dishType"], "TEST");
    assert_eq!(json["category"]["isRecommendedForMealSuggestion"], true);
    let parsed: Dish = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, d);
}

#[test]
fn test_dish_image_is_optional_on_the_wire() {
    let json = r#"{
        "id": 7,
        "name": "Raita",
        "description": "Yogurt side",
        "mealType": "SIDES",
        "type": "VEG",
        "categoryId": 12,
        "dishType": "YOGURT",
        "category": {"id": 12, "name": "Accompaniments"}
    }"#;
    let parsed: Dish = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.image, None);
    assert_eq!(parsed.meal_type, MealType::Sides);
}

#[test]
fn test_name_matches_is_case_insensitive_containment() {
    let d = dish(1, "Chocolate Cake", MealType::Dessert, DietaryType::Veg);
    assert!(d.name_matches("cake"));
    assert!(d.name_matches("CHOCO"));
    assert!(d.name_matches(""));
    assert!(!d.name_matches("pie"));
}

#[test]
fn test_dietary_filter_with_both_flags_on_is_identity() {
    let menu = mixed_menu();
    assert_eq!(filter_by_dietary(menu.clone(), true, true), menu);
}

#[test]
fn test_dietary_filter_with_both_flags_off_is_empty() {
    assert!(filter_by_dietary(mixed_menu(), false, false).is_empty());
}

#[test]
fn test_dietary_filter_keeps_only_the_enabled_type() {
    let veg_only = filter_by_dietary(mixed_menu(), true, false);
    assert_eq!(veg_only.len(), 2);
    assert!(veg_only.iter().all(|d| d.dietary == DietaryType::Veg));

    let non_veg_only = filter_by_dietary(mixed_menu(), false, true);
    assert_eq!(non_veg_only.len(), 2);
    assert!(non_veg_only.iter().all(|d| d.dietary == DietaryType::NonVeg));
}

#[test]
fn test_empty_summary_still_carries_all_four_meal_types() {
    let summary = SelectionSummary::default();
    assert_eq!(summary.total_count, 0);
    assert_eq!(summary.category_counts.len(), 4);
    for mt in MealType::ALL {
        assert_eq!(summary.count_for(mt), 0);
    }
}

#[test]
fn test_accumulated_category_counts_sum_to_the_total() {
    let mut acc = SelectionAccumulator::new();
    acc.accumulate(Selection::new(101, 2), MealType::Starter);
    acc.accumulate(Selection::single(201), MealType::MainCourse);
    acc.accumulate(Selection::new(301, 3), MealType::Dessert);
    let summary = acc.summary();
    assert_eq!(summary.total_count, 6);
    let summed: u32 = summary.category_counts.values().sum();
    assert_eq!(summed, summary.total_count);
    assert_eq!(summary.count_for(MealType::Starter), 2);
    assert_eq!(summary.count_for(MealType::MainCourse), 1);
    assert_eq!(summary.count_for(MealType::Dessert), 3);
    assert_eq!(summary.count_for(MealType::Sides), 0);
}

#[test]
fn test_removing_a_selection_restores_the_prior_total() {
    let mut acc = SelectionAccumulator::new();
    acc.accumulate(Selection::single(101), MealType::Starter);
    let before = acc.summary();

    // The same set plus one dessert, then derived again without it.
    let mut acc = SelectionAccumulator::new();
    acc.accumulate(Selection::single(101), MealType::Starter);
    acc.accumulate(Selection::single(301), MealType::Dessert);
    let with_dessert = acc.summary();
    assert_eq!(with_dessert.total_count, before.total_count + 1);

    let mut acc = SelectionAccumulator::new();
    for sel in with_dessert
        .selections
        .iter()
        .filter(|sel| sel.dish_id != 301)
    {
        acc.accumulate(*sel, MealType::Starter);
    }
    assert_eq!(acc.summary().total_count, before.total_count);
}

#[test]
fn test_summary_meal_type_keys_serialize_as_wire_names() {
    let json = serde_json::to_value(&SelectionSummary::default()).unwrap();
    let counts = json["category_counts"].as_object().unwrap();
    for mt in MealType::ALL {
        assert_eq!(counts[mt.as_str()], 0);
    }
}

#[test]
fn test_single_selection_always_has_quantity_one() {
    assert_eq!(Selection::single(42).quantity, 1);
}

#[test]
fn test_ingredient_display() {
    let cases = vec![
        (Ingredient::new("Potato", 2, "medium"), "2 medium Potato"),
        (Ingredient::new("Chicken", 500, "grams"), "500 grams Chicken"),
        (Ingredient::new("Cardamom", 4, "pods"), "4 pods Cardamom"),
    ];
    for (ingredient, expected) in cases {
        assert_eq!(format!("{}", ingredient), expected);
    }
}
