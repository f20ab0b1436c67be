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
use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::path::Path;

use crate::store::{DishRecord, LoadError};

pub fn parse_catalog<P>(path: P) -> Result<Vec<DishRecord>, LoadError>
where
    P: AsRef<Path>,
{
    let mut br = BufReader::new(File::open(path)?);
    let mut buf = Vec::new();
    br.read_to_end(&mut buf)?;
    let content = String::from_utf8_lossy(&buf).to_string();
    Ok(serde_json::from_str(&content)?)
}

pub fn output_dish_info(records: Vec<DishRecord>, print_ingredients: bool) {
    for record in records {
        println!(
            "{} [{}] ({})",
            record.dish.name,
            record.dish.meal_type.display_name(),
            record.dish.dietary.display_name()
        );
        println!("    {}", record.dish.description);
        if print_ingredients {
            if record.ingredients.is_empty() {
                println!("    No ingredients information available");
            } else {
                for ingredient in record.ingredients.iter() {
                    println!("    * {}", ingredient);
                }
            }
        }
    }
}
