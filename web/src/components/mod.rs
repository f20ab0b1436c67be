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
pub mod dish_card;
pub mod filter_toggle;
pub mod header;
pub mod meal_type_tabs;
pub mod search_bar;
pub mod selection_summary;

pub use dish_card::*;
pub use filter_toggle::*;
pub use header::*;
pub use meal_type_tabs::*;
pub use search_bar::*;
pub use selection_summary::*;

/// Shown when a dish has no image url or its image fails to load.
pub const FALLBACK_DISH_IMAGE: &str =
    "https://images.unsplash.com/photo-1565299624946-b28f40a0ca4b?w=400";
