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
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlImageElement, HtmlInputElement};

/// The value of the input element an event fired on. Empty when the target
/// is not an input.
pub fn event_target_value(event: &Event) -> String {
    event
        .target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        .map(|el| el.value())
        .unwrap_or_default()
}

/// The checked state of the checkbox an event fired on.
pub fn event_target_checked(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        .map(|el| el.checked())
        .unwrap_or_default()
}

/// Swap the image an error event fired on over to the fallback url. The
/// equality check stops a broken fallback from looping.
pub fn swap_image_to_fallback(event: &Event, fallback: &str) {
    if let Some(img) = event
        .target()
        .and_then(|target| target.dyn_into::<HtmlImageElement>().ok())
    {
        if img.src() != fallback {
            img.set_src(fallback);
        }
    }
}
