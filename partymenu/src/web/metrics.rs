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
use axum::extract::Extension;
use metrics::increment_counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the global recorder backing the `/metrics` exposition endpoint.
pub fn install() -> PrometheusHandle {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("Unable to install the prometheus recorder")
}

/// Count one api request against the named endpoint. A no-op when no
/// recorder is installed, which keeps tests quiet.
pub fn count_request(endpoint: &'static str) {
    increment_counter!("api_request_counter", "endpoint" => endpoint);
}

pub async fn export(Extension(handle): Extension<PrometheusHandle>) -> String {
    handle.render()
}
