// Copyright 2025 JiangLong.
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

use super::traits::ManifestBuilder;
use crate::infrastructure::constants::{CHART_API_VERSION, CHART_FILE};
use crate::infrastructure::manifest::document::ManifestDocument;
use crate::shared::error::Result;

/// `Chart.yaml` for the application chart and for every service sub-chart
pub struct ChartBuilder {
    name: String,
    version: String,
    description: String,
}

impl ChartBuilder {
    pub fn new(name: String, version: String, description: String) -> Self {
        Self {
            name,
            version,
            description,
        }
    }

    pub fn for_service(service_name: &str, version: &str) -> Self {
        Self::new(
            service_name.to_string(),
            version.to_string(),
            format!("A Helm deployment chart for the '{}' service.", service_name),
        )
    }
}

impl ManifestBuilder for ChartBuilder {
    fn file_name(&self) -> &'static str {
        CHART_FILE
    }

    fn build(&self) -> Result<ManifestDocument> {
        Ok(ManifestDocument::new()
            .with("apiVersion", CHART_API_VERSION)
            .with("name", self.name.as_str())
            .with("version", self.version.as_str())
            .with("description", self.description.as_str()))
    }
}
