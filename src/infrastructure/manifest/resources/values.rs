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
use crate::domain::config::ApplicationIdentity;
use crate::infrastructure::constants::VALUES_FILE;
use crate::infrastructure::manifest::document::ManifestDocument;
use crate::shared::error::Result;

/// Root chart `values.yaml`; the only source of the `global` values the
/// sub-chart templates reference.
pub struct ValuesBuilder {
    application_name: String,
    application_version: String,
    repository_prefix: Option<String>,
}

impl ValuesBuilder {
    pub fn new(application: &ApplicationIdentity) -> Self {
        Self {
            application_name: application.name.clone(),
            application_version: application.version.clone(),
            repository_prefix: application.repository_prefix_value(),
        }
    }
}

impl ManifestBuilder for ValuesBuilder {
    fn file_name(&self) -> &'static str {
        VALUES_FILE
    }

    fn build(&self) -> Result<ManifestDocument> {
        let application = ManifestDocument::new()
            .with("name", self.application_name.as_str())
            .with("version", self.application_version.as_str());

        let global = ManifestDocument::new()
            .with("application", application)
            .with_optional("repositoryPrefix", self.repository_prefix.clone());

        Ok(ManifestDocument::new().with("global", global))
    }
}
