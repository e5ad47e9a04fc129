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

use crate::infrastructure::constants::{LABEL_APP, VERSION_PLACEHOLDER};
use crate::infrastructure::manifest::document::ManifestDocument;
use crate::shared::error::Result;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use std::collections::BTreeMap;

pub trait ManifestBuilder {
    /// File the document is written to, relative to its chart or templates directory
    fn file_name(&self) -> &'static str;

    fn build(&self) -> Result<ManifestDocument>;
}

pub trait LabeledResourceBuilder {
    fn application_name(&self) -> &str;

    fn get_labels(&self) -> BTreeMap<String, String> {
        let mut labels = BTreeMap::new();
        labels.insert(
            LABEL_APP.to_string(),
            format!("{}-{}", self.application_name(), VERSION_PLACEHOLDER),
        );
        labels
    }

    fn get_selector_labels(&self) -> BTreeMap<String, String> {
        let mut labels = BTreeMap::new();
        labels.insert(LABEL_APP.to_string(), self.application_name().to_string());
        labels
    }

    fn build_metadata(&self, name: String) -> ObjectMeta {
        ObjectMeta {
            name: Some(name),
            labels: Some(self.get_labels()),
            ..Default::default()
        }
    }
}
