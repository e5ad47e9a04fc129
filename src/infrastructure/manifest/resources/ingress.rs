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

use super::traits::{LabeledResourceBuilder, ManifestBuilder};
use crate::infrastructure::constants::{
    INGRESS_API_VERSION, INGRESS_CLASS, INGRESS_CLASS_ANNOTATION, INGRESS_FILE, KIND_INGRESS,
    SUFFIX_INGRESS,
};
use crate::infrastructure::manifest::document::{to_value, ManifestDocument};
use crate::shared::error::Result;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::BTreeMap;

/// One `extensions/v1beta1` HTTP path rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngressPath {
    pub path: String,
    pub backend: IngressBackend,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngressBackend {
    pub service_name: String,
    pub service_port: i32,
}

pub struct IngressBuilder {
    application_name: String,
    service_name: String,
    paths: Vec<IngressPath>,
}

impl IngressBuilder {
    pub fn new(application_name: String, service_name: String, paths: Vec<IngressPath>) -> Self {
        Self {
            application_name,
            service_name,
            paths,
        }
    }

    pub fn get_annotations(&self) -> BTreeMap<String, String> {
        let mut annotations = BTreeMap::new();
        annotations.insert(
            INGRESS_CLASS_ANNOTATION.to_string(),
            INGRESS_CLASS.to_string(),
        );
        annotations
    }
}

impl LabeledResourceBuilder for IngressBuilder {
    fn application_name(&self) -> &str {
        &self.application_name
    }
}

impl ManifestBuilder for IngressBuilder {
    fn file_name(&self) -> &'static str {
        INGRESS_FILE
    }

    fn build(&self) -> Result<ManifestDocument> {
        let mut metadata = self.build_metadata(format!("{}{}", self.service_name, SUFFIX_INGRESS));
        metadata.annotations = Some(self.get_annotations());

        let http = ManifestDocument::new().with("paths", to_value(&self.paths)?);
        let rule = ManifestDocument::new().with("http", http);
        let spec = ManifestDocument::new().with("rules", Value::Sequence(vec![rule.into()]));

        Ok(ManifestDocument::new()
            .with("apiVersion", INGRESS_API_VERSION)
            .with("kind", KIND_INGRESS)
            .with("metadata", to_value(&metadata)?)
            .with("spec", spec))
    }
}
