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
use crate::infrastructure::constants::{KIND_SERVICE, SERVICE_API_VERSION, SERVICE_FILE};
use crate::infrastructure::manifest::document::{to_value, ManifestDocument};
use crate::shared::error::Result;
use k8s_openapi::api::core::v1::{ServicePort, ServiceSpec};

pub struct ServiceBuilder {
    application_name: String,
    service_name: String,
    service_ports: Vec<ServicePort>,
}

impl ServiceBuilder {
    pub fn new(
        application_name: String,
        service_name: String,
        service_ports: Vec<ServicePort>,
    ) -> Self {
        Self {
            application_name,
            service_name,
            service_ports,
        }
    }
}

impl LabeledResourceBuilder for ServiceBuilder {
    fn application_name(&self) -> &str {
        &self.application_name
    }
}

impl ManifestBuilder for ServiceBuilder {
    fn file_name(&self) -> &'static str {
        SERVICE_FILE
    }

    fn build(&self) -> Result<ManifestDocument> {
        let metadata = self.build_metadata(self.service_name.clone());

        let spec = ServiceSpec {
            ports: Some(self.service_ports.clone()),
            selector: Some(self.get_selector_labels()),
            ..Default::default()
        };

        Ok(ManifestDocument::new()
            .with("apiVersion", SERVICE_API_VERSION)
            .with("kind", KIND_SERVICE)
            .with("metadata", to_value(&metadata)?)
            .with("spec", to_value(&spec)?))
    }
}
