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
    DEPLOYMENT_API_VERSION, DEPLOYMENT_FILE, IMAGE_PULL_POLICY, KIND_DEPLOYMENT,
    REPOSITORY_PREFIX_PLACEHOLDER, SUFFIX_DEPLOYMENT, VERSION_PLACEHOLDER,
};
use crate::infrastructure::manifest::document::{to_value, ManifestDocument};
use crate::shared::error::Result;
use k8s_openapi::api::core::v1::ContainerPort;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};

pub struct DeploymentBuilder {
    application_name: String,
    service_name: String,
    replicas: u32,
    container_ports: Vec<ContainerPort>,
}

impl DeploymentBuilder {
    pub fn new(
        application_name: String,
        service_name: String,
        replicas: u32,
        container_ports: Vec<ContainerPort>,
    ) -> Self {
        Self {
            application_name,
            service_name,
            replicas,
            container_ports,
        }
    }

    /// Image reference; prefix and tag are resolved by Helm at render time
    pub fn image(&self) -> String {
        format!(
            "{}{}/{}:{}",
            REPOSITORY_PREFIX_PLACEHOLDER,
            self.application_name,
            self.service_name,
            VERSION_PLACEHOLDER
        )
    }

    fn build_container(&self) -> Result<ManifestDocument> {
        Ok(ManifestDocument::new()
            .with("name", self.service_name.as_str())
            .with("image", self.image())
            .with("imagePullPolicy", IMAGE_PULL_POLICY)
            .with("ports", to_value(&self.container_ports)?))
    }
}

impl LabeledResourceBuilder for DeploymentBuilder {
    fn application_name(&self) -> &str {
        &self.application_name
    }
}

impl ManifestBuilder for DeploymentBuilder {
    fn file_name(&self) -> &'static str {
        DEPLOYMENT_FILE
    }

    fn build(&self) -> Result<ManifestDocument> {
        let metadata =
            self.build_metadata(format!("{}{}", self.service_name, SUFFIX_DEPLOYMENT));

        let selector = LabelSelector {
            match_labels: Some(self.get_selector_labels()),
            ..Default::default()
        };

        let template_metadata = ObjectMeta {
            labels: Some(self.get_selector_labels()),
            ..Default::default()
        };

        let pod_spec = ManifestDocument::new().with(
            "containers",
            serde_yaml::Value::Sequence(vec![self.build_container()?.into()]),
        );

        let template = ManifestDocument::new()
            .with("metadata", to_value(&template_metadata)?)
            .with("spec", pod_spec);

        let spec = ManifestDocument::new()
            .with("replicas", self.replicas)
            .with("selector", to_value(&selector)?)
            .with("template", template);

        Ok(ManifestDocument::new()
            .with("apiVersion", DEPLOYMENT_API_VERSION)
            .with("kind", KIND_DEPLOYMENT)
            .with("metadata", to_value(&metadata)?)
            .with("spec", spec))
    }
}
