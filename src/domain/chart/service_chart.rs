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

use crate::domain::chart::descriptor::ServiceDescriptor;
use crate::domain::chart::ports::{PortResolver, ResolvedPorts};
use crate::domain::config::{ApplicationIdentity, ServiceConfig};
use crate::infrastructure::manifest::resources::{
    ChartBuilder, DeploymentBuilder, IngressBuilder, ManifestBuilder, ServiceBuilder,
};
use crate::shared::error::Result;

/// A service whose config has been loaded, validated and resolved
#[derive(Debug, Clone)]
pub struct ServiceChart {
    pub descriptor: ServiceDescriptor,
    pub config: ServiceConfig,
    pub ports: ResolvedPorts,
}

impl ServiceChart {
    /// Loader followed by resolver; any failure aborts with the service's
    /// name and config path in the error
    pub fn load(descriptor: &ServiceDescriptor) -> Result<Self> {
        let config = ServiceConfig::load(descriptor.service_name(), descriptor.config_path())?;
        Self::from_config(descriptor.clone(), config)
    }

    pub fn from_config(descriptor: ServiceDescriptor, config: ServiceConfig) -> Result<Self> {
        let ports = PortResolver::new(descriptor.service_name(), descriptor.config_path())
            .resolve(&config)?;
        Ok(Self {
            descriptor,
            config,
            ports,
        })
    }

    pub fn service_name(&self) -> &str {
        self.descriptor.service_name()
    }

    /// Sub-chart `Chart.yaml`
    pub fn chart_builder(&self, application: &ApplicationIdentity) -> ChartBuilder {
        ChartBuilder::for_service(self.service_name(), &application.version)
    }

    /// Builders for `templates/`; the ingress builder is only present when at
    /// least one ingress rule exists
    pub fn template_builders(
        &self,
        application: &ApplicationIdentity,
    ) -> Vec<Box<dyn ManifestBuilder>> {
        let mut builders: Vec<Box<dyn ManifestBuilder>> = vec![
            Box::new(DeploymentBuilder::new(
                application.name.clone(),
                self.service_name().to_string(),
                self.config.replica_count,
                self.ports.container_ports.clone(),
            )),
            Box::new(ServiceBuilder::new(
                application.name.clone(),
                self.service_name().to_string(),
                self.ports.service_ports.clone(),
            )),
        ];

        if self.ports.has_ingress() {
            builders.push(Box::new(IngressBuilder::new(
                application.name.clone(),
                self.service_name().to_string(),
                self.ports.ingress_rules.clone(),
            )));
        }

        builders
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::HelmError;

    fn chart(content: &str) -> ServiceChart {
        let descriptor =
            ServiceDescriptor::with_config_path("Shop.Api", "Shop.Api/config.yaml").unwrap();
        let config =
            ServiceConfig::from_yaml_str("shop-api", descriptor.config_path(), content).unwrap();
        ServiceChart::from_config(descriptor, config).unwrap()
    }

    fn file_names(chart: &ServiceChart) -> Vec<&'static str> {
        let app = ApplicationIdentity::new("shop", "1.0.0", "Shop");
        chart
            .template_builders(&app)
            .iter()
            .map(|builder| builder.file_name())
            .collect()
    }

    #[test]
    fn test_templates_without_ingress() {
        let chart = chart("ports:\n  - port: 8080\nservice:\n  ports:\n    - port: 80\n");
        assert_eq!(file_names(&chart), vec!["deployment.yaml", "service.yaml"]);
    }

    #[test]
    fn test_templates_with_ingress() {
        let chart = chart(
            "ports:\n  - port: 8080\nservice:\n  ports:\n    - port: 80\n      ingress: {}\n",
        );
        assert_eq!(
            file_names(&chart),
            vec!["deployment.yaml", "service.yaml", "ingress.yaml"]
        );
    }

    #[test]
    fn test_load_missing_config_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let descriptor = ServiceDescriptor::new(dir.path(), "Shop.Api").unwrap();
        let err = ServiceChart::load(&descriptor).unwrap_err();
        assert!(matches!(err, HelmError::ConfigurationNotFound { .. }));
    }
}
