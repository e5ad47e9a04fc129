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

//! Derives the container, service and ingress views of a service's ports

use crate::domain::config::{PortSpec, ServiceConfig, ServicePortSpec, TargetPort};
use crate::infrastructure::constants::DEFAULT_INGRESS_PATH;
use crate::infrastructure::manifest::resources::{IngressBackend, IngressPath};
use crate::shared::error::{HelmError, Result};
use k8s_openapi::api::core::v1::{ContainerPort, ServicePort};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use std::path::Path;

/// Port data consumed by the deployment, service and ingress builders.
/// Every list keeps the order of the config document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedPorts {
    pub container_ports: Vec<ContainerPort>,
    pub service_ports: Vec<ServicePort>,
    pub ingress_rules: Vec<IngressPath>,
}

impl ResolvedPorts {
    pub fn has_ingress(&self) -> bool {
        !self.ingress_rules.is_empty()
    }
}

pub struct PortResolver<'a> {
    service_name: &'a str,
    config_path: &'a Path,
}

impl<'a> PortResolver<'a> {
    pub fn new(service_name: &'a str, config_path: &'a Path) -> Self {
        Self {
            service_name,
            config_path,
        }
    }

    pub fn resolve(&self, config: &ServiceConfig) -> Result<ResolvedPorts> {
        if config.service.is_some() && config.ports.is_empty() {
            return Err(self.invalid("service section requires ports section".to_string()));
        }

        let container_ports = config.ports.iter().map(Self::container_port).collect();

        let service_ports = config
            .service_ports()
            .iter()
            .map(|spec| self.service_port(spec, &config.ports))
            .collect::<Result<Vec<_>>>()?;

        let ingress_rules = config
            .service_ports()
            .iter()
            .filter_map(|spec| self.ingress_rule(spec))
            .collect();

        Ok(ResolvedPorts {
            container_ports,
            service_ports,
            ingress_rules,
        })
    }

    fn container_port(spec: &PortSpec) -> ContainerPort {
        ContainerPort {
            name: spec.name.clone(),
            protocol: spec.protocol.clone(),
            container_port: spec.port,
            ..Default::default()
        }
    }

    fn service_port(&self, spec: &ServicePortSpec, ports: &[PortSpec]) -> Result<ServicePort> {
        Ok(ServicePort {
            name: spec.name.clone(),
            protocol: spec.protocol.clone(),
            port: spec.port,
            target_port: Some(self.target_port(spec, ports)?),
            ..Default::default()
        })
    }

    /// Absent: same as `port`. Numeric (number or numeric string): taken
    /// literally without checking the container ports. Otherwise it must name
    /// one of the declared container ports.
    fn target_port(&self, spec: &ServicePortSpec, ports: &[PortSpec]) -> Result<IntOrString> {
        match &spec.target_port {
            None => Ok(IntOrString::Int(spec.port)),
            Some(TargetPort::Number(port)) => Ok(IntOrString::Int(*port)),
            Some(TargetPort::Name(name)) => {
                if let Ok(port) = name.parse::<i32>() {
                    return Ok(IntOrString::Int(port));
                }

                let declared = ports
                    .iter()
                    .any(|port| port.name.as_deref() == Some(name.as_str()));
                if !declared {
                    return Err(self.invalid(format!(
                        "service port {} is referencing an unknown port '{}'",
                        spec.port, name
                    )));
                }
                Ok(IntOrString::String(name.clone()))
            }
        }
    }

    fn ingress_rule(&self, spec: &ServicePortSpec) -> Option<IngressPath> {
        let ingress = spec.ingress.as_ref()?;
        Some(IngressPath {
            path: ingress
                .path
                .clone()
                .unwrap_or_else(|| DEFAULT_INGRESS_PATH.to_string()),
            backend: IngressBackend {
                service_name: self.service_name.to_string(),
                service_port: spec.port,
            },
            host: ingress.host.clone(),
        })
    }

    fn invalid(&self, reason: String) -> HelmError {
        HelmError::invalid_configuration(self.service_name, self.config_path, reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(content: &str) -> Result<ResolvedPorts> {
        let path = Path::new("Shop.Api/config.yaml");
        let config = ServiceConfig::from_yaml_str("shop-api", path, content)?;
        PortResolver::new("shop-api", path).resolve(&config)
    }

    #[test]
    fn test_named_target_port() {
        let ports = resolve(
            r#"
ports:
  - name: http
    port: 8080
service:
  ports:
    - name: http
      port: 80
      targetPort: http
"#,
        )
        .unwrap();

        assert_eq!(
            ports.container_ports,
            vec![ContainerPort {
                name: Some("http".to_string()),
                container_port: 8080,
                ..Default::default()
            }]
        );
        assert_eq!(
            ports.service_ports,
            vec![ServicePort {
                name: Some("http".to_string()),
                port: 80,
                target_port: Some(IntOrString::String("http".to_string())),
                ..Default::default()
            }]
        );
        assert!(!ports.has_ingress());
    }

    #[test]
    fn test_target_port_defaults_to_port() {
        let ports = resolve("ports:\n  - port: 8080\nservice:\n  ports:\n    - port: 80\n").unwrap();
        assert_eq!(
            ports.service_ports[0].target_port,
            Some(IntOrString::Int(80))
        );
    }

    #[test]
    fn test_numeric_target_port_is_not_cross_checked() {
        let ports = resolve(
            r#"
ports:
  - name: http
    port: 8080
service:
  ports:
    - port: 80
      targetPort: 9999
    - port: 81
      targetPort: "7777"
"#,
        )
        .unwrap();

        assert_eq!(
            ports.service_ports[0].target_port,
            Some(IntOrString::Int(9999))
        );
        assert_eq!(
            ports.service_ports[1].target_port,
            Some(IntOrString::Int(7777))
        );
    }

    #[test]
    fn test_unknown_named_target_port() {
        let err = resolve(
            r#"
ports:
  - name: http
    port: 8080
service:
  ports:
    - port: 80
      targetPort: grpc
"#,
        )
        .unwrap_err();

        assert!(err.is_invalid_configuration());
        let msg = err.to_string();
        assert!(msg.contains("referencing an unknown port 'grpc'"));
        assert!(msg.contains("shop-api"));
        assert!(msg.contains("Shop.Api/config.yaml"));
    }

    #[test]
    fn test_ingress_rule_defaults() {
        let ports = resolve(
            r#"
ports:
  - port: 9000
service:
  ports:
    - port: 90
      ingress:
        host: a.com
"#,
        )
        .unwrap();

        assert_eq!(
            ports.ingress_rules,
            vec![IngressPath {
                path: "/".to_string(),
                backend: IngressBackend {
                    service_name: "shop-api".to_string(),
                    service_port: 90,
                },
                host: Some("a.com".to_string()),
            }]
        );
    }

    #[test]
    fn test_ingress_rules_only_for_ports_with_ingress_in_order() {
        let ports = resolve(
            r#"
ports:
  - name: http
    port: 8080
  - name: admin
    port: 8081
service:
  ports:
    - name: admin
      port: 81
      targetPort: admin
      ingress:
        path: /admin
    - name: internal
      port: 82
    - name: http
      port: 80
      targetPort: http
      ingress: {}
"#,
        )
        .unwrap();

        assert_eq!(ports.service_ports.len(), 3);
        let rules: Vec<_> = ports
            .ingress_rules
            .iter()
            .map(|rule| (rule.path.as_str(), rule.backend.service_port, rule.host.clone()))
            .collect();
        assert_eq!(rules, vec![("/admin", 81, None), ("/", 80, None)]);
    }

    #[test]
    fn test_resolver_rejects_service_without_ports() {
        let config = ServiceConfig {
            service: Some(crate::domain::config::ServiceExposure { ports: Vec::new() }),
            ..Default::default()
        };
        let err = PortResolver::new("shop-api", Path::new("config.yaml"))
            .resolve(&config)
            .unwrap_err();
        assert!(err.is_invalid_configuration());
    }
}
