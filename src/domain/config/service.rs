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

//! Per-service `config.yaml`
//!
//! The document is parsed into raw structs that mirror the YAML loosely and is
//! then validated once into [`ServiceConfig`], whose required fields are no
//! longer optional.

use crate::infrastructure::constants::DEFAULT_REPLICA_COUNT;
use crate::shared::error::{HelmError, Result};
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub replica_count: u32,
    pub ports: Vec<PortSpec>,
    pub service: Option<ServiceExposure>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            replica_count: DEFAULT_REPLICA_COUNT,
            ports: Vec::new(),
            service: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortSpec {
    pub name: Option<String>,
    pub protocol: Option<String>,
    pub port: i32,
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceExposure {
    pub ports: Vec<ServicePortSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicePortSpec {
    pub name: Option<String>,
    pub protocol: Option<String>,
    pub port: i32,
    pub target_port: Option<TargetPort>,
    pub ingress: Option<IngressSpec>,
}

/// `targetPort` as written: a number, or a string that is either numeric or
/// the name of a declared container port
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TargetPort {
    Number(i32),
    Name(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngressSpec {
    pub path: Option<String>,
    pub host: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ServiceDocument {
    replica_count: Option<u32>,
    ports: Option<Vec<PortEntry>>,
    service: Option<ServiceSection>,
}

#[derive(Debug, Deserialize)]
struct PortEntry {
    name: Option<String>,
    protocol: Option<String>,
    port: Option<i32>,
    path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ServiceSection {
    ports: Option<Vec<ServicePortEntry>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ServicePortEntry {
    name: Option<String>,
    protocol: Option<String>,
    port: Option<i32>,
    target_port: Option<TargetPort>,
    ingress: Option<IngressSpec>,
}

impl ServiceConfig {
    /// Load and validate the config document of `service_name`.
    ///
    /// A missing file is an error; no default configuration is substituted.
    pub fn load(service_name: &str, path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(HelmError::not_found(service_name, path));
        }

        let content = read_to_string(path)?;
        let config = Self::from_yaml_str(service_name, path, &content)?;
        debug!(
            "Loaded {} for service '{}': {} port(s), service section: {}",
            path.display(),
            service_name,
            config.ports.len(),
            config.service.is_some()
        );
        Ok(config)
    }

    /// Parse and validate a config document. `path` is only used in error messages.
    pub fn from_yaml_str(service_name: &str, path: &Path, content: &str) -> Result<Self> {
        let invalid = |reason: String| HelmError::invalid_configuration(service_name, path, reason);

        let value: serde_yaml::Value = serde_yaml::from_str(content)
            .map_err(|e| invalid(format!("malformed YAML: {}", e)))?;

        // An empty or comment-only document means "all defaults"
        let document: ServiceDocument = if value.is_null() {
            ServiceDocument::default()
        } else {
            serde_yaml::from_value(value).map_err(|e| invalid(e.to_string()))?
        };

        let ports = document
            .ports
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, entry)| -> Result<PortSpec> {
                let port = entry.port.ok_or_else(|| {
                    invalid(format!(
                        "ports[{}]{} is missing the required 'port' field",
                        index,
                        describe(entry.name.as_deref())
                    ))
                })?;
                Ok(PortSpec {
                    name: entry.name,
                    protocol: entry.protocol,
                    port,
                    path: entry.path,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let service = match document.service {
            None => None,
            Some(section) => {
                let entries = section.ports.unwrap_or_default();
                if ports.is_empty() {
                    return Err(invalid(
                        "service section requires ports section".to_string(),
                    ));
                }

                let service_ports = entries
                    .into_iter()
                    .enumerate()
                    .map(|(index, entry)| -> Result<ServicePortSpec> {
                        let port = entry.port.ok_or_else(|| {
                            invalid(format!(
                                "service.ports[{}]{} is missing the required 'port' field",
                                index,
                                describe(entry.name.as_deref())
                            ))
                        })?;
                        Ok(ServicePortSpec {
                            name: entry.name,
                            protocol: entry.protocol,
                            port,
                            target_port: entry.target_port,
                            ingress: entry.ingress,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;

                Some(ServiceExposure {
                    ports: service_ports,
                })
            }
        };

        Ok(Self {
            replica_count: document.replica_count.unwrap_or(DEFAULT_REPLICA_COUNT),
            ports,
            service,
        })
    }

    /// Exposed service ports, empty when there is no service section
    pub fn service_ports(&self) -> &[ServicePortSpec] {
        self.service
            .as_ref()
            .map(|service| service.ports.as_slice())
            .unwrap_or_default()
    }
}

fn describe(name: Option<&str>) -> String {
    name.map(|name| format!(" ('{}')", name)).unwrap_or_default()
}
