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

use crate::domain::chart::service_chart::ServiceChart;
use serde::Serialize;
use std::path::PathBuf;

/// Outcome of a generation (or dry) run
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub application: String,
    pub version: String,
    pub target_dir: PathBuf,
    pub dry_run: bool,
    pub files: Vec<PathBuf>,
    pub services: Vec<ServiceReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceReport {
    pub service_name: String,
    pub source_directory: String,
    pub replicas: u32,
    pub container_ports: usize,
    pub service_ports: usize,
    pub ingress_rules: usize,
    pub files: Vec<PathBuf>,
}

impl ServiceReport {
    pub fn new(chart: &ServiceChart, files: Vec<PathBuf>) -> Self {
        Self {
            service_name: chart.service_name().to_string(),
            source_directory: chart.descriptor.source_directory_name().to_string(),
            replicas: chart.config.replica_count,
            container_ports: chart.ports.container_ports.len(),
            service_ports: chart.ports.service_ports.len(),
            ingress_rules: chart.ports.ingress_rules.len(),
            files,
        }
    }

    pub fn has_ingress(&self) -> bool {
        self.ingress_rules > 0
    }
}

impl GenerationReport {
    pub fn total_files(&self) -> usize {
        self.files.len()
            + self
                .services
                .iter()
                .map(|service| service.files.len())
                .sum::<usize>()
    }
}
