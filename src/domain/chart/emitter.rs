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
use crate::domain::chart::report::{GenerationReport, ServiceReport};
use crate::domain::chart::service_chart::ServiceChart;
use crate::domain::config::ApplicationIdentity;
use crate::infrastructure::constants::{
    CHARTS_DIR, CHART_FILE, HELMIGNORE_FILE, INGRESS_FILE, TEMPLATES_DIR, VALUES_FILE,
};
use crate::infrastructure::manifest::codec;
use crate::infrastructure::manifest::resources::{ChartBuilder, ManifestBuilder, ValuesBuilder};
use crate::shared::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Writes the parent chart and one sub-chart per service under `target_dir`.
///
/// Services are processed one at a time and the first error aborts the run.
/// Files written before the failure stay in place.
pub struct HelmChartEmitter {
    application: ApplicationIdentity,
    target_dir: PathBuf,
}

impl HelmChartEmitter {
    pub fn new(application: ApplicationIdentity, target_dir: impl Into<PathBuf>) -> Self {
        Self {
            application,
            target_dir: target_dir.into(),
        }
    }

    pub fn application(&self) -> &ApplicationIdentity {
        &self.application
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    pub fn emit(&self, services: &[ServiceDescriptor]) -> Result<GenerationReport> {
        self.application.validate()?;

        info!(
            "Generating Helm chart for {} {} into {}",
            self.application.name,
            self.application.version,
            self.target_dir.display()
        );

        fs::create_dir_all(&self.target_dir)?;
        let files = self.emit_root_chart()?;

        let mut reports = Vec::with_capacity(services.len());
        if !services.is_empty() {
            fs::create_dir_all(self.target_dir.join(CHARTS_DIR))?;

            for descriptor in services {
                let chart = ServiceChart::load(descriptor)?;
                let written = self.emit_service_chart(&chart)?;
                reports.push(ServiceReport::new(&chart, written));
            }
        }

        Ok(self.report(false, files, reports))
    }

    /// Loads and resolves every service without touching the file system
    pub fn plan(&self, services: &[ServiceDescriptor]) -> Result<GenerationReport> {
        self.application.validate()?;

        let reports = services
            .iter()
            .map(|descriptor| -> Result<ServiceReport> {
                let chart = ServiceChart::load(descriptor)?;
                let files = self.service_files(&chart);
                info!(
                    "Service '{}' is valid ({} file(s) would be written)",
                    chart.service_name(),
                    files.len()
                );
                Ok(ServiceReport::new(&chart, files))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(self.report(true, self.root_files(), reports))
    }

    pub fn service_dir(&self, service_name: &str) -> PathBuf {
        self.target_dir.join(CHARTS_DIR).join(service_name)
    }

    fn emit_root_chart(&self) -> Result<Vec<PathBuf>> {
        let mut files = vec![codec::write_helmignore(&self.target_dir)?];

        let chart = ChartBuilder::new(
            self.application.name.clone(),
            self.application.version.clone(),
            self.application.description.clone(),
        );
        let values = ValuesBuilder::new(&self.application);
        for builder in [&chart as &dyn ManifestBuilder, &values] {
            files.push(self.write(&self.target_dir, builder)?);
        }

        Ok(files)
    }

    fn emit_service_chart(&self, chart: &ServiceChart) -> Result<Vec<PathBuf>> {
        let service_dir = self.service_dir(chart.service_name());
        let templates_dir = service_dir.join(TEMPLATES_DIR);
        fs::create_dir_all(&templates_dir)?;

        info!(
            "Generating sub-chart '{}' ({} container port(s), {} service port(s), {} ingress rule(s))",
            chart.service_name(),
            chart.ports.container_ports.len(),
            chart.ports.service_ports.len(),
            chart.ports.ingress_rules.len()
        );

        let mut files = vec![self.write(&service_dir, &chart.chart_builder(&self.application))?];
        for builder in chart.template_builders(&self.application) {
            files.push(self.write(&templates_dir, builder.as_ref())?);
        }

        if !chart.ports.has_ingress() && codec::remove_stale(&templates_dir.join(INGRESS_FILE))? {
            debug!(
                "Service '{}' no longer declares ingress rules",
                chart.service_name()
            );
        }

        Ok(files)
    }

    fn write(&self, dir: &Path, builder: &dyn ManifestBuilder) -> Result<PathBuf> {
        let path = dir.join(builder.file_name());
        codec::write_document(&path, &builder.build()?)?;
        Ok(path)
    }

    fn root_files(&self) -> Vec<PathBuf> {
        [HELMIGNORE_FILE, CHART_FILE, VALUES_FILE]
            .iter()
            .map(|file| self.target_dir.join(file))
            .collect()
    }

    fn service_files(&self, chart: &ServiceChart) -> Vec<PathBuf> {
        let service_dir = self.service_dir(chart.service_name());
        let templates_dir = service_dir.join(TEMPLATES_DIR);

        std::iter::once(service_dir.join(chart.chart_builder(&self.application).file_name()))
            .chain(
                chart
                    .template_builders(&self.application)
                    .iter()
                    .map(|builder| templates_dir.join(builder.file_name())),
            )
            .collect()
    }

    fn report(
        &self,
        dry_run: bool,
        files: Vec<PathBuf>,
        services: Vec<ServiceReport>,
    ) -> GenerationReport {
        GenerationReport {
            application: self.application.name.clone(),
            version: self.application.version.clone(),
            target_dir: self.target_dir.clone(),
            dry_run,
            files,
            services,
        }
    }
}
