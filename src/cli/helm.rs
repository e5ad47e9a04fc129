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

//! Chart generation commands

use crate::cli::display::TableRenderer;
use crate::domain::chart::{GenerationReport, HelmChartEmitter, ServiceDescriptor};
use crate::domain::config::{ApplicationConf, ApplicationIdentity};
use crate::infrastructure::constants::APPLICATION_CONFIG_FILE;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable consulted when `--config-file` is not given
pub const CONFIG_FILE_ENV: &str = "HELM_DEPLOY_CONFIG";

const DEFAULT_PROJECT_DIR: &str = ".";
const DEFAULT_TARGET_DIR: &str = "helm";

/// Inputs shared by every chart command
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ChartArgs {
    /// Path to the application file (helm-deploy.toml)
    /// If not provided, HELM_DEPLOY_CONFIG is used, then ./helm-deploy.toml when it exists
    #[arg(long, value_name = "PATH")]
    pub config_file: Option<String>,

    /// Directory containing the service source directories [default: .]
    #[arg(long, value_name = "DIR")]
    pub project_dir: Option<String>,

    /// Directory the parent chart is written to [default: helm]
    #[arg(long, value_name = "DIR")]
    pub target_dir: Option<String>,

    /// Application name
    #[arg(long)]
    pub name: Option<String>,

    /// Application version, also used as the image tag
    #[arg(long)]
    pub version: Option<String>,

    /// Application description
    #[arg(long)]
    pub description: Option<String>,

    /// Registry prefix prepended to every image (e.g. "registry.example.com")
    #[arg(long)]
    pub repository_prefix: Option<String>,

    /// Service directory or project file reference; repeat for each service.
    /// Replaces the service list of the application file when given.
    #[arg(long = "service", value_name = "DIR")]
    pub services: Vec<String>,
}

/// Fully merged inputs of a run
#[derive(Debug, Clone)]
pub struct ChartRun {
    pub application: ApplicationIdentity,
    pub project_dir: PathBuf,
    pub target_dir: PathBuf,
    pub services: Vec<ServiceDescriptor>,
}

impl ChartRun {
    pub fn emitter(&self) -> HelmChartEmitter {
        HelmChartEmitter::new(self.application.clone(), self.target_dir.clone())
    }
}

impl ChartArgs {
    pub fn resolve(&self) -> anyhow::Result<ChartRun> {
        let conf = self.load_application_file()?;
        self.merge(conf)
    }

    fn load_application_file(&self) -> anyhow::Result<ApplicationConf> {
        if let Some(ref config_path) = self.config_file {
            return Ok(ApplicationConf::from(config_path)?);
        }

        if let Ok(env_path) = std::env::var(CONFIG_FILE_ENV) {
            info!("Using application file from {}: {}", CONFIG_FILE_ENV, env_path);
            return Ok(ApplicationConf::from(&env_path)?);
        }

        let default_path = Path::new(APPLICATION_CONFIG_FILE);
        if default_path.exists() {
            info!("Using application file {}", default_path.display());
            return Ok(ApplicationConf::from(default_path)?);
        }

        info!("No application file found, using command line settings only");
        Ok(ApplicationConf::default())
    }

    /// Priority: command line > application file > defaults
    pub fn merge(&self, conf: ApplicationConf) -> anyhow::Result<ChartRun> {
        let section = conf.application;

        let name = required("name", self.name.clone().or(section.name))?;
        let version = required("version", self.version.clone().or(section.version))?;
        let description = required(
            "description",
            self.description.clone().or(section.description),
        )?;

        let mut application = ApplicationIdentity::new(name, version, description);
        if let Some(prefix) = self
            .repository_prefix
            .clone()
            .or(section.repository_prefix)
        {
            application = application.with_repository_prefix(prefix);
        }

        let project_dir = PathBuf::from(
            self.project_dir
                .clone()
                .or(conf.project_dir)
                .unwrap_or_else(|| DEFAULT_PROJECT_DIR.to_string()),
        );
        let target_dir = PathBuf::from(
            self.target_dir
                .clone()
                .or(conf.target_dir)
                .unwrap_or_else(|| DEFAULT_TARGET_DIR.to_string()),
        );

        let references = if self.services.is_empty() {
            section.services
        } else {
            self.services.clone()
        };
        let services = references
            .iter()
            .map(|reference| ServiceDescriptor::from_project_reference(&project_dir, reference))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ChartRun {
            application,
            project_dir,
            target_dir,
            services,
        })
    }
}

fn required(field: &str, value: Option<String>) -> anyhow::Result<String> {
    value
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "application {} is required (use --{} or set application.{} in {})",
                field,
                field,
                field,
                APPLICATION_CONFIG_FILE
            )
        })
}

fn print_report(report: &GenerationReport, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", TableRenderer::new().render_generation_report(report));
    }
    Ok(())
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub chart: ChartArgs,

    /// Print the generation report as JSON
    #[arg(long)]
    pub json: bool,
}

impl GenerateCommand {
    pub fn execute(&self) -> anyhow::Result<()> {
        let run = self.chart.resolve()?;
        let report = run.emitter().emit(&run.services)?;

        print_report(&report, self.json)?;
        if !self.json {
            println!(
                "Helm chart for {} {} generated in {}",
                report.application,
                report.version,
                report.target_dir.display()
            );
        }
        Ok(())
    }
}

#[derive(Parser, Debug, Clone)]
pub struct ValidateCommand {
    #[command(flatten)]
    pub chart: ChartArgs,

    /// Print the validation report as JSON
    #[arg(long)]
    pub json: bool,
}

impl ValidateCommand {
    pub fn execute(&self) -> anyhow::Result<()> {
        let run = self.chart.resolve()?;
        let report = run.emitter().plan(&run.services)?;

        print_report(&report, self.json)?;
        if !self.json {
            println!(
                "All {} service configuration(s) are valid",
                report.services.len()
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_conf() -> ApplicationConf {
        ApplicationConf::from_toml_str(
            r#"
project_dir = "/work/shop"
target_dir = "/work/shop/helm"

[application]
name = "shop"
version = "1.2.0"
description = "Shop application"
repository_prefix = "registry.example.com"
services = ["Shop.Api", "Shop.Worker/Shop.Worker.csproj"]
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_merge_uses_application_file() {
        let run = ChartArgs::default().merge(file_conf()).unwrap();

        assert_eq!(run.application.name, "shop");
        assert_eq!(run.application.version, "1.2.0");
        assert_eq!(
            run.application.repository_prefix.as_deref(),
            Some("registry.example.com")
        );
        assert_eq!(run.target_dir, PathBuf::from("/work/shop/helm"));

        let names: Vec<_> = run.services.iter().map(|s| s.service_name()).collect();
        assert_eq!(names, vec!["shop-api", "shop-worker"]);
        assert_eq!(
            run.services[1].config_path(),
            Path::new("/work/shop/Shop.Worker/config.yaml")
        );
    }

    #[test]
    fn test_command_line_overrides_application_file() {
        let args = ChartArgs {
            version: Some("2.0.0".to_string()),
            target_dir: Some("out".to_string()),
            services: vec!["Billing".to_string()],
            ..Default::default()
        };
        let run = args.merge(file_conf()).unwrap();

        assert_eq!(run.application.version, "2.0.0");
        assert_eq!(run.application.name, "shop");
        assert_eq!(run.target_dir, PathBuf::from("out"));
        assert_eq!(run.services.len(), 1);
        assert_eq!(run.services[0].service_name(), "billing");
    }

    #[test]
    fn test_defaults_without_application_file() {
        let args = ChartArgs {
            name: Some("shop".to_string()),
            version: Some("1.0.0".to_string()),
            description: Some("Shop".to_string()),
            ..Default::default()
        };
        let run = args.merge(ApplicationConf::default()).unwrap();

        assert_eq!(run.project_dir, PathBuf::from("."));
        assert_eq!(run.target_dir, PathBuf::from("helm"));
        assert!(run.services.is_empty());
        assert!(run.application.repository_prefix.is_none());
    }

    #[test]
    fn test_missing_identity_is_rejected() {
        let args = ChartArgs {
            name: Some("shop".to_string()),
            ..Default::default()
        };
        let err = args.merge(ApplicationConf::default()).unwrap_err();
        assert!(err.to_string().contains("application version is required"));
    }

    #[test]
    fn test_invalid_service_reference_is_rejected() {
        let args = ChartArgs {
            services: vec!["Shop_Api".to_string()],
            ..Default::default()
        };
        assert!(args.merge(file_conf()).is_err());
    }
}
