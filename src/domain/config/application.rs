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

//! Application identity and the `helm-deploy.toml` application file

use crate::shared::error::{HelmError, Result};
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

/// Identity of the application the parent chart is generated for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationIdentity {
    pub name: String,
    pub version: String,
    pub description: String,
    pub repository_prefix: Option<String>,
}

impl ApplicationIdentity {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            description: description.into(),
            repository_prefix: None,
        }
    }

    pub fn with_repository_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.repository_prefix = Some(prefix.into());
        self
    }

    /// `<prefix>/` for the values document, or `None` when no prefix is set
    pub fn repository_prefix_value(&self) -> Option<String> {
        self.repository_prefix
            .as_deref()
            .filter(|prefix| !prefix.is_empty())
            .map(|prefix| format!("{}/", prefix))
    }

    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("name", &self.name),
            ("version", &self.version),
            ("description", &self.description),
        ] {
            if value.trim().is_empty() {
                return Err(HelmError::config_error(format!(
                    "application {} is required",
                    field
                )));
            }
        }
        Ok(())
    }
}

/// Contents of `helm-deploy.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConf {
    pub project_dir: Option<String>,
    pub target_dir: Option<String>,
    pub application: ApplicationSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationSection {
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub repository_prefix: Option<String>,
    pub services: Vec<String>,
}

impl ApplicationConf {
    /// Load the application file. Relative directories inside it are resolved
    /// against the file's own directory.
    pub fn from<T: AsRef<Path>>(path: T) -> Result<Self> {
        let path = path.as_ref();
        let content = read_to_string(path).map_err(|e| {
            HelmError::config_error(format!(
                "Failed to read application file {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut conf = Self::from_toml_str(&content)?;
        if let Some(base) = path.parent() {
            conf.project_dir = conf.project_dir.map(|dir| resolve_dir(base, &dir));
            conf.target_dir = conf.target_dir.map(|dir| resolve_dir(base, &dir));
        }
        Ok(conf)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

fn resolve_dir(base: &Path, dir: &str) -> String {
    let dir = PathBuf::from(dir);
    if dir.is_absolute() {
        dir.display().to_string()
    } else {
        base.join(dir).display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_prefix_value() {
        let app = ApplicationIdentity::new("shop", "1.0.0", "Shop");
        assert_eq!(app.repository_prefix_value(), None);

        let app = app.with_repository_prefix("");
        assert_eq!(app.repository_prefix_value(), None);

        let app = app.with_repository_prefix("registry.example.com");
        assert_eq!(
            app.repository_prefix_value(),
            Some("registry.example.com/".to_string())
        );
    }

    #[test]
    fn test_validate_requires_identity_fields() {
        assert!(ApplicationIdentity::new("shop", "1.0.0", "Shop")
            .validate()
            .is_ok());

        let err = ApplicationIdentity::new("shop", " ", "Shop")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("version"));
    }

    #[test]
    fn test_parse_application_file() {
        let conf = ApplicationConf::from_toml_str(
            r#"
project_dir = "src"
target_dir = "helm"

[application]
name = "shop"
version = "1.2.0"
description = "Shop application"
repository_prefix = "registry.example.com"
services = ["Shop.Api", "Shop.Worker/Shop.Worker.csproj"]
"#,
        )
        .unwrap();

        assert_eq!(conf.project_dir.as_deref(), Some("src"));
        assert_eq!(conf.application.name.as_deref(), Some("shop"));
        assert_eq!(conf.application.services.len(), 2);
    }

    #[test]
    fn test_parse_empty_application_file() {
        let conf = ApplicationConf::from_toml_str("").unwrap();
        assert!(conf.application.name.is_none());
        assert!(conf.application.services.is_empty());
    }

    #[test]
    fn test_load_resolves_relative_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("helm-deploy.toml");
        std::fs::write(&path, "project_dir = \"src\"\ntarget_dir = \"/tmp/out\"\n").unwrap();

        let conf = ApplicationConf::from(&path).unwrap();
        assert_eq!(
            conf.project_dir,
            Some(dir.path().join("src").display().to_string())
        );
        assert_eq!(conf.target_dir.as_deref(), Some("/tmp/out"));
    }
}
