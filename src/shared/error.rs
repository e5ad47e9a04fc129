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

use std::path::{Path, PathBuf};
use thiserror::Error;
pub type Result<T> = std::result::Result<T, HelmError>;

#[derive(Error, Debug)]
pub enum HelmError {
    #[error("Configuration not found for service '{service}': {}", path.display())]
    ConfigurationNotFound { service: String, path: PathBuf },

    #[error("Invalid configuration for service '{service}' ({}): {reason}", path.display())]
    InvalidConfiguration {
        service: String,
        path: PathBuf,
        reason: String,
    },

    #[error("Invalid service name: {0}")]
    InvalidServiceName(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HelmError {
    pub fn config_error(context: impl Into<String>) -> Self {
        Self::ConfigError(context.into())
    }

    pub fn not_found(service: impl Into<String>, path: impl AsRef<Path>) -> Self {
        Self::ConfigurationNotFound {
            service: service.into(),
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn invalid_configuration(
        service: impl Into<String>,
        path: impl AsRef<Path>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidConfiguration {
            service: service.into(),
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }
}
