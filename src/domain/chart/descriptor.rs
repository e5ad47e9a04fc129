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

use crate::infrastructure::constants::{MAX_SERVICE_NAME_LEN, SERVICE_CONFIG_FILE};
use crate::shared::error::{HelmError, Result};
use regex::Regex;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// A service referenced by the application, identified by its source directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceDescriptor {
    source_directory_name: String,
    config_path: PathBuf,
    service_name: String,
}

impl ServiceDescriptor {
    /// Descriptor for `<project_dir>/<source_directory_name>/config.yaml`
    pub fn new(project_dir: &Path, source_directory_name: impl Into<String>) -> Result<Self> {
        let source_directory_name = source_directory_name.into();
        let config_path = project_dir
            .join(&source_directory_name)
            .join(SERVICE_CONFIG_FILE);
        Self::with_config_path(source_directory_name, config_path)
    }

    pub fn with_config_path(
        source_directory_name: impl Into<String>,
        config_path: impl Into<PathBuf>,
    ) -> Result<Self> {
        let source_directory_name = source_directory_name.into();
        let service_name = derive_service_name(&source_directory_name);

        if !is_valid_service_name(&service_name) {
            return Err(HelmError::InvalidServiceName(format!(
                "'{}' (derived from directory '{}') must consist of lowercase alphanumerics \
                 and '-', start and end with an alphanumeric, and be at most {} characters",
                service_name, source_directory_name, MAX_SERVICE_NAME_LEN
            )));
        }

        Ok(Self {
            source_directory_name,
            config_path: config_path.into(),
            service_name,
        })
    }

    /// Descriptor from a project reference.
    ///
    /// A reference to a project file (`Shop.Api/Shop.Api.csproj`, any `*proj`
    /// extension) resolves to the file's parent directory; anything else is
    /// taken as the directory itself.
    pub fn from_project_reference(project_dir: &Path, reference: &str) -> Result<Self> {
        let reference_path = Path::new(reference);
        let is_project_file = reference_path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.ends_with("proj"));
        let directory = if is_project_file {
            reference_path.parent().and_then(Path::file_name)
        } else {
            reference_path.file_name()
        };

        let directory = directory
            .and_then(|name| name.to_str())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                HelmError::InvalidServiceName(format!(
                    "cannot determine a service directory from reference '{}'",
                    reference
                ))
            })?;

        Self::new(project_dir, directory)
    }

    pub fn source_directory_name(&self) -> &str {
        &self.source_directory_name
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }
}

/// Lower-cases the directory name and replaces `.` with `-`
pub fn derive_service_name(source_directory_name: &str) -> String {
    source_directory_name.replace('.', "-").to_lowercase()
}

pub fn is_valid_service_name(name: &str) -> bool {
    static NAME_PATTERN: OnceLock<Regex> = OnceLock::new();

    if name.is_empty() || name.len() > MAX_SERVICE_NAME_LEN {
        return false;
    }

    NAME_PATTERN
        .get_or_init(|| {
            Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$").expect("service name pattern is valid")
        })
        .is_match(name)
}
