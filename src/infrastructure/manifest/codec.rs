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

//! YAML file plumbing for manifest documents

use super::document::ManifestDocument;
use crate::infrastructure::constants::{HELMIGNORE_FILE, HELMIGNORE_PATTERNS};
use crate::shared::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes `document` to `path`, replacing any existing file
pub fn write_document(path: &Path, document: &ManifestDocument) -> Result<()> {
    let content = document.to_yaml_string()?;
    fs::write(path, content)?;
    debug!("Wrote {}", path.display());
    Ok(())
}

pub fn read_document(path: &Path) -> Result<ManifestDocument> {
    let content = fs::read_to_string(path)?;
    ManifestDocument::from_yaml_str(&content)
}

pub fn write_helmignore(dir: &Path) -> Result<PathBuf> {
    let path = dir.join(HELMIGNORE_FILE);
    let mut content = HELMIGNORE_PATTERNS.join("\n");
    content.push('\n');
    fs::write(&path, content)?;
    debug!("Wrote {}", path.display());
    Ok(path)
}

/// Removes a previously generated file; returns whether one existed
pub fn remove_stale(path: &Path) -> Result<bool> {
    if !path.is_file() {
        return Ok(false);
    }
    fs::remove_file(path)?;
    debug!("Removed stale {}", path.display());
    Ok(true)
}
