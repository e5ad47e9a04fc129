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

//! Generic, insertion-ordered manifest tree

use crate::shared::error::Result;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// An ordered tree of string-keyed fields.
///
/// Every manifest builder produces one of these; the YAML codec turns it into
/// bytes. Keys keep the order in which they were inserted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ManifestDocument(Mapping);

impl ManifestDocument {
    pub fn new() -> Self {
        Self(Mapping::new())
    }

    /// Builder-style insert
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts `key` only when `value` is present
    pub fn with_optional<V: Into<Value>>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(Value::String(key.to_string()), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Looks up a nested field, e.g. `["metadata", "name"]`
    pub fn get_path(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        let mut current = self.0.get(*first)?;
        for key in rest {
            current = current.get(*key)?;
        }
        Some(current)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().filter_map(Value::as_str)
    }

    pub fn as_mapping(&self) -> &Mapping {
        &self.0
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.0)?)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(Self(serde_yaml::from_str(content)?))
    }
}

impl From<ManifestDocument> for Value {
    fn from(document: ManifestDocument) -> Self {
        Value::Mapping(document.0)
    }
}

impl From<Mapping> for ManifestDocument {
    fn from(mapping: Mapping) -> Self {
        Self(mapping)
    }
}

/// Converts any serializable value (typically a k8s-openapi type) into a tree node
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    Ok(serde_yaml::to_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_keep_insertion_order() {
        let doc = ManifestDocument::new()
            .with("apiVersion", "v1")
            .with("name", "shop")
            .with("version", "1.0.0")
            .with("description", "Shop");

        let keys: Vec<_> = doc.keys().collect();
        assert_eq!(keys, vec!["apiVersion", "name", "version", "description"]);

        let yaml = doc.to_yaml_string().unwrap();
        let api = yaml.find("apiVersion").unwrap();
        let description = yaml.find("description").unwrap();
        assert!(api < description);
    }

    #[test]
    fn test_with_optional_skips_absent_values() {
        let doc = ManifestDocument::new()
            .with_optional("host", None::<String>)
            .with_optional("path", Some("/"));

        assert!(!doc.contains_key("host"));
        assert_eq!(doc.get("path"), Some(&Value::from("/")));
    }

    #[test]
    fn test_get_path_walks_nested_documents() {
        let doc = ManifestDocument::new().with(
            "metadata",
            ManifestDocument::new().with("name", "api-deployment"),
        );

        assert_eq!(
            doc.get_path(&["metadata", "name"]).and_then(Value::as_str),
            Some("api-deployment")
        );
        assert!(doc.get_path(&["metadata", "labels"]).is_none());
        assert!(doc.get_path(&[]).is_none());
    }

    #[test]
    fn test_placeholders_survive_serialization() {
        let doc = ManifestDocument::new()
            .with("app", "shop-{{ .Values.global.application.version }}")
            .with("replicas", 2);

        let parsed = ManifestDocument::from_yaml_str(&doc.to_yaml_string().unwrap()).unwrap();
        assert_eq!(parsed, doc);
    }
}
