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

/// Chart layout
pub const HELMIGNORE_FILE: &str = ".helmignore";
pub const CHART_FILE: &str = "Chart.yaml";
pub const VALUES_FILE: &str = "values.yaml";
pub const CHARTS_DIR: &str = "charts";
pub const TEMPLATES_DIR: &str = "templates";

/// Template file names
pub const DEPLOYMENT_FILE: &str = "deployment.yaml";
pub const SERVICE_FILE: &str = "service.yaml";
pub const INGRESS_FILE: &str = "ingress.yaml";

/// Per-service configuration document
pub const SERVICE_CONFIG_FILE: &str = "config.yaml";

/// Application file read by the CLI
pub const APPLICATION_CONFIG_FILE: &str = "helm-deploy.toml";

/// API versions
pub const CHART_API_VERSION: &str = "v1";
pub const DEPLOYMENT_API_VERSION: &str = "apps/v1beta2";
pub const SERVICE_API_VERSION: &str = "v1";
pub const INGRESS_API_VERSION: &str = "extensions/v1beta1";

/// Kinds
pub const KIND_DEPLOYMENT: &str = "Deployment";
pub const KIND_SERVICE: &str = "Service";
pub const KIND_INGRESS: &str = "Ingress";

/// Name suffixes
pub const SUFFIX_DEPLOYMENT: &str = "-deployment";
pub const SUFFIX_INGRESS: &str = "-ingress";

/// Resource labels
pub const LABEL_APP: &str = "app";

/// Placeholders rendered later by Helm
pub const VERSION_PLACEHOLDER: &str = "{{ .Values.global.application.version }}";
pub const REPOSITORY_PREFIX_PLACEHOLDER: &str = "{{ .Values.global.repositoryPrefix }}";

/// Container settings
pub const IMAGE_PULL_POLICY: &str = "IfNotPresent";

/// Ingress settings
pub const INGRESS_CLASS_ANNOTATION: &str = "kubernetes.io/ingress.class";
pub const INGRESS_CLASS: &str = "nginx";
pub const DEFAULT_INGRESS_PATH: &str = "/";

/// Service defaults
pub const DEFAULT_REPLICA_COUNT: u32 = 1;

/// Kubernetes name segment limit (DNS label)
pub const MAX_SERVICE_NAME_LEN: usize = 63;

/// Content of the root `.helmignore`
pub const HELMIGNORE_PATTERNS: &[&str] = &[
    "# Patterns to ignore when building packages.",
    "# This supports shell glob matching, relative path matching, and",
    "# negation (prefixed with !). Only one pattern per line.",
    ".DS_Store",
    "# Common VCS dirs",
    ".git/",
    ".gitignore",
    ".bzr/",
    ".bzrignore",
    ".hg/",
    ".hgignore",
    ".svn/",
    "# Common backup files",
    "*.swp",
    "*.bak",
    "*.tmp",
    "*~",
    "# Various IDEs",
    ".project",
    ".idea/",
    "*.tmproj",
    ".vscode/",
];
