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

//! Builders for the five manifest shapes

pub mod chart;
pub mod deployment;
pub mod ingress;
pub mod service;
pub mod traits;
pub mod values;

pub use chart::ChartBuilder;
pub use deployment::DeploymentBuilder;
pub use ingress::{IngressBackend, IngressBuilder, IngressPath};
pub use service::ServiceBuilder;
pub use traits::{LabeledResourceBuilder, ManifestBuilder};
pub use values::ValuesBuilder;
