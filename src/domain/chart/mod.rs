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

//! Chart generation domain

pub mod descriptor;
pub mod emitter;
pub mod ports;
pub mod report;
pub mod service_chart;

pub use self::descriptor::{derive_service_name, is_valid_service_name, ServiceDescriptor};
pub use self::emitter::HelmChartEmitter;
pub use self::ports::{PortResolver, ResolvedPorts};
pub use self::report::{GenerationReport, ServiceReport};
pub use self::service_chart::ServiceChart;
