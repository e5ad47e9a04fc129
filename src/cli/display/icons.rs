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

//! Status icons for CLI output

/// Status icons for different states
pub struct StatusIcon;

impl StatusIcon {
    /// Files written
    pub const SUCCESS: &'static str = "✓";

    /// Files planned but not written (dry run)
    pub const PLANNED: &'static str = "○";

    /// Service with no ports
    pub const WARNING: &'static str = "⚠";

    /// Service exposed through an ingress
    pub const INGRESS: &'static str = "🌐";

    /// Nothing to show
    pub const NONE: &'static str = "-";

    pub fn get_result_icon(dry_run: bool) -> &'static str {
        if dry_run {
            Self::PLANNED
        } else {
            Self::SUCCESS
        }
    }

    pub fn get_result_text(dry_run: bool) -> &'static str {
        if dry_run {
            "Valid"
        } else {
            "Generated"
        }
    }

    pub fn get_port_icon(count: usize) -> &'static str {
        if count == 0 {
            Self::WARNING
        } else {
            Self::SUCCESS
        }
    }

    pub fn get_ingress_icon(rules: usize) -> &'static str {
        if rules == 0 {
            Self::NONE
        } else {
            Self::INGRESS
        }
    }
}
