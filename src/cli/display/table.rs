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

//! Table rendering for CLI output

use super::colors::table_color_to_colored_str;
use super::{ColorTheme, StatusIcon};
use crate::domain::chart::{GenerationReport, ServiceReport};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};

/// Table renderer for formatted output
pub struct TableRenderer {
    theme: ColorTheme,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRenderer {
    /// Create a new table renderer with default theme
    pub fn new() -> Self {
        Self {
            theme: ColorTheme::default(),
        }
    }

    /// Render a generation (or dry run) report as a formatted table
    pub fn render_generation_report(&self, report: &GenerationReport) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "╭─ {} {} {} ─╮\n",
            report.application,
            report.version,
            format!(
                "[{} service(s), {} file(s)]",
                report.services.len(),
                report.total_files()
            )
            .bright_black()
        ));
        output.push_str(&format!(
            "{} {} → {}\n",
            StatusIcon::get_result_icon(report.dry_run)
                .color(table_color_to_colored_str(
                    self.theme.get_result_color(report.dry_run)
                )),
            StatusIcon::get_result_text(report.dry_run),
            report.target_dir.display()
        ));

        if report.services.is_empty() {
            output.push_str("No services configured, only the parent chart is generated\n");
            return output;
        }

        output.push_str(&self.services_table(&report.services).to_string());
        output.push('\n');
        output.push_str(&format!(
            "Legend: {} Ports  {} No ports  {} Ingress\n",
            StatusIcon::SUCCESS.green(),
            StatusIcon::WARNING.yellow(),
            StatusIcon::INGRESS.cyan()
        ));

        output
    }

    fn services_table(&self, services: &[ServiceReport]) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("SERVICE").set_alignment(CellAlignment::Left),
                Cell::new("SOURCE").set_alignment(CellAlignment::Left),
                Cell::new("REPLICAS").set_alignment(CellAlignment::Center),
                Cell::new("CONTAINER PORTS").set_alignment(CellAlignment::Center),
                Cell::new("SERVICE PORTS").set_alignment(CellAlignment::Center),
                Cell::new("INGRESS").set_alignment(CellAlignment::Center),
                Cell::new("FILES").set_alignment(CellAlignment::Center),
            ]);

        for service in services {
            table.add_row(vec![
                Cell::new(&service.service_name),
                Cell::new(&service.source_directory),
                Cell::new(service.replicas).set_alignment(CellAlignment::Center),
                self.port_cell(service.container_ports),
                self.port_cell(service.service_ports),
                Cell::new(format!(
                    "{} {}",
                    StatusIcon::get_ingress_icon(service.ingress_rules),
                    service.ingress_rules
                ))
                .fg(self.theme.get_ingress_color(service.ingress_rules))
                .set_alignment(CellAlignment::Center),
                Cell::new(service.files.len()).set_alignment(CellAlignment::Center),
            ]);
        }

        table
    }

    fn port_cell(&self, count: usize) -> Cell {
        Cell::new(format!("{} {}", StatusIcon::get_port_icon(count), count))
            .fg(self.theme.get_port_color(count))
            .set_alignment(CellAlignment::Center)
    }
}
