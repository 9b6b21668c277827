//! Table formatting utilities for structured output.

use crate::report::{ShapeReport, format_number};
use comfy_table::{Attribute, Cell, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL};

/// Builder for creating formatted tables.
pub struct TableBuilder {
    table: Table,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TableBuilder {
    pub fn new() -> Self {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.apply_modifier(UTF8_ROUND_CORNERS);
        Self { table }
    }

    pub fn set_headers(mut self, headers: Vec<&str>) -> Self {
        let header_cells: Vec<Cell> = headers
            .into_iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
            .collect();
        self.table.set_header(header_cells);
        self
    }

    pub fn add_row(mut self, row: Vec<String>) -> Self {
        self.table.add_row(row);
        self
    }

    /// Append a row rendered in bold, e.g. a totals line.
    pub fn add_bold_row(mut self, row: Vec<String>) -> Self {
        let cells: Vec<Cell> = row
            .into_iter()
            .map(|value| Cell::new(value).add_attribute(Attribute::Bold))
            .collect();
        self.table.add_row(cells);
        self
    }

    pub fn build(self) -> String {
        self.table.to_string()
    }
}

/// Render a shape report as a table with a TOTAL row.
pub fn create_shape_table(report: &ShapeReport) -> String {
    let mut builder = TableBuilder::new().set_headers(vec!["Shape", "Points", "Area", "Perimeter"]);

    for info in &report.shapes {
        builder = builder.add_row(vec![
            info.name.clone(),
            info.points.to_string(),
            format_number(info.area),
            format_number(info.perimeter),
        ]);
    }

    builder
        .add_bold_row(vec![
            "TOTAL".to_string(),
            report
                .shapes
                .iter()
                .map(|info| info.points)
                .sum::<usize>()
                .to_string(),
            format_number(report.total_area),
            String::new(),
        ])
        .build()
}
