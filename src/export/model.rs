// src/export/model.rs

use crate::models::{Department, ReportRow};
use crate::utils::formatting::round_hours;
use rust_decimal::prelude::ToPrimitive;

/// One spreadsheet cell of a report row.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Hours(f64),
    Blank,
}

/// Header row shared by the spreadsheet.
pub fn get_headers() -> Vec<&'static str> {
    let mut headers = vec!["Boat"];
    headers.extend(Department::REPORTED.iter().map(Department::label));
    headers
}

/// Boat name followed by the four reported departments; departments
/// without hours stay blank.
pub fn row_to_cells(row: &ReportRow) -> Vec<Cell> {
    let mut cells = vec![Cell::Text(row.boat.clone())];
    for dept in Department::REPORTED {
        let cell = row
            .hours
            .department(dept)
            .and_then(|h| round_hours(h).to_f64())
            .map(Cell::Hours)
            .unwrap_or(Cell::Blank);
        cells.push(cell);
    }
    cells
}

pub fn rows_to_cells(rows: &[ReportRow]) -> Vec<Vec<Cell>> {
    rows.iter().map(row_to_cells).collect()
}
