use anyhow::Result;
use std::path::PathBuf;

use crate::sorter::{SortOrder, Strategy};
use crate::table::Table;

const MIN_COLUMN_WIDTH: usize = 5;
const MAX_COLUMN_WIDTH: usize = 30;

pub struct AppState {
    pub table: Table,
    pub file_path: PathBuf,
    pub strategy: Strategy,
    pub selected_col: usize,
    pub start_row: usize, // First visible data row (0-based within the data rows)
    pub start_col: usize,
    pub visible_rows: usize,
    pub visible_cols: usize,
    pub column_widths: Vec<usize>,
    pub last_sort: Option<(usize, SortOrder)>, // (column, order) of the last sort
    pub status_message: String,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(table: Table, file_path: PathBuf, strategy: Strategy) -> Result<Self> {
        if table.header().is_none() {
            anyhow::bail!("Table '{}' has no header row", table.name);
        }

        let column_widths = compute_column_widths(&table);

        Ok(Self {
            table,
            file_path,
            strategy,
            selected_col: 0,
            start_row: 0,
            start_col: 0,
            visible_rows: 30, // Adjusted to the window size on first draw
            visible_cols: 10,
            column_widths,
            last_sort: None,
            status_message: String::new(),
            should_quit: false,
        })
    }

    pub fn get_column_width(&self, col: usize) -> usize {
        self.column_widths
            .get(col)
            .copied()
            .unwrap_or(MIN_COLUMN_WIDTH)
    }

    pub fn get_cell_content(&self, row: usize, col: usize) -> &str {
        self.table.cell_text(row, col)
    }

    /// Sort indicator for a header cell, if that column was sorted last.
    pub fn sort_indicator(&self, col: usize) -> Option<&'static str> {
        match self.last_sort {
            Some((sorted_col, order)) if sorted_col == col => Some(order.symbol()),
            _ => None,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

/// Display width: ASCII takes one cell, everything else two.
pub fn display_width(text: &str) -> usize {
    text.chars().fold(0, |acc, c| acc + if c.is_ascii() { 1 } else { 2 })
}

fn compute_column_widths(table: &Table) -> Vec<usize> {
    let mut widths = vec![MIN_COLUMN_WIDTH; table.width()];

    for row in &table.rows {
        for (col, cell) in row.cells.iter().enumerate() {
            if let Some(width) = widths.get_mut(col) {
                // Room for the sort indicator and padding
                let needed = display_width(&cell.value) + 3;
                *width = (*width).max(needed.min(MAX_COLUMN_WIDTH));
            }
        }
    }

    widths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_header() {
        let table = Table::new("empty", Vec::new());
        assert!(AppState::new(table, PathBuf::from("x.json"), Strategy::Lexical).is_err());
    }

    #[test]
    fn test_column_widths_are_clamped() {
        let long = "x".repeat(100);
        let table = Table::from_strings("t", ["a", "b"], [["1", long.as_str()]]);
        let app = AppState::new(table, PathBuf::from("t.json"), Strategy::Lexical).unwrap();
        assert_eq!(app.get_column_width(0), MIN_COLUMN_WIDTH);
        assert_eq!(app.get_column_width(1), MAX_COLUMN_WIDTH);
        assert_eq!(app.get_column_width(7), MIN_COLUMN_WIDTH);
    }

    #[test]
    fn test_display_width() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("✅"), 2);
    }
}
