use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::json_export::converters::process_cell_value;
use crate::table::Table;

/// One object per data row, keyed by header text in column order.
pub type TableRecords = Vec<IndexMap<String, Value>>;

pub fn serialize_to_json<T: Serialize>(data: &T) -> Result<String> {
    serde_json::to_string_pretty(data).context("Failed to serialize data to JSON")
}

/// Converts the data rows to records. Columns with an empty header are
/// skipped, and so are rows with nothing left to export.
pub fn table_to_json(table: &Table) -> TableRecords {
    let headers: Vec<(usize, &str)> = match table.header() {
        Some(header) => header
            .cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.value.is_empty())
            .map(|(col_idx, cell)| (col_idx, cell.value.as_str()))
            .collect(),
        None => return Vec::new(),
    };

    let mut records = Vec::with_capacity(table.data_row_count());

    for row in table.data_rows() {
        let mut record = IndexMap::with_capacity(headers.len());

        for (col_idx, header) in &headers {
            if let Some(cell) = row.cells.get(*col_idx) {
                record.insert((*header).to_string(), process_cell_value(cell));
            }
        }

        if !record.is_empty() {
            records.push(record);
        }
    }

    records
}

pub fn export_json(table: &Table, path: &Path) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create file: {}", path.display()))?;

    let json_string = serialize_to_json(&table_to_json(table))?;

    file.write_all(json_string.as_bytes())
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;

    Ok(())
}
