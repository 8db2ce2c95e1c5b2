use anyhow::{Context, Result};
use calamine::{Data, Reader, open_workbook_auto};
use indexmap::IndexMap;
use log::info;
use serde_json::Value;
use std::fs;
use std::path::Path;

use super::{Cell, CellType, Row, Table};

const SPREADSHEET_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Opens a table from a spreadsheet (first worksheet unless `sheet` names
/// one) or from a JSON array of objects.
pub fn open_table<P: AsRef<Path>>(path: P, sheet: Option<&str>) -> Result<Table> {
    let path = path.as_ref();

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase());

    let table = match extension.as_deref() {
        Some("json") => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Unable to read file: {}", path.display()))?;
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("table");
            table_from_json(name, &content)
                .with_context(|| format!("Unable to parse JSON table: {}", path.display()))?
        }
        Some(ext) if SPREADSHEET_EXTENSIONS.contains(&ext) => open_spreadsheet(path, sheet)?,
        _ => anyhow::bail!("Unsupported file type: {}", path.display()),
    };

    info!(
        "Loaded '{}' from {} ({} data rows, {} columns)",
        table.name,
        path.display(),
        table.data_row_count(),
        table.width()
    );

    Ok(table)
}

fn open_spreadsheet(path: &Path, sheet: Option<&str>) -> Result<Table> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Unable to parse Excel file: {}", path.display()))?;

    let sheet_names = workbook.sheet_names().to_vec();

    let name = match sheet {
        Some(name) => {
            if !sheet_names.iter().any(|n| n == name) {
                anyhow::bail!(
                    "Worksheet '{}' not found (available: {})",
                    name,
                    sheet_names.join(", ")
                );
            }
            name.to_string()
        }
        None => sheet_names
            .first()
            .cloned()
            .context("No worksheets found in file")?,
    };

    let range = workbook
        .worksheet_range(&name)
        .with_context(|| format!("Unable to read worksheet: {}", name))?;

    let rows: Vec<Row> = range
        .rows()
        .map(|row| Row::new(row.iter().map(cell_from_data).collect()))
        .collect();

    if rows.is_empty() {
        anyhow::bail!("Worksheet '{}' is empty", name);
    }

    let mut table = Table::new(name, rows);
    table.pad_rows();
    Ok(table)
}

/// Converts a calamine value to the text a spreadsheet would display.
fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::empty(),

        Data::String(s) => Cell::new_with_type(s.clone(), CellType::Text),

        Data::Float(f) => {
            let value = if f.fract() == 0.0 && f.abs() < 1e10 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            };
            Cell::new_with_type(value, CellType::Number)
        }

        Data::Int(i) => Cell::new_with_type(i.to_string(), CellType::Number),

        Data::Bool(b) => Cell::new_with_type(
            if *b { "TRUE" } else { "FALSE" }.to_string(),
            CellType::Boolean,
        ),

        Data::Error(e) => Cell::new_with_type(format!("Error: {:?}", e), CellType::Text),

        Data::DateTime(dt) => Cell::new_with_type(dt.to_string(), CellType::Text),

        Data::DateTimeIso(s) | Data::DurationIso(s) => {
            Cell::new_with_type(s.clone(), CellType::Text)
        }
    }
}

/// Reads the layout written by the JSON exporter: an array of objects whose
/// keys form the header, in first-seen order.
pub fn table_from_json(name: &str, content: &str) -> Result<Table> {
    let records: Vec<IndexMap<String, Value>> =
        serde_json::from_str(content).context("Expected an array of objects")?;

    let mut headers: Vec<String> = Vec::new();
    for record in &records {
        for key in record.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push(Row::from_values(headers.iter().cloned()));

    for record in &records {
        let cells = headers
            .iter()
            .map(|header| match record.get(header) {
                None | Some(Value::Null) => Cell::empty(),
                Some(Value::String(s)) => Cell::new_with_type(s.clone(), CellType::Text),
                Some(Value::Number(n)) => Cell::new_with_type(n.to_string(), CellType::Number),
                Some(Value::Bool(b)) => {
                    Cell::new_with_type(if *b { "TRUE" } else { "FALSE" }.to_string(), CellType::Boolean)
                }
                Some(other) => Cell::new(other.to_string()),
            })
            .collect();
        rows.push(Row::new(cells));
    }

    Ok(Table::new(name, rows))
}
