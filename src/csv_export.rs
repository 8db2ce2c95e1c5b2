//! Plain-text export: header and data rows, one line each, fields separated
//! by `;` the way the website check scripts print their tables.

use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::table::Table;

pub const DELIMITER: u8 = b';';

pub fn write_csv<W: Write>(table: &Table, writer: W) -> Result<()> {
    let mut csv_writer = WriterBuilder::new()
        .delimiter(DELIMITER)
        // Rows keep whatever width they were loaded with
        .flexible(true)
        .from_writer(writer);

    for row in &table.rows {
        csv_writer
            .write_record(row.cells.iter().map(|cell| cell.value.as_str()))
            .context("Failed to write CSV record")?;
    }

    csv_writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

pub fn render_csv(table: &Table) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(table, &mut buffer)?;
    String::from_utf8(buffer).context("CSV output is not valid UTF-8")
}

pub fn export_csv(table: &Table, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create file: {}", path.display()))?;
    write_csv(table, file).with_context(|| format!("Failed to write to file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_and_rows_are_semicolon_separated() {
        let table = Table::from_strings(
            "websites",
            ["website", "grade", "robots"],
            [["b.example", "F", "✖"], ["a.example", "A+", "✅"]],
        );

        assert_eq!(
            render_csv(&table).unwrap(),
            "website;grade;robots\nb.example;F;✖\na.example;A+;✅\n"
        );
    }

    #[test]
    fn test_fields_containing_the_delimiter_are_quoted() {
        let table = Table::from_strings("t", ["note"], [["a;b"]]);
        assert_eq!(render_csv(&table).unwrap(), "note\n\"a;b\"\n");
    }

    #[test]
    fn test_header_only_table() {
        let table = Table::from_strings("t", ["a", "b"], Vec::<[&str; 2]>::new());
        assert_eq!(render_csv(&table).unwrap(), "a;b\n");
    }
}
