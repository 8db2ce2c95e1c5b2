mod cell;
pub mod loader;
mod row;
pub mod writer;

pub use cell::{Cell, CellType};
pub use loader::open_table;
pub use row::Row;

use anyhow::Result;

/// An ordered set of rows where row 0 is the header and the rest are data.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    pub name: String,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(name: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Builds a table from plain strings, mostly useful for tests and small
    /// hand-written tables.
    pub fn from_strings<H, R, S>(name: &str, header: H, rows: R) -> Self
    where
        H: IntoIterator<Item = S>,
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut all_rows = Vec::new();
        all_rows.push(Row::from_values(header));
        all_rows.extend(rows.into_iter().map(Row::from_values));
        Self::new(name, all_rows)
    }

    pub fn header(&self) -> Option<&Row> {
        self.rows.first()
    }

    pub fn data_rows(&self) -> &[Row] {
        self.rows.get(1..).unwrap_or(&[])
    }

    pub fn data_row_count(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    /// Widest row in the table, header included.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Row::len).max().unwrap_or(0)
    }

    pub fn cell_text(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.text(col))
            .unwrap_or_default()
    }

    pub fn column_texts(&self, col: usize) -> Vec<&str> {
        self.data_rows()
            .iter()
            .map(|row| row.text(col).unwrap_or_default())
            .collect()
    }

    /// Replaces the data rows with the ones at `order`, which must be a
    /// permutation of `0..data_row_count()`. The header is left in place.
    pub fn reorder_data_rows(&mut self, order: &[usize]) -> Result<()> {
        let count = self.data_row_count();
        if order.len() != count {
            anyhow::bail!(
                "Row order has {} entries but the table has {} data rows",
                order.len(),
                count
            );
        }

        let mut slots: Vec<Option<Row>> = self.rows.drain(1..).map(Some).collect();
        let mut reordered = Vec::with_capacity(count);

        for &index in order {
            match slots.get_mut(index).and_then(Option::take) {
                Some(row) => reordered.push(row),
                None => {
                    // Put whatever is left back so the table is not truncated
                    self.rows.extend(reordered);
                    self.rows.extend(slots.into_iter().flatten());
                    anyhow::bail!("Row order is not a permutation (index {})", index);
                }
            }
        }

        self.rows.extend(reordered);
        Ok(())
    }

    /// Pads every row with empty cells up to the table width.
    pub fn pad_rows(&mut self) {
        let width = self.width();
        for row in &mut self.rows {
            row.cells.resize_with(width, Cell::empty);
        }
    }
}
