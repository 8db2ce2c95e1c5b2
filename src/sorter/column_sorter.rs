use anyhow::Result;
use log::debug;
use std::fmt;

use super::key::{KeyExtractor, SortKey, Strategy};
use crate::table::{Row, Table};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn symbol(self) -> &'static str {
        match self {
            SortOrder::Ascending => "▲",
            SortOrder::Descending => "▼",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => f.write_str("ascending"),
            SortOrder::Descending => f.write_str("descending"),
        }
    }
}

/// Sorts the data rows of a table by one column.
///
/// The sorter keeps no direction state. Each call sorts ascending, unless the
/// column text already reads in ascending order, in which case the rows are
/// reversed and the call reports descending. An external reorder of the rows
/// can never leave a stale direction behind.
///
/// A second call flips back to ascending only when reversing changed the
/// column text. If every key ties while the texts differ (grades `"A "` and
/// `" A"`), each call sees the stable ascending order unchanged, reverses the
/// rows again and reports descending every time.
pub struct ColumnSorter {
    extractor: Box<dyn KeyExtractor>,
}

impl ColumnSorter {
    pub fn new(strategy: Strategy) -> Self {
        Self::with_extractor(strategy.extractor())
    }

    pub fn with_extractor(extractor: Box<dyn KeyExtractor>) -> Self {
        Self { extractor }
    }

    pub fn strategy_name(&self) -> &'static str {
        self.extractor.name()
    }

    /// Reorders the data rows of `table` by `column` and reports the
    /// direction that was applied. The header row is never moved.
    ///
    /// Fails without touching the table if a data row has no cell at
    /// `column`.
    pub fn sort(&self, table: &mut Table, column: usize) -> Result<SortOrder> {
        let rows = table.data_rows();

        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() <= column) {
            anyhow::bail!(
                "Column {} is out of range: data row {} has {} cells",
                column,
                index + 1,
                row.len()
            );
        }

        let mut order = self.ascending_order(rows, column);

        let already_ascending = order
            .iter()
            .enumerate()
            .all(|(position, &source)| rows[position].text(column) == rows[source].text(column));

        let sort_order = if already_ascending {
            order.reverse();
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        };

        debug!(
            "Sorting {} rows of '{}' by column {} ({}, {})",
            rows.len(),
            table.name,
            column,
            self.extractor.name(),
            sort_order
        );

        table.reorder_data_rows(&order)?;

        Ok(sort_order)
    }

    /// Indices of `rows` in stable ascending key order. Every row must have a
    /// cell at `column`.
    fn ascending_order(&self, rows: &[Row], column: usize) -> Vec<usize> {
        let mut keyed: Vec<(SortKey, usize)> = rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let text = row.text(column).unwrap_or_default();
                (self.extractor.extract_key(text), index)
            })
            .collect();

        // sort_by is stable, equal keys keep their current relative order
        keyed.sort_by(|(a, _), (b, _)| a.cmp(b));

        keyed.into_iter().map(|(_, index)| index).collect()
    }
}

impl Default for ColumnSorter {
    fn default() -> Self {
        Self::new(Strategy::default())
    }
}

pub fn sort_table(table: &mut Table, column: usize, strategy: Strategy) -> Result<SortOrder> {
    ColumnSorter::new(strategy).sort(table, column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorter::key::Lexical;

    fn single_column(values: &[&str]) -> Table {
        Table::from_strings("t", ["value"], values.iter().map(|v| [*v]))
    }

    #[test]
    fn test_first_sort_is_ascending() {
        let mut table = single_column(&["banana", "apple", "cherry"]);
        let order = ColumnSorter::new(Strategy::Lexical).sort(&mut table, 0).unwrap();
        assert_eq!(order, SortOrder::Ascending);
        assert_eq!(table.column_texts(0), vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_sorted_table_flips_to_descending() {
        let mut table = single_column(&["apple", "banana", "cherry"]);
        let order = ColumnSorter::new(Strategy::Lexical).sort(&mut table, 0).unwrap();
        assert_eq!(order, SortOrder::Descending);
        assert_eq!(table.column_texts(0), vec!["cherry", "banana", "apple"]);
    }

    #[test]
    fn test_out_of_range_column_leaves_table_alone() {
        let mut table = single_column(&["b", "a"]);
        let before = table.clone();
        let err = ColumnSorter::default().sort(&mut table, 3).unwrap_err();
        assert!(err.to_string().contains("out of range"));
        assert_eq!(table, before);
    }

    #[test]
    fn test_header_only_ignores_column_range() {
        let mut table = Table::from_strings("t", ["only"], Vec::<[&str; 1]>::new());
        let before = table.clone();
        assert!(ColumnSorter::default().sort(&mut table, 5).is_ok());
        assert_eq!(table, before);
    }

    #[test]
    fn test_custom_extractor() {
        struct ByLength;

        impl KeyExtractor for ByLength {
            fn extract_key(&self, text: &str) -> SortKey {
                SortKey::Rank(text.chars().count() as i32)
            }

            fn name(&self) -> &'static str {
                "length"
            }
        }

        let mut table = single_column(&["ccc", "a", "bb"]);
        let sorter = ColumnSorter::with_extractor(Box::new(ByLength));
        assert_eq!(sorter.strategy_name(), "length");
        sorter.sort(&mut table, 0).unwrap();
        assert_eq!(table.column_texts(0), vec!["a", "bb", "ccc"]);
    }

    #[test]
    fn test_with_extractor_matches_strategy() {
        let mut a = single_column(&["b", "c", "a"]);
        let mut b = a.clone();
        ColumnSorter::with_extractor(Box::new(Lexical)).sort(&mut a, 0).unwrap();
        sort_table(&mut b, 0, Strategy::Lexical).unwrap();
        assert_eq!(a, b);
    }
}
