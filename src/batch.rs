use anyhow::Result;
use log::info;

use crate::sorter::{ColumnSorter, SortOrder, Strategy};
use crate::table::Table;

/// Applies the sort `repeat` times, like clicking the same header that many
/// times, and returns the direction of the last pass.
///
/// Without a column nothing is sorted, and asking for anything other than a
/// single pass is an error.
pub fn apply_sorts(
    table: &mut Table,
    column: Option<usize>,
    strategy: Strategy,
    repeat: usize,
) -> Result<Option<SortOrder>> {
    let Some(column) = column else {
        if repeat != 1 {
            anyhow::bail!("--repeat needs --column");
        }
        return Ok(None);
    };

    let sorter = ColumnSorter::new(strategy);
    let mut last = None;

    for _ in 0..repeat {
        let order = sorter.sort(table, column)?;
        info!("Sorted column {} {}", column, order);
        last = Some(order);
    }

    Ok(last)
}
