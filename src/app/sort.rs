use anyhow::Result;
use log::{info, warn};

use super::AppState;
use crate::sorter::ColumnSorter;
use crate::table::writer::{save_xlsx, timestamped_path};
use crate::utils::index_to_col_name;

impl AppState {
    pub fn sort_selected_column(&mut self) {
        let column = self.selected_col;
        let sorter = ColumnSorter::new(self.strategy);

        match sorter.sort(&mut self.table, column) {
            Ok(order) => {
                self.last_sort = Some((column, order));
                self.status_message = format!(
                    "Sorted column {} {} ({})",
                    index_to_col_name(column),
                    order,
                    self.strategy
                );
            }
            Err(e) => {
                warn!("Sort failed: {}", e);
                self.status_message = format!("Sort failed: {}", e);
            }
        }
    }

    pub fn cycle_strategy(&mut self) {
        self.strategy = self.strategy.next();
        self.status_message = format!("Sort strategy: {}", self.strategy);
    }

    pub fn save(&mut self) -> Result<()> {
        let path = timestamped_path(&self.file_path);
        save_xlsx(&self.table, &path)?;
        info!("Table written to {}", path.display());
        self.status_message = format!("Saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::app::AppState;
    use crate::sorter::{SortOrder, Strategy};
    use crate::table::Table;
    use std::path::PathBuf;

    fn grades_app() -> AppState {
        let table = Table::from_strings(
            "sites",
            ["website", "grade"],
            [["a.example", "B"], ["b.example", "A++"], ["c.example", "F"]],
        );
        AppState::new(table, PathBuf::from("sites.json"), Strategy::Grade).unwrap()
    }

    #[test]
    fn test_sort_selected_column_toggles() {
        let mut app = grades_app();
        app.selected_col = 1;

        app.sort_selected_column();
        assert_eq!(app.last_sort, Some((1, SortOrder::Ascending)));
        assert_eq!(app.table.column_texts(1), vec!["F", "B", "A++"]);
        assert_eq!(app.sort_indicator(1), Some("▲"));
        assert_eq!(app.sort_indicator(0), None);

        app.sort_selected_column();
        assert_eq!(app.last_sort, Some((1, SortOrder::Descending)));
        assert_eq!(app.table.column_texts(1), vec!["A++", "B", "F"]);
        assert!(app.status_message.contains("descending"));
    }

    #[test]
    fn test_cycle_strategy() {
        let mut app = grades_app();
        app.cycle_strategy();
        assert_eq!(app.strategy, Strategy::Symbolic);
        assert_eq!(app.status_message, "Sort strategy: symbolic");
    }

    #[test]
    fn test_sort_failure_is_reported() {
        let mut table = Table::from_strings("t", ["a", "b"], [["1", "2"]]);
        table.rows[1].cells.truncate(1);
        let mut app = AppState::new(table, PathBuf::from("t.json"), Strategy::Lexical).unwrap();
        app.selected_col = 1;
        app.sort_selected_column();
        assert!(app.status_message.starts_with("Sort failed"));
        assert_eq!(app.last_sort, None);
    }
}
