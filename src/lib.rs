pub mod app;
pub mod batch;
pub mod csv_export;
pub mod html_export;
pub mod json_export;
pub mod logging;
pub mod sorter;
pub mod table;
pub mod ui;
pub mod utils;

pub use sorter::{ColumnSorter, KeyExtractor, SortKey, SortOrder, Strategy, sort_table};
pub use table::{Cell, CellType, Row, Table, open_table};
