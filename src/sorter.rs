mod column_sorter;
mod key;

pub use column_sorter::{ColumnSorter, SortOrder, sort_table};
pub use key::{GradeScale, KeyExtractor, Lexical, Mark, SortKey, Strategy, Symbolic};
