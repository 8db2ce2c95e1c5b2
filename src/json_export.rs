mod converters;
mod exporters;

pub use converters::process_cell_value;
pub use exporters::{TableRecords, export_json, serialize_to_json, table_to_json};
