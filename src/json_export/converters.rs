use serde_json::{Value, json};

use crate::table::{Cell, CellType};

// Typed JSON value for a cell, falling back to the displayed text
pub fn process_cell_value(cell: &Cell) -> Value {
    if cell.value.is_empty() {
        return Value::Null;
    }

    match cell.cell_type {
        CellType::Number => match cell.value.trim().parse::<f64>() {
            Ok(num) if num.fract() == 0.0 && num.abs() < 1e15 => json!(num as i64),
            Ok(num) if num.is_finite() => json!(num),
            _ => json!(cell.value),
        },
        CellType::Boolean => match cell.value.to_lowercase().as_str() {
            "true" => json!(true),
            "false" => json!(false),
            _ => json!(cell.value),
        },
        CellType::Empty => Value::Null,
        CellType::Text => json!(cell.value),
    }
}
