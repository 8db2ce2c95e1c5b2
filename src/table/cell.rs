#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub value: String,
    pub cell_type: CellType,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CellType {
    Text,
    Number,
    Boolean,
    Empty,
}

impl Cell {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cell_type = if value.is_empty() {
            CellType::Empty
        } else if value.trim().parse::<f64>().is_ok() {
            CellType::Number
        } else if value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false") {
            CellType::Boolean
        } else {
            CellType::Text
        };

        Self::new_with_type(value, cell_type)
    }

    pub fn new_with_type(value: String, cell_type: CellType) -> Self {
        Self { value, cell_type }
    }

    pub fn empty() -> Self {
        Self {
            value: String::new(),
            cell_type: CellType::Empty,
        }
    }
}
