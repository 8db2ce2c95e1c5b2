use anyhow::Result;

/// Spreadsheet column letters for a zero-based index: 0 is `A`, 26 is `AA`.
#[must_use]
pub fn index_to_col_name(index: usize) -> String {
    let mut col_name = String::new();
    let mut n = index + 1;

    while n > 0 {
        let remainder = (n - 1) % 26;
        col_name.insert(0, (b'A' + remainder as u8) as char);
        n = (n - 1) / 26;
    }

    col_name
}

/// Zero-based index for column letters, case-insensitive.
#[must_use]
pub fn col_name_to_index(name: &str) -> Option<usize> {
    if name.is_empty() {
        return None;
    }

    let mut result: usize = 0;

    for c in name.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }

        let val = (c.to_ascii_uppercase() as u8 - b'A' + 1) as usize;
        result = result.checked_mul(26)?.checked_add(val)?;
    }

    Some(result - 1)
}

/// Accepts either a zero-based index (`2`) or column letters (`C`).
pub fn parse_column(input: &str) -> Result<usize> {
    let input = input.trim();

    if let Ok(index) = input.parse::<usize>() {
        return Ok(index);
    }

    match col_name_to_index(input) {
        Some(index) => Ok(index),
        None => anyhow::bail!("Invalid column: {}", input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_to_col_name() {
        assert_eq!(index_to_col_name(0), "A");
        assert_eq!(index_to_col_name(25), "Z");
        assert_eq!(index_to_col_name(26), "AA");
        assert_eq!(index_to_col_name(701), "ZZ");
    }

    #[test]
    fn test_col_name_to_index() {
        assert_eq!(col_name_to_index("A"), Some(0));
        assert_eq!(col_name_to_index("c"), Some(2));
        assert_eq!(col_name_to_index("AA"), Some(26));
        assert_eq!(col_name_to_index(""), None);
        assert_eq!(col_name_to_index("A1"), None);
    }

    #[test]
    fn test_parse_column() {
        assert_eq!(parse_column("2").unwrap(), 2);
        assert_eq!(parse_column(" C ").unwrap(), 2);
        assert_eq!(parse_column("0").unwrap(), 0);
        assert!(parse_column("-1").is_err());
        assert!(parse_column("").is_err());
    }
}
