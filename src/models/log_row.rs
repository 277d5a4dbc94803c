//! Visit log row model

use serde_json::Value;

/// One positional record of the visit log:
/// `[timestamp, name, email, phone, institution, subject, message]`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogRow(Vec<String>);

impl LogRow {
    /// Number of fields written per row
    pub const WIDTH: usize = 7;

    pub fn new(fields: Vec<String>) -> Self {
        Self(fields)
    }

    /// Build a row from cells as returned by the sheet.
    ///
    /// Cells are formatted strings in practice; anything else is stringified.
    pub fn from_cells(cells: Vec<Value>) -> Self {
        Self(
            cells
                .into_iter()
                .map(|cell| match cell {
                    Value::String(s) => s,
                    Value::Null => String::new(),
                    other => other.to_string(),
                })
                .collect(),
        )
    }

    pub fn fields(&self) -> &[String] {
        &self.0
    }

    /// Raw timestamp cell; empty when the store returned a short row
    pub fn timestamp(&self) -> &str {
        self.0.first().map(String::as_str).unwrap_or("")
    }
}

impl From<Vec<&str>> for LogRow {
    fn from(fields: Vec<&str>) -> Self {
        Self(fields.into_iter().map(String::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_cells_normalizes_values() {
        let row = LogRow::from_cells(vec![json!("3/10/2025, 10.27.04"), json!(812), json!(null)]);
        assert_eq!(row.fields(), ["3/10/2025, 10.27.04", "812", ""]);
    }

    #[test]
    fn test_timestamp_of_empty_row() {
        assert_eq!(LogRow::default().timestamp(), "");
        assert_eq!(LogRow::from(vec!["", "Budi"]).timestamp(), "");
    }
}
