use serde::{Deserialize, Serialize};

/// One column of a served table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name as reported by the backend
    pub name: String,
}

/// Full column/row snapshot returned by the table and search endpoints.
///
/// Cells are opaque strings. Rows are interpreted positionally against
/// `columns`; a row's length is not validated against the column count,
/// so ragged responses are carried through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableData {
    /// Column headers for the current table
    pub columns: Vec<Column>,
    /// Body rows, each an ordered list of cell values
    pub rows: Vec<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_documented_wire_shape() {
        let body = r#"{
            "columns": [{"name": "id"}, {"name": "email"}],
            "rows": [["1", "a@x.com"], ["2", "b@y.com"]]
        }"#;

        let data: TableData = serde_json::from_str(body).unwrap();
        assert_eq!(data.columns.len(), 2);
        assert_eq!(data.columns[0].name, "id");
        assert_eq!(data.columns[1].name, "email");
        assert_eq!(data.rows.len(), 2);
        assert_eq!(data.rows[0], vec!["1", "a@x.com"]);
        assert_eq!(data.rows[1], vec!["2", "b@y.com"]);
    }

    #[test]
    fn ragged_rows_are_kept_as_received() {
        // Row length is not reconciled with the column count.
        let body = r#"{
            "columns": [{"name": "a"}, {"name": "b"}],
            "rows": [["1"], ["2", "3", "4"], []]
        }"#;

        let data: TableData = serde_json::from_str(body).unwrap();
        assert_eq!(data.columns.len(), 2);
        assert_eq!(data.rows[0].len(), 1);
        assert_eq!(data.rows[1].len(), 3);
        assert_eq!(data.rows[2].len(), 0);
    }

    #[test]
    fn serializes_back_to_the_same_shape() {
        let data = TableData {
            columns: vec![Column {
                name: "id".to_string(),
            }],
            rows: vec![vec!["1".to_string()]],
        };

        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "columns": [{"name": "id"}],
                "rows": [["1"]]
            })
        );
    }

    #[test]
    fn default_is_empty() {
        let data = TableData::default();
        assert!(data.columns.is_empty());
        assert!(data.rows.is_empty());
    }
}
