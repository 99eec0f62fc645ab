//! FILENAME: src/view.rs
//! Transpose View - The output row shape.
//!
//! This module defines what the engine emits: one row per surviving
//! property, shaped as an ordered mapping whose first field is the
//! property name followed by one column per input record. The engine
//! does not render or persist anything; rows go to whatever formatter,
//! exporter, or filter sits downstream.

use serde_json::{Map, Value};

/// A single output row.
///
/// Field order is guaranteed: `Property` first, then `Object_1` through
/// `Object_N` in input-record order (the crate enables serde_json's
/// `preserve_order` feature for exactly this reason). A record that
/// lacks the property contributes `Value::Null` for its column.
pub type TransposeRow = Map<String, Value>;

/// Name of the guaranteed-first output field holding the property name.
pub const PROPERTY_COLUMN: &str = "Property";

/// Column name for the input record at `index` (0-based in, 1-based
/// out: record 0 becomes `Object_1`).
pub fn object_column_name(index: usize) -> String {
    format!("Object_{}", index + 1)
}

/// Builds one output row from a property name and the values gathered
/// for it, one per input record, in arrival order.
pub(crate) fn build_row(property: &str, values: &[&Value]) -> TransposeRow {
    let mut row = TransposeRow::new();
    row.insert(
        PROPERTY_COLUMN.to_string(),
        Value::String(property.to_string()),
    );
    for (index, value) in values.iter().enumerate() {
        row.insert(object_column_name(index), (*value).clone());
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_columns_are_one_indexed() {
        assert_eq!(object_column_name(0), "Object_1");
        assert_eq!(object_column_name(9), "Object_10");
    }

    #[test]
    fn row_fields_keep_declaration_order() {
        let a = json!("a");
        let b = json!(2);
        let row = build_row("Size", &[&a, &b]);

        let fields: Vec<&str> = row.keys().map(|k| k.as_str()).collect();
        assert_eq!(fields, vec!["Property", "Object_1", "Object_2"]);
        assert_eq!(row["Property"], json!("Size"));
        assert_eq!(row["Object_1"], json!("a"));
        assert_eq!(row["Object_2"], json!(2));
    }
}
