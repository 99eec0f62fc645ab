//! FILENAME: src/lib.rs
//! Transpose engine for heterogeneous record collections.
//!
//! Reshapes a list of schema-less records (one record per row, properties
//! as columns) into one output row per property, with one column per input
//! record. The structural inverse of a tabular formatter: downstream
//! consumers receive `Property`, `Object_1`..`Object_N` rows they can
//! render, export, or filter further.
//!
//! Layers:
//! - `definition`: Serializable configuration (what the transpose IS)
//! - `view`: Output row shape (WHAT we emit)
//! - `engine`: Calculation engine (HOW we pivot)
//! - `error`: Failure conditions

pub mod definition;
pub mod view;
pub mod engine;
pub mod error;

pub use definition::*;
pub use view::*;
pub use engine::{transpose, TransposeEngine, TransposeRows};
pub use error::TransposeError;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn it_transposes_a_single_record() {
        let record = json!({"Name": "Ada"});
        let records = vec![record.as_object().unwrap().clone()];

        let rows: Vec<_> = transpose(records, &TransposeDefinition::default())
            .unwrap()
            .collect();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["Property"], json!("Name"));
        assert_eq!(rows[0]["Object_1"], json!("Ada"));
    }
}
