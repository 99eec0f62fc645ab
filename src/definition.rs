//! FILENAME: src/definition.rs
//! Transpose Definition - The serializable configuration.
//!
//! This module contains the types that DESCRIBE a transpose run.
//! These structures are designed to be:
//! - Serializable (for embedding in pipeline configs)
//! - Immutable snapshots of caller intent
//!
//! The engine itself never enforces a schema: records are open-ended
//! bags of named values and may carry disjoint, overlapping, or
//! identical property sets.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single input record: an open-ended mapping of property name to value.
///
/// Backed by `serde_json::Map` so any deserialized object can be fed in
/// unchanged. Input key order is irrelevant; the engine only looks at
/// name/value pairs.
pub type Record = Map<String, Value>;

// ============================================================================
// RESERVED PROPERTIES
// ============================================================================

/// Synthetic bookkeeping properties injected by change-tracking object
/// models upstream. These are never meaningful data and are always
/// removed from the property universe before any row is emitted.
pub const RESERVED_PROPERTIES: [&str; 5] = [
    "AddedProperties",
    "ModifiedProperties",
    "RemovedProperties",
    "PropertyCount",
    "PropertyNames",
];

// ============================================================================
// MAIN DEFINITION STRUCT
// ============================================================================

/// The complete, serializable definition of a transpose run.
///
/// The configuration surface is deliberately small: the record sequence
/// (supplied separately to the engine) and one flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransposeDefinition {
    /// When true, suppress rows whose values are equal across all input
    /// records. Equality is null-aware: a property that is empty in some
    /// records and populated in others always counts as a difference,
    /// and a property that is empty everywhere is never emitted.
    #[serde(default)]
    pub difference_only: bool,
}

impl TransposeDefinition {
    pub fn new(difference_only: bool) -> Self {
        TransposeDefinition { difference_only }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_defaults_to_full_output() {
        let def = TransposeDefinition::default();
        assert!(!def.difference_only);
    }

    #[test]
    fn definition_round_trips_through_serde() {
        let def = TransposeDefinition::new(true);
        let json = serde_json::to_string(&def).unwrap();
        let back: TransposeDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(def, back);
    }

    #[test]
    fn missing_flag_deserializes_to_default() {
        let def: TransposeDefinition = serde_json::from_str("{}").unwrap();
        assert!(!def.difference_only);
    }
}
