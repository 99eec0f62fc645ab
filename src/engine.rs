//! FILENAME: src/engine.rs
//! Transpose Engine - The calculation core that pivots records into rows.
//!
//! This module takes a TransposeDefinition (configuration) and a
//! collected sequence of records (data) and produces TransposeRows
//! (one row per surviving property).
//!
//! Algorithm:
//! 1. Collect records, preserving arrival order (fixes column assignment)
//! 2. Discover the property universe: union of all names, kept sorted
//! 3. Filter reserved bookkeeping names out of the universe
//! 4. Emit one row per property; in difference-only mode, gate each row
//!    through the null-aware difference test

use smallvec::SmallVec;
use rustc_hash::FxHashSet;
use serde_json::Value;
use crate::definition::{Record, TransposeDefinition, RESERVED_PROPERTIES};
use crate::error::TransposeError;
use crate::view::{build_row, TransposeRow};

/// Owned null for columns where a record lacks the property.
static NULL_VALUE: Value = Value::Null;

// ============================================================================
// TRANSPOSE ENGINE
// ============================================================================

/// The transpose engine: a two-phase collect-then-emit pipeline.
///
/// Records are accumulated one at a time or in bulk (sources often
/// arrive in batches); their arrival order determines the
/// `Object_1..Object_N` column assignment and is never re-sorted.
/// Once collection is complete, [`TransposeEngine::rows`] consumes the
/// engine and yields the output rows, so an instance can only be
/// finalized once.
#[derive(Debug, Clone, Default)]
pub struct TransposeEngine {
    definition: TransposeDefinition,

    /// Collected records, in arrival order.
    records: Vec<Record>,
}

impl TransposeEngine {
    pub fn new(definition: TransposeDefinition) -> Self {
        TransposeEngine {
            definition,
            records: Vec::new(),
        }
    }

    /// Appends a single record.
    pub fn collect(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Appends a batch of records, preserving their order.
    pub fn collect_many(&mut self, records: impl IntoIterator<Item = Record>) {
        self.records.extend(records);
    }

    /// Number of records collected so far.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Finalizes the engine and returns the lazy row sequence, in
    /// property-sorted order.
    ///
    /// Errors with [`TransposeError::NoRecords`] if nothing was
    /// collected: there is no record to seed the property universe from,
    /// and silently emitting nothing would mask the usage error.
    pub fn rows(self) -> Result<TransposeRows, TransposeError> {
        if self.records.is_empty() {
            return Err(TransposeError::NoRecords);
        }

        let mut universe = discover_properties(&self.records);
        filter_reserved(&mut universe);

        Ok(TransposeRows {
            records: self.records,
            properties: universe.into_iter(),
            difference_only: self.definition.difference_only,
        })
    }
}

// ============================================================================
// PROPERTY UNIVERSE
// ============================================================================

/// Computes the union of property names across all records.
///
/// The universe is seeded with the first record's names and kept sorted
/// throughout; each later name is located with a binary search and, when
/// absent, inserted at its sorted position. Later records may introduce
/// properties the first record lacked, so the union over all records is
/// required, not just the first record's shape.
///
/// Ordering is `str`'s default byte-wise comparison: case sensitive,
/// with ASCII uppercase sorting before lowercase.
fn discover_properties(records: &[Record]) -> Vec<String> {
    let (first, rest) = match records.split_first() {
        Some(split) => split,
        None => return Vec::new(),
    };

    let mut universe: Vec<String> = first.keys().cloned().collect();
    universe.sort();

    for record in rest {
        for name in record.keys() {
            if let Err(pos) = universe.binary_search_by(|p| p.as_str().cmp(name)) {
                universe.insert(pos, name.clone());
            }
        }
    }

    universe
}

/// Removes reserved bookkeeping names from the universe. Pure set
/// difference; relative order of the survivors is unchanged.
fn filter_reserved(universe: &mut Vec<String>) {
    let reserved: FxHashSet<&str> = RESERVED_PROPERTIES.iter().copied().collect();
    universe.retain(|name| !reserved.contains(name.as_str()));
}

// ============================================================================
// DIFFERENCE TEST
// ============================================================================

/// Whether a value counts as empty for the difference test.
///
/// Only JSON null and empty/whitespace-only strings are empty. Numeric
/// zero, boolean false, and empty arrays/objects are full; generalizing
/// to "falsy" would silently change behavior for numeric and boolean
/// properties.
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Decides whether a property's values differ across records.
///
/// - Some empty, some full: a difference.
/// - All full: record 1's value is compared against every other value
///   with structural equality, short-circuiting on the first mismatch.
///   Mismatched types (number vs. string) are simply unequal.
/// - All empty: never a difference; a row that is blank everywhere is
///   not informative.
fn is_difference(values: &[&Value]) -> bool {
    let null_count = values.iter().filter(|v| is_empty_value(v)).count();
    let full_count = values.len() - null_count;

    if null_count > 0 && full_count > 0 {
        return true;
    }

    if full_count == values.len() {
        let first = values[0];
        return values[1..].iter().any(|value| *value != first);
    }

    false
}

// ============================================================================
// ROW ITERATOR
// ============================================================================

/// Lazy sequence of output rows, in property-sorted order.
///
/// Finite and single-pass: each surviving property is visited once, and
/// the sequence is not restartable after consumption. The iterator owns
/// the collected records, so a downstream consumer may interleave its
/// own work with emission.
#[derive(Debug)]
pub struct TransposeRows {
    records: Vec<Record>,
    properties: std::vec::IntoIter<String>,
    difference_only: bool,
}

impl TransposeRows {
    /// Gathers the value of `property` from every record, in arrival
    /// order, substituting null where a record lacks it.
    fn gather<'a>(records: &'a [Record], property: &str) -> SmallVec<[&'a Value; 8]> {
        records
            .iter()
            .map(|record| record.get(property).unwrap_or(&NULL_VALUE))
            .collect()
    }
}

impl Iterator for TransposeRows {
    type Item = TransposeRow;

    fn next(&mut self) -> Option<TransposeRow> {
        loop {
            let property = self.properties.next()?;
            let values = Self::gather(&self.records, &property);

            if self.difference_only && !is_difference(&values) {
                continue;
            }

            return Some(build_row(&property, &values));
        }
    }
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Transposes a full record sequence in one call.
///
/// Equivalent to collecting everything into a [`TransposeEngine`] and
/// finalizing it; use the engine directly when records arrive in
/// batches.
pub fn transpose(
    records: impl IntoIterator<Item = Record>,
    definition: &TransposeDefinition,
) -> Result<TransposeRows, TransposeError> {
    let mut engine = TransposeEngine::new(*definition);
    engine.collect_many(records);
    engine.rows()
}
