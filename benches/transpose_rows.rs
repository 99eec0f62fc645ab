//! FILENAME: benches/transpose_rows.rs
//! Benchmarks for the transpose engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::{json, Value};
use transpose_engine::{transpose, Record, TransposeDefinition};

/// Builds `count` records with overlapping but not identical property
/// sets, the shape heterogeneous sources typically produce.
fn sample_records(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            let mut record = json!({
                "Name": format!("item-{}", i),
                "Size": i as u64,
                "Shared": "constant",
            })
            .as_object()
            .unwrap()
            .clone();
            if i % 3 == 0 {
                record.insert("Owner".to_string(), json!("root"));
            }
            if i % 7 == 0 {
                record.insert(format!("Extra_{}", i % 21), Value::Null);
            }
            record
        })
        .collect()
}

fn bench_transpose(c: &mut Criterion) {
    let records = sample_records(1000);

    c.bench_function("transpose_1000_records", |b| {
        b.iter(|| {
            let rows = transpose(
                black_box(records.clone()),
                &TransposeDefinition::new(false),
            )
            .unwrap();
            black_box(rows.count())
        })
    });

    c.bench_function("transpose_1000_records_difference_only", |b| {
        b.iter(|| {
            let rows = transpose(
                black_box(records.clone()),
                &TransposeDefinition::new(true),
            )
            .unwrap();
            black_box(rows.count())
        })
    });
}

criterion_group!(benches, bench_transpose);
criterion_main!(benches);
