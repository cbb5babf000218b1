use criterion::{criterion_group, criterion_main, Criterion};
use sheet_translations::config::ExportConfig;
use sheet_translations::table::{build_from_rows, Row};
use std::hint::black_box;

fn synthetic_rows(keys: usize, columns: usize) -> Vec<Row> {
    let mut rows: Vec<Row> = (0..4).map(|i| vec![format!("header {i}")]).collect();
    for k in 0..keys {
        let prefix = if k % 5 == 0 { "android." } else { "web." };
        let mut row = vec![format!("{prefix}key_{k}")];
        row.extend((1..columns).map(|c| format!("value {k} in column {c}")));
        rows.push(row);
    }
    rows
}

fn bench_build_table(c: &mut Criterion) {
    let config = ExportConfig::default();
    let rows = synthetic_rows(500, config.locale_order.required_width());

    c.bench_function("build_and_serialize_500_keys", |b| {
        b.iter(|| {
            let (table, _) = build_from_rows(
                black_box(rows.clone()),
                &config.locale_order,
                config.header_rows,
                &config.key_prefix,
            )
            .unwrap();
            black_box(table.to_json().unwrap())
        });
    });
}

criterion_group!(benches, bench_build_table);
criterion_main!(benches);
