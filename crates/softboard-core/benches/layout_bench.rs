//! Criterion benchmarks for layout table construction and key lookup.
//!
//! Run with:
//! ```bash
//! cargo bench --package softboard-core --bench layout_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use softboard_core::{layouts, Screen};

fn bench_table_construction(c: &mut Criterion) {
    c.bench_function("layout_standard_build", |b| {
        b.iter(|| black_box(layouts::standard()))
    });
}

fn bench_key_lookup(c: &mut Criterion) {
    let table = layouts::standard();

    c.bench_function("layout_key_lookup_hit", |b| {
        b.iter(|| table.key(Screen::Primary, black_box("m")))
    });

    c.bench_function("layout_key_lookup_miss", |b| {
        b.iter(|| table.key(Screen::Primary, black_box("zzz")))
    });

    c.bench_function("layout_rows", |b| {
        b.iter(|| table.rows(black_box(Screen::Secondary)))
    });
}

criterion_group!(benches, bench_table_construction, bench_key_lookup);
criterion_main!(benches);
