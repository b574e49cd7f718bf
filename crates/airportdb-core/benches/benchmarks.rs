use airportdb_core::{build_index, filter, Airport, AirportDb, AirportSearch, SearchConfig};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// A few thousand synthetic airports, roughly the size of a real world list.
fn synthetic(n: usize) -> Vec<Airport> {
    (0..n)
        .map(|i| {
            Airport::new(
                format!("A{:02}", i % 100),
                format!("Airport Number {i} International"),
                format!("City {}", i % 700),
                format!("Country {}", i % 200),
            )
        })
        .collect()
}

fn bench_index(c: &mut Criterion) {
    let airports = synthetic(5_000);
    c.bench_function("build_index 5k", |b| b.iter(|| build_index(black_box(&airports))));
}

fn bench_filter(c: &mut Criterion) {
    let airports = synthetic(5_000);
    let index = build_index(&airports);
    c.bench_function("filter 5k composite", |b| {
        b.iter(|| filter(black_box(Some("city 42")), &airports, &index))
    });

    let per_field = AirportDb::with_config(airports, SearchConfig::default().per_field());
    c.bench_function("search 5k per-field", |b| {
        b.iter(|| per_field.count_matches(black_box(Some("country 7"))))
    });
}

criterion_group!(benches, bench_index, bench_filter);
criterion_main!(benches);
