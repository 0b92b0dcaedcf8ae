//! Performance benchmarks for directory operations.
//!
//! These benchmarks measure the linear-scan store under different sizes:
//! - Sorted insert into a populated store
//! - Substring search across names and phones
//! - Full re-sort after edits scrambled the order

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use phone_directory::repositories::{ContactRepository, ContactStore};
use phone_directory::{DirectoryService, DirectoryServiceImpl};
use std::hint::black_box;

/// Build a store with `size` contacts named in reverse order.
fn populated_store(size: usize) -> ContactStore {
    let mut store = ContactStore::new();
    for i in (0..size).rev() {
        store.add(&format!("Contact {:06}", i), &format!("555-{:04}", i % 10_000));
    }
    store
}

/// Benchmark inserting one contact into stores of various sizes.
fn bench_sorted_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorted_insert");

    for size in [100, 1_000, 10_000] {
        let store = populated_store(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter_batched(
                || store.clone(),
                |mut store| {
                    store.add(black_box("Contact 000500x"), black_box("555-0000"));
                    store
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark substring search through the service (includes access tracking).
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [100, 1_000, 10_000] {
        let mut service = DirectoryServiceImpl::new(Box::new(populated_store(size)), 64);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| service.search(black_box("555-01")));
        });
    }

    group.finish();
}

/// Benchmark re-sorting a store whose order was scrambled by edits.
fn bench_resort(c: &mut Criterion) {
    let mut group = c.benchmark_group("resort");

    for size in [100, 1_000, 10_000] {
        let mut store = populated_store(size);
        for i in (0..size).step_by(3) {
            let name = format!("Contact {:06}", i);
            let _ = store.update(&name, &format!("Renamed {:06}", size - i), "0");
        }

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter_batched(
                || store.clone(),
                |mut store| {
                    store.sort_ascending_by_name();
                    store
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sorted_insert, bench_search, bench_resort);
criterion_main!(benches);
