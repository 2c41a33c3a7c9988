//! Migration registry benchmarks
//!
//! Registry construction runs once per process; lookups run on every
//! configuration usage, so those are the numbers that matter.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use usage_roles_core::{canonical, UsageAxis};
use usage_roles_migration::{difference, MigrationPath, MigrationRegistry, RETIRED};

fn bench_difference(c: &mut Criterion) {
    c.bench_function("difference_all_to_retired", |b| {
        b.iter(|| difference(black_box(&canonical::ALL), black_box(&RETIRED)).unwrap())
    });
}

fn bench_registry_build(c: &mut Criterion) {
    c.bench_function("registry_build", |b| b.iter(|| MigrationRegistry::new().unwrap()));
}

fn bench_check_usage(c: &mut Criterion) {
    let registry = MigrationRegistry::new().unwrap();
    let mut group = c.benchmark_group("check_usage");

    for path in MigrationPath::ALL {
        let role = registry.role(path).clone();
        group.bench_with_input(BenchmarkId::new("path", path), &role, |b, role| {
            b.iter(|| {
                for axis in UsageAxis::ALL {
                    black_box(registry.check_usage(role, axis));
                }
            })
        });
    }

    group.bench_function("canonical", |b| {
        b.iter(|| black_box(registry.check_usage(&canonical::ALL, UsageAxis::Consumption)))
    });

    group.finish();
}

criterion_group!(benches, bench_difference, bench_registry_build, bench_check_usage);
criterion_main!(benches);
