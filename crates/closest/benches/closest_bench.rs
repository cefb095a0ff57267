//! Criterion benchmarks: divide and conquer vs the brute-force oracle.
//! Sizes: n in {100, 1000, 10000} (brute force only up to 1000).
//! Results live under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use closest::api::{brute_force, closest_pair, lattice_points, uniform_points, Rect, ReplayToken};

fn bench_closest(c: &mut Criterion) {
    let mut group = c.benchmark_group("closest");
    for &n in &[100usize, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("divide_conquer", n), &n, |b, &n| {
            b.iter_batched(
                || uniform_points(n, Rect::default(), ReplayToken::new(42, n as u64)),
                |pts| {
                    let _pair = closest_pair(&pts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("divide_conquer_lattice", n), &n, |b, &n| {
            b.iter_batched(
                || lattice_points(n, 100, ReplayToken::new(43, n as u64)),
                |pts| {
                    let _pair = closest_pair(&pts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        if n <= 1000 {
            group.bench_with_input(BenchmarkId::new("brute_force", n), &n, |b, &n| {
                b.iter_batched(
                    || uniform_points(n, Rect::default(), ReplayToken::new(42, n as u64)),
                    |pts| {
                        let _pair = brute_force(&pts, 0, pts.len() - 1).unwrap();
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_closest);
criterion_main!(benches);
