//! Criterion benchmarks for the O(n²) chord search and duplicate grouping.
//! Focus sizes: n in {10, 50, 100, 200}.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use trichord::api::{
    draw_grid_points, draw_triangle, find_longest_chord, group_duplicates, Bounds2, GridCfg,
    ReplayToken,
};

fn bench_chord(c: &mut Criterion) {
    let bounds = Bounds2::default();
    let grid = GridCfg::default();
    let Ok(triangle) = draw_triangle(grid, bounds, ReplayToken::new(43, 0)) else {
        return;
    };
    let mut group = c.benchmark_group("chord");
    for &n in &[10usize, 50, 100, 200] {
        group.bench_with_input(BenchmarkId::new("find_longest_chord", n), &n, |b, &n| {
            b.iter_batched(
                || draw_grid_points(n, grid, bounds, ReplayToken::new(44, n as u64)).unwrap(),
                |pts| {
                    let _res = find_longest_chord(&triangle, &pts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("group_duplicates", n), &n, |b, &n| {
            b.iter_batched(
                || draw_grid_points(n, grid, bounds, ReplayToken::new(45, n as u64)).unwrap(),
                |pts| {
                    let _g = group_duplicates(&pts);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_chord);
criterion_main!(benches);
