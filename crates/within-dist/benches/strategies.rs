use criterion::*;
use ndarray::Array2;
use rand::prelude::*;

use within_dist::{query, Strategy};

fn random_distmat(nrows: usize, ncols: usize, seed: u64) -> Array2<f32> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    Array2::from_shape_fn((nrows, ncols), |_| rng.gen_range(0.0..1.0))
}

fn strategies(c: &mut Criterion) {
    let (nrows, dist) = (64, 0.05_f32);

    let mut group = c.benchmark_group("Strategies");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for d in 2..=5 {
        let ncols = 10_u32.pow(d) as usize;
        let distmat = random_distmat(nrows, ncols, d as u64);
        let rows = query::to_rows(&[1.0, 9.0, 17.0, 33.0, 64.0], distmat.dim()).unwrap_or_default();

        for &strategy in Strategy::variants() {
            let id = BenchmarkId::new(strategy.name(), ncols);
            group.bench_with_input(id, &ncols, |b, _| {
                b.iter_with_large_drop(|| black_box(strategy.scan(distmat.view(), &rows, dist)))
            });
        }

        let col_major = distmat.t().as_standard_layout().reversed_axes();
        for &strategy in Strategy::variants() {
            let id = BenchmarkId::new(format!("{}-col-major", strategy.name()), ncols);
            group.bench_with_input(id, &ncols, |b, _| {
                b.iter_with_large_drop(|| black_box(strategy.scan(col_major.view(), &rows, dist)))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, strategies);
criterion_main!(benches);
