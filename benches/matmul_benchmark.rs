use criterion::{Criterion, criterion_group, criterion_main};
use ndarray::Array2;
use rand::{SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, StandardNormal};
use std::hint::black_box;

use posit8_engine::{Posit8, matrix};

const SIZE: usize = 32;

fn generate_matrix(seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    Array2::from_shape_simple_fn((SIZE, SIZE), || {
        let value: f64 = StandardNormal.sample(&mut rng);
        0.1 * value
    })
}

macro_rules! create_benchmark_for_type {
    ($c:expr, $type_name:ident, $convert:expr) => {
        let mut group = $c.benchmark_group(stringify!($type_name));
        group.sample_size(25);

        let a = generate_matrix(69).mapv($convert);
        let b = generate_matrix(42).mapv($convert);

        group.bench_function("matmul_32", |bench| {
            bench.iter(|| {
                let product = matrix::matmul(&a.view(), &b.view());
                black_box(product)
            })
        });
        group.finish();
    };
}

fn benchmark_matmul_types(c: &mut Criterion) {
    create_benchmark_for_type!(c, f64, |x: f64| x);
    create_benchmark_for_type!(c, f32, |x: f64| x as f32);
    create_benchmark_for_type!(c, Posit8, Posit8::from);
}

fn benchmark_scalar_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("Posit8_scalar");
    let a = Posit8::from(1.5_f64);
    let b = Posit8::from(-0.375_f64);

    group.bench_function("add", |bench| bench.iter(|| black_box(a) + black_box(b)));
    group.bench_function("mul", |bench| bench.iter(|| black_box(a) * black_box(b)));
    group.bench_function("div", |bench| bench.iter(|| black_box(a) / black_box(b)));
    group.finish();
}

criterion_group!(benches, benchmark_matmul_types, benchmark_scalar_ops);
criterion_main!(benches);
