use criterion::{black_box, Criterion, criterion_group, criterion_main};
use faer::Mat;
use linalg_core::{Matrix, Vector};

fn bench_products(c: &mut Criterion) {
    let n = 64;
    let a = Matrix::from_grid(
        (0..n)
            .map(|i| (0..n).map(|j| ((i * n + j) as f64).sin()).collect())
            .collect(),
    )
    .unwrap();
    let v: Vector = (0..n).map(|i| (i as f64).cos()).collect();
    let fa = Mat::<f64>::from(&a);

    c.bench_function("matrix product", |ben| {
        ben.iter(|| a.dot(black_box(&a)).unwrap())
    });

    c.bench_function("apply to vector", |ben| {
        ben.iter(|| a.apply_to_vector(black_box(&v)).unwrap())
    });

    c.bench_function("faer raw product", |ben| {
        ben.iter(|| black_box(&fa) * black_box(&fa))
    });
}

criterion_group!(benches, bench_products);
criterion_main!(benches);
