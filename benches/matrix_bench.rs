use criterion::{black_box, criterion_group, criterion_main, Criterion};
use densemat::{Float, Matrix};

/// A diagonally dominant (hence invertible) test matrix
fn dominant(n: usize) -> Matrix {
    let data: Vec<Float> = (0..n * n)
        .map(|i| if i % (n + 1) == 0 { 12.0 } else { 0.25 })
        .collect();
    Matrix::from_data(n, n, data).unwrap()
}

pub fn add_into(c: &mut Criterion) {
    let ncols = 25;
    let nrows = 25;
    let this = black_box(Matrix::new(1.23123, nrows, ncols).unwrap());
    let other = black_box(Matrix::new(1.23123, nrows, ncols).unwrap());
    let mut into = black_box(Matrix::new(1.23123, nrows, ncols).unwrap());

    c.bench_function("add_into", |b| b.iter(|| this.add_into(&other, &mut into)));
}

pub fn sub_into(c: &mut Criterion) {
    let ncols = 25;
    let nrows = 25;
    let this = black_box(Matrix::new(1.23123, nrows, ncols).unwrap());
    let other = black_box(Matrix::new(1.23123, nrows, ncols).unwrap());
    let mut into = black_box(Matrix::new(1.23123, nrows, ncols).unwrap());

    c.bench_function("sub_into", |b| b.iter(|| this.sub_into(&other, &mut into)));
}

pub fn scale_into(c: &mut Criterion) {
    let ncols = 25;
    let nrows = 25;
    let this = black_box(Matrix::new(1.23123, nrows, ncols).unwrap());
    let mut into = black_box(Matrix::new(1.23123, nrows, ncols).unwrap());

    c.bench_function("scale_into", |b| {
        b.iter(|| this.scale_into(black_box(22.0), &mut into))
    });
}

pub fn prod_into(c: &mut Criterion) {
    let ncols = 30;
    let nrows = 30;
    let this = black_box(Matrix::new(1.23123, nrows, ncols).unwrap());
    let other = black_box(Matrix::new(1.23123, nrows, ncols).unwrap());
    let mut into = black_box(Matrix::new(1.23123, nrows, ncols).unwrap());

    c.bench_function("prod_into", |b| b.iter(|| this.prod_into(&other, &mut into)));
}

pub fn determinant(c: &mut Criterion) {
    let this = black_box(dominant(30));

    c.bench_function("determinant", |b| b.iter(|| this.determinant()));
}

pub fn inverse(c: &mut Criterion) {
    let this = black_box(dominant(30));

    c.bench_function("inverse", |b| b.iter(|| this.inverse()));
}

criterion_group!(
    benches,
    add_into,
    sub_into,
    scale_into,
    prod_into,
    determinant,
    inverse,
);
criterion_main!(benches);
