use bigfloat::{FBig, Rounding};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const PRECISION: usize = 50;

fn sample() -> FBig {
    FBig::from_str_with("1.2345678901234567", PRECISION, Rounding::Nearest)
}

fn bench_sqrt(c: &mut Criterion) {
    let x = sample();
    c.bench_function("sqrt", |b| b.iter(|| black_box(&x).sqrt()));
}

fn bench_ln(c: &mut Criterion) {
    let x = sample();
    c.bench_function("ln", |b| b.iter(|| black_box(&x).ln()));
}

fn bench_exp(c: &mut Criterion) {
    let x = sample();
    c.bench_function("exp", |b| b.iter(|| black_box(&x).exp()));
}

fn bench_sin(c: &mut Criterion) {
    let x = sample();
    c.bench_function("sin", |b| b.iter(|| black_box(&x).sin()));
}

fn bench_cos(c: &mut Criterion) {
    let x = sample();
    c.bench_function("cos", |b| b.iter(|| black_box(&x).cos()));
}

fn bench_atan(c: &mut Criterion) {
    let x = sample();
    c.bench_function("atan", |b| b.iter(|| black_box(&x).atan()));
}

fn bench_pow(c: &mut Criterion) {
    let x = sample();
    let y = FBig::from_str_with("2.5", PRECISION, Rounding::Nearest);
    c.bench_function("pow", |b| b.iter(|| black_box(&x).pow(black_box(&y))));
}

fn bench_pi_const(c: &mut Criterion) {
    c.bench_function("pi_const_100", |b| {
        b.iter(|| FBig::pi_const(black_box(100), Rounding::Nearest))
    });
}

fn bench_e_const(c: &mut Criterion) {
    c.bench_function("e_const_100", |b| {
        b.iter(|| FBig::e_const(black_box(100), Rounding::Nearest))
    });
}

criterion_group!(
    benches,
    bench_sqrt,
    bench_ln,
    bench_exp,
    bench_sin,
    bench_cos,
    bench_atan,
    bench_pow,
    bench_pi_const,
    bench_e_const,
);
criterion_main!(benches);
