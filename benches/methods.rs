use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use envcalc::{interp, ode, quad};

const HOURS: [f64; 5] = [6.0, 8.0, 12.0, 16.0, 20.0];
const PPM: [f64; 5] = [45.0, 52.0, 65.0, 70.0, 58.0];

const DEPTH: [f64; 7] = [0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0];
const VELOCITY: [f64; 7] = [0.0, 0.8, 1.2, 1.5, 1.3, 0.9, 0.0];

// ---------------------------------------------------------------------------
// Interpolation: one query against the 5-point contaminant series
// ---------------------------------------------------------------------------

fn interp_query(c: &mut Criterion) {
    let mut g = c.benchmark_group("interp_query");

    g.bench_function("lagrange", |b| {
        b.iter(|| interp::lagrange(black_box(10.0), &HOURS, &PPM))
    });
    g.bench_function("newton", |b| {
        b.iter(|| interp::newton(black_box(10.0), &HOURS, &PPM))
    });
    g.bench_function("piecewise_linear", |b| {
        b.iter(|| interp::piecewise_linear(black_box(10.0), &HOURS, &PPM))
    });

    g.finish();
}

fn newton_precomputed(c: &mut Criterion) {
    let mut g = c.benchmark_group("newton_precomputed");

    g.bench_function("coefficients", |b| {
        b.iter(|| interp::newton_coefficients(black_box(&HOURS), &PPM))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// ODE: full decay trajectory, 60 steps
// ---------------------------------------------------------------------------

fn decay_trajectory(c: &mut Criterion) {
    let mut g = c.benchmark_group("decay_trajectory");

    g.bench_function("euler", |b| {
        b.iter(|| ode::euler(black_box(0.2), 100.0, 0.05, 3.0))
    });
    g.bench_function("heun", |b| {
        b.iter(|| ode::heun(black_box(0.2), 100.0, 0.05, 3.0))
    });
    g.bench_function("rk4", |b| {
        b.iter(|| ode::rk4(black_box(0.2), 100.0, 0.05, 3.0))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Quadrature: 7-sample river profile
// ---------------------------------------------------------------------------

fn river_quadrature(c: &mut Criterion) {
    let mut g = c.benchmark_group("river_quadrature");

    g.bench_function("trapezoid", |b| {
        b.iter(|| quad::trapezoid(black_box(&VELOCITY), &DEPTH, 10.0))
    });
    g.bench_function("simpson13", |b| {
        b.iter(|| quad::simpson13(black_box(&VELOCITY), &DEPTH, 10.0))
    });
    g.bench_function("simpson38", |b| {
        b.iter(|| quad::simpson38(black_box(&VELOCITY), &DEPTH, 10.0))
    });

    g.finish();
}

criterion_group!(
    benches,
    interp_query,
    newton_precomputed,
    decay_trajectory,
    river_quadrature
);
criterion_main!(benches);
