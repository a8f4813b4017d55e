use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vectorlib::{AngleUnit, ArithmeticContext, Vector};

fn sample_pair(ctx: &ArithmeticContext) -> (Vector, Vector) {
    let v = Vector::with_context([3.009, -6.172, 3.692, -2.51], ctx.clone()).unwrap();
    let b = Vector::with_context([6.404, -9.144, 2.759, 8.718], ctx.clone()).unwrap();
    (v, b)
}

fn bench_magnitude(c: &mut Criterion) {
    let (v, _) = sample_pair(&ArithmeticContext::default());

    c.bench_function("magnitude 4D", |bencher| {
        bencher.iter(|| black_box(&v).magnitude())
    });
}

/// Projection at the default and at the widest supported precision.
fn bench_projection(c: &mut Criterion) {
    for precision in [30, 100] {
        let ctx = ArithmeticContext::new(precision).unwrap();
        let (v, b) = sample_pair(&ctx);

        c.bench_function(&format!("projection 4D @ {} digits", precision), |bencher| {
            bencher.iter(|| black_box(&v).projection(black_box(&b)).unwrap())
        });
    }
}

fn bench_angle(c: &mut Criterion) {
    let (v, b) = sample_pair(&ArithmeticContext::default());

    c.bench_function("angle 4D degrees", |bencher| {
        bencher.iter(|| {
            black_box(&v)
                .angle(black_box(&b), AngleUnit::Degrees)
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_magnitude, bench_projection, bench_angle);
criterion_main!(benches);
