use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use zq::{NttPoly, Poly, RandomPoly, N, Q};

fn bench_forward(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = Poly::random(&mut rng);

    c.bench_function("ntt_forward", |bencher| {
        bencher.iter(|| black_box(black_box(&a).ntt()))
    });
}

fn bench_inverse_transform(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = NttPoly::random(&mut rng);

    c.bench_function("ntt_inverse", |bencher| {
        bencher.iter(|| black_box(black_box(&a).intt()))
    });
}

fn bench_pointwise_inverse(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let slots: Vec<u16> = (0..N).map(|_| rng.random_range(1..Q as u16)).collect();
    let h = NttPoly::from_coeffs(&slots).expect("canonical");

    c.bench_function("pointwise_inverse", |bencher| {
        bencher.iter(|| {
            let inv = black_box(&h).inverse().expect("invertible");
            black_box(inv);
        })
    });
}

fn bench_ring_mul(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = Poly::random(&mut rng);
    let b = Poly::random(&mut rng);

    c.bench_function("ring_mul", |bencher| {
        bencher.iter(|| black_box(black_box(&a) * black_box(&b)))
    });
}

criterion_group!(
    benches,
    bench_forward,
    bench_inverse_transform,
    bench_pointwise_inverse,
    bench_ring_mul
);
criterion_main!(benches);
