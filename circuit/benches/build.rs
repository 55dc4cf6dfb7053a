use circuit::{build, CircuitInput, NttPoly, N, Q};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use zq::{random_short, Poly, RandomPoly};

fn request(rng: &mut StdRng) -> (Vec<i16>, Vec<i16>, Vec<i16>) {
    let slots: Vec<u16> = (0..N).map(|_| rng.random_range(1..Q as u16)).collect();
    let h = NttPoly::from_coeffs(&slots).expect("canonical").intt();
    let s1 = random_short(rng, 2000);
    let h2p = Poly::random(rng);
    (
        s1.coeffs().to_vec(),
        h.coeffs().to_vec(),
        h2p.coeffs().to_vec(),
    )
}

fn bench_build(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let (s1, h, h2p) = request(&mut rng);

    c.bench_function("circuit_input_build", |bencher| {
        bencher.iter(|| {
            let input = build(black_box(&s1), black_box(&h), black_box(&h2p), "1", "2")
                .expect("build");
            black_box(input);
        })
    });
}

fn bench_check_consistency(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let (s1, h, h2p) = request(&mut rng);
    let input = build(&s1, &h, &h2p, "1", "2").expect("build");
    let json = input.to_json().expect("serialize");

    c.bench_function("circuit_input_load_and_check", |bencher| {
        bencher.iter(|| {
            let loaded = CircuitInput::from_json(black_box(&json)).expect("load");
            loaded.check_consistency().expect("consistent");
            black_box(loaded);
        })
    });
}

criterion_group!(benches, bench_build, bench_check_consistency);
criterion_main!(benches);
