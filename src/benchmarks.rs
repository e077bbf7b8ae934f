extern crate rand;
extern crate rand_chacha;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use decimal_karatsuba::karatsuba::{karatsuba_mul, multiply};
use decimal_karatsuba::schoolbook_mul::schoolbook_mul;
use decimal_karatsuba::{Digit, DigitSequence};
use rand::{Rng, SeedableRng};

fn random_digits(rng: &mut rand_chacha::ChaCha8Rng, size: usize) -> DigitSequence {
    let digits = (0..size)
        .map(|_| Digit::new(rng.gen_range(0, 10)).unwrap())
        .collect();
    DigitSequence::from_digits(digits)
}
fn bench_schoolbook_mul(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_digits(&mut rng, 256);
    let b = random_digits(&mut rng, 256);
    c.bench_function("schoolbook_mul_256", |bench| {
        bench.iter(|| schoolbook_mul(black_box(&a), black_box(&b)))
    });
}
fn bench_karatsuba_mul(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_digits(&mut rng, 256);
    let b = random_digits(&mut rng, 256);
    c.bench_function("karatsuba_mul_256", |bench| {
        bench.iter(|| karatsuba_mul(black_box(&a), black_box(&b)))
    });
}
fn bench_karatsuba_mul_1k(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_digits(&mut rng, 1024);
    let b = random_digits(&mut rng, 1024);
    c.bench_function("karatsuba_mul_1k", |bench| {
        bench.iter(|| karatsuba_mul(black_box(&a), black_box(&b)))
    });
}
fn bench_multiply_padded(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_digits(&mut rng, 300);
    let b = random_digits(&mut rng, 200);
    c.bench_function("multiply_300x200", |bench| {
        bench.iter(|| multiply(black_box(&a), black_box(&b)))
    });
}

fn configured() -> Criterion {
    Criterion::default().sample_size(20)
}

criterion_group!(
    name = benches;
    config = configured();
    targets =
        bench_schoolbook_mul,
        bench_karatsuba_mul,
        bench_karatsuba_mul_1k,
        bench_multiply_padded,
);
criterion_main!(benches);
