use criterion::{black_box, criterion_group, criterion_main, Criterion};
use matula_ion::algebra::{IonLayerEngine, Tree};
use matula_ion::matula::{decode, encode};
use matula_ion::PrimeOracle;

fn bench_round_trip(c: &mut Criterion) {
    let mut oracle = PrimeOracle::new();
    oracle.primes_up_to(100_000);

    c.bench_function("encode_decode_1_to_1000", |b| {
        b.iter(|| {
            for n in 1..=1_000u64 {
                let tree = encode(black_box(n), &mut oracle);
                black_box(decode(&tree, &mut oracle).ok());
            }
        })
    });
}

fn bench_nth_prime(c: &mut Criterion) {
    c.bench_function("nth_prime_10000_cold", |b| {
        b.iter(|| {
            let mut oracle = PrimeOracle::new();
            black_box(oracle.nth_prime(black_box(10_000)).ok())
        })
    });
}

fn bench_ion_layers(c: &mut Criterion) {
    c.bench_function("ion_layers_to_order_8", |b| {
        b.iter(|| {
            let mut oracle = PrimeOracle::new();
            let mut engine = IonLayerEngine::new();
            black_box(engine.layers(black_box(8), &mut oracle).ok())
        })
    });
}

fn bench_tree_enumeration(c: &mut Criterion) {
    c.bench_function("trees_of_size_9", |b| {
        b.iter(|| black_box(Tree::trees_of_size(black_box(9)).len()))
    });
}

criterion_group!(
    benches,
    bench_round_trip,
    bench_nth_prime,
    bench_ion_layers,
    bench_tree_enumeration
);
criterion_main!(benches);
