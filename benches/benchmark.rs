//! Benchmarks for Vigtool cipher and search operations.
//!
//! Measures transform throughput, raw keyspace enumeration, and full
//! brute-force searches at increasing key lengths to show the 26^L
//! growth of the search cost.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use vigtool::search::search;
use vigtool::{encrypt, transform, Direction, Key, KeySpace};

/// A paragraph-sized plaintext with pass-through characters mixed in.
const BENCH_TEXT: &str = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG, \
    WHILE 42 SENTRIES WATCH THE OLD BRIDGE AT DAWN. PACK MY BOX WITH \
    FIVE DOZEN LIQUOR JUGS BEFORE THE SIGNAL FIRES ARE LIT!";

const BENCH_KEY: &str = "LEMON";

/// Benchmarks the transform over a paragraph of mixed text.
fn bench_transform(c: &mut Criterion) {
    let key = Key::new(BENCH_KEY).unwrap();

    let mut group = c.benchmark_group("transform");
    group.throughput(Throughput::Bytes(BENCH_TEXT.len() as u64));

    group.bench_function("encrypt", |b| {
        b.iter(|| transform(black_box(BENCH_TEXT), &key, Direction::Encrypt));
    });

    let ciphertext = encrypt(BENCH_TEXT, &key);
    group.bench_function("decrypt", |b| {
        b.iter(|| transform(black_box(&ciphertext), &key, Direction::Decrypt));
    });

    group.finish();
}

/// Benchmarks raw keyspace enumeration without any decryption, isolating
/// the odometer cost from the transform cost inside a search.
fn bench_keyspace_enumeration(c: &mut Criterion) {
    let space = KeySpace::new(3).unwrap();

    c.bench_function("keyspace_enumerate_len3", |b| {
        b.iter(|| {
            let count = space.iter().count();
            black_box(count)
        });
    });
}

/// Benchmarks full searches that must exhaust the space, across key
/// lengths 1-3, showing the exponential growth of the dominant cost.
fn bench_search_exhaustion_scaling(c: &mut Criterion) {
    let key = Key::new("KEY").unwrap();
    let ciphertext = encrypt("HELLO WORLD", &key);

    let mut group = c.benchmark_group("search_exhaustion");
    group.sample_size(10);

    for key_length in [1usize, 2, 3] {
        group.bench_with_input(
            BenchmarkId::from_parameter(key_length),
            &key_length,
            |b, &len| {
                b.iter(|| search(black_box(&ciphertext), "IMPOSSIBLEWORD", len).unwrap());
            },
        );
    }

    group.finish();
}

/// Benchmarks a successful search that terminates mid-space.
fn bench_search_early_exit(c: &mut Criterion) {
    let key = Key::new("KEY").unwrap();
    let ciphertext = encrypt("HELLO WORLD", &key);

    c.bench_function("search_found_len3", |b| {
        b.iter(|| search(black_box(&ciphertext), "HELLO", 3).unwrap());
    });
}

criterion_group!(
    benches,
    bench_transform,
    bench_keyspace_enumeration,
    bench_search_exhaustion_scaling,
    bench_search_early_exit,
);
criterion_main!(benches);
