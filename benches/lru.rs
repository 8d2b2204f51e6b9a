use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use lrukit::LruCache;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const CAPACITY: usize = 1024;

fn filled(capacity: usize) -> LruCache<u64, u64> {
    let mut cache = LruCache::new(capacity).unwrap();
    for i in 0..capacity as u64 {
        cache.insert(i, i);
    }
    cache
}

fn bench_lru_insert_get(c: &mut Criterion) {
    c.bench_function("lru_insert_get", |b| {
        b.iter_batched(
            || filled(CAPACITY),
            |mut cache| {
                for i in 0..CAPACITY as u64 {
                    cache.insert(std::hint::black_box(i + 10_000), i);
                    let _ = std::hint::black_box(cache.get(&std::hint::black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lru_eviction_churn(c: &mut Criterion) {
    c.bench_function("lru_eviction_churn", |b| {
        b.iter_batched(
            || filled(CAPACITY),
            |mut cache| {
                for i in 0..4 * CAPACITY as u64 {
                    cache.insert(std::hint::black_box(10_000 + i), i);
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lru_get_hotset(c: &mut Criterion) {
    c.bench_function("lru_get_hotset", |b| {
        b.iter_batched(
            || (filled(CAPACITY), SmallRng::seed_from_u64(42)),
            |(mut cache, mut rng)| {
                let hot = (CAPACITY / 10) as u64;
                for _ in 0..CAPACITY {
                    // 90% of reads hit the hottest 10% of keys
                    let key = if rng.random::<f64>() < 0.9 {
                        rng.random::<u64>() % hot
                    } else {
                        rng.random::<u64>() % (2 * CAPACITY as u64)
                    };
                    if cache.get(&key).is_none() {
                        cache.insert(key, key);
                    }
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lru_contains(c: &mut Criterion) {
    let cache = filled(CAPACITY);
    c.bench_function("lru_contains", |b| {
        b.iter(|| {
            for i in 0..2 * CAPACITY as u64 {
                let _ = std::hint::black_box(cache.contains(&std::hint::black_box(i)));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_lru_insert_get,
    bench_lru_eviction_churn,
    bench_lru_get_hotset,
    bench_lru_contains
);
criterion_main!(benches);
