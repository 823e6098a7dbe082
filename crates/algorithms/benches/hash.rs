//! Throughput of the hash functions over a few message sizes

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use cryptolab_algorithms::hash::{HashFunction, Sha1, Streebog256, Streebog512};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const SIZES: [usize; 4] = [16, 64, 1024, 16384];

fn bench_one<H: HashFunction>(c: &mut Criterion, group_name: &str) {
    let mut group = c.benchmark_group(group_name);
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for size in SIZES {
        let mut data = vec![0u8; size];
        rng.fill(&mut data[..]);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| H::digest(black_box(data)).unwrap());
        });
    }

    group.finish();
}

fn bench_sha1(c: &mut Criterion) {
    bench_one::<Sha1>(c, "sha1");
}

fn bench_streebog(c: &mut Criterion) {
    bench_one::<Streebog256>(c, "streebog256");
    bench_one::<Streebog512>(c, "streebog512");
}

fn bench_streaming(c: &mut Criterion) {
    let data = vec![0x5au8; 4096];
    c.bench_function("streebog512_streaming_64b_chunks", |b| {
        b.iter(|| {
            let mut h = Streebog512::new();
            for chunk in data.chunks(64) {
                h.update(black_box(chunk)).unwrap();
            }
            h.finalize().unwrap()
        });
    });
}

criterion_group!(benches, bench_sha1, bench_streebog, bench_streaming);
criterion_main!(benches);
