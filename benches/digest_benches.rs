use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use libhash::{digest_of, HashFunction, Sha1, Sha256, Sha512};

fn make_message(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

fn bench_function<H: HashFunction>(c: &mut Criterion, name: &str) {
    let sizes = [64usize, 1024, 16_384, 262_144];
    let mut group = c.benchmark_group(name);
    for &size in &sizes {
        let message = make_message(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &message, |b, message| {
            b.iter(|| digest_of::<H>(message));
        });
    }
    group.finish();
}

fn bench_streaming(c: &mut Criterion) {
    // Many small updates, the shape a buffered reader produces.
    let chunk = make_message(4096);
    let mut group = c.benchmark_group("sha256_streaming");
    group.throughput(Throughput::Bytes((chunk.len() * 64) as u64));
    group.bench_function("64x4096", |b| {
        b.iter(|| {
            let mut hasher = Sha256::new();
            for _ in 0..64 {
                hasher.update(&chunk);
            }
            hasher.finalize()
        });
    });
    group.finish();
}

fn digest_benches(c: &mut Criterion) {
    bench_function::<Sha1>(c, "sha1");
    bench_function::<Sha256>(c, "sha256");
    bench_function::<Sha512>(c, "sha512");
    bench_streaming(c);
}

criterion_group!(benches, digest_benches);
criterion_main!(benches);
