use checksum_algos::md5::{md5_digest, Md5};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_md5(c: &mut Criterion) {
    let mut group = c.benchmark_group("md5");

    for size in [64usize, 1024, 65536] {
        let data = vec![0xA5u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("one_shot", size), &data, |b, data| {
            b.iter(|| md5_digest(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("streamed_100", size), &data, |b, data| {
            b.iter(|| {
                let mut hasher = Md5::new();
                for chunk in data.chunks(100) {
                    hasher.update(black_box(chunk));
                }
                hasher.finalize()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_md5);
criterion_main!(benches);
