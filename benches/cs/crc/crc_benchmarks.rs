use checksum_algos::crc::{self, Crc16Model, Crc32Model, Crc8Model};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const SIZES: [usize; 4] = [64, 1024, 16384, 262144];

fn payload(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i * 31 + 7) as u8).collect()
}

fn bench_crc16_modbus(c: &mut Criterion) {
    let mut group = c.benchmark_group("crc16/modbus");

    for size in SIZES {
        let data = payload(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("bitwise", size), &data, |b, data| {
            b.iter(|| crc::compute_mirror(Crc16Model::Modbus, black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("table", size), &data, |b, data| {
            b.iter(|| crc::compute_table(Crc16Model::Modbus, black_box(data)))
        });
    }

    group.finish();
}

fn bench_crc32(c: &mut Criterion) {
    let mut group = c.benchmark_group("crc32");

    for size in SIZES {
        let data = payload(size);
        group.throughput(Throughput::Bytes(size as u64));

        for model in [Crc32Model::Crc32, Crc32Model::Mpeg2] {
            group.bench_with_input(
                BenchmarkId::new(format!("{model}/table"), size),
                &data,
                |b, data| b.iter(|| crc::compute_table(model, black_box(data))),
            );
        }
    }

    group.finish();
}

fn bench_crc8_append(c: &mut Criterion) {
    let mut packet = payload(1025);

    c.bench_function("crc8/maxim/append_verify", |b| {
        b.iter(|| {
            crc::append_with_table(Crc8Model::Maxim, black_box(&mut packet)).unwrap();
            crc::verify_with_table(Crc8Model::Maxim, black_box(&packet)).unwrap()
        })
    });
}

criterion_group!(benches, bench_crc16_modbus, bench_crc32, bench_crc8_append);
criterion_main!(benches);
