//! Matrix construction benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use crcgen::{build_matrices, Polynomial};

fn benchmark_build_matrices(c: &mut Criterion) {
    let crc32 = Polynomial::from_int(32, 0x04C1_1DB7).expect("CRC32 polynomial");
    let mut group = c.benchmark_group("build_matrices_crc32");

    for width in [8usize, 32, 64, 128] {
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, &width| {
            b.iter(|| build_matrices(black_box(&crc32), black_box(width), true));
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_build_matrices);
criterion_main!(benches);
