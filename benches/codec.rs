use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};

const BLOCK: usize = 64 * 1024;

fn inputs() -> Vec<(&'static str, Vec<u8>)> {
    let mut rng = StdRng::seed_from_u64(42);
    let text = "the quick brown fox jumps over the lazy dog\n"
        .repeat(BLOCK / 44 + 1).into_bytes();

    vec![
        ("zeros", vec![0u8; BLOCK]),
        ("text", text[..BLOCK].to_vec()),
        ("random", (0..BLOCK).map(|_| rng.gen()).collect()),
    ]
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");
    for (name, data) in inputs() {
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
            let mut out = vec![0u8; data.len() + 4096];
            b.iter(|| fpaq0f2::compress(black_box(data), &mut out).unwrap());
        });
    }
    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompress");
    for (name, data) in inputs() {
        let mut comp = vec![0u8; data.len() + 4096];
        let size = fpaq0f2::compress(&data, &mut comp).unwrap();
        comp.truncate(size);

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &comp, |b, comp| {
            let mut out = vec![0u8; BLOCK];
            b.iter(|| fpaq0f2::decompress(black_box(comp), &mut out).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compress, bench_decompress);
criterion_main!(benches);
