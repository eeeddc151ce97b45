// benches/pack.rs

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use symbol_pack::{BitPacker, PackerConfig, SanitizePolicy, SymbolReader, pack};

fn create_symbols(size: usize, bits: u32) -> Vec<u32> {
    let mask = (1u32 << bits) - 1;
    (0..size as u32).map(|i| i.wrapping_mul(2_654_435_761) & mask).collect()
}

fn bench_push(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("push");
    for bits in [5, 6, 12] {
        for &size in &sizes {
            let symbols = create_symbols(size, bits);
            let config = PackerConfig::new(bits, SanitizePolicy::Wrap).with_flush_on_finish(true);

            group.bench_with_input(
                BenchmarkId::new(format!("w{}", bits), size),
                &symbols,
                |b, symbols| {
                    b.iter(|| pack(config, symbols.iter().copied()).unwrap());
                },
            );
        }
    }
    group.finish();
}

fn bench_push_raw(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("push_raw");
    for size in sizes {
        // 1..=70, so the skip policy drops some
        let raws: Vec<u32> = (0..size as u32).map(|i| i % 70 + 1).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &raws, |b, raws| {
            b.iter(|| {
                let mut packer = BitPacker::new(PackerConfig::skip6()).unwrap();
                for &r in raws {
                    black_box(packer.push_raw(r).unwrap());
                }
                packer.into_sink()
            });
        });
    }
    group.finish();
}

fn bench_read(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("read");
    for size in sizes {
        let config = PackerConfig::skip6().with_flush_on_finish(true);
        let bytes = pack(config, create_symbols(size, 6)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &bytes, |b, bytes| {
            b.iter(|| {
                let sum: u64 = SymbolReader::new(bytes, 6)
                    .unwrap()
                    .map(|s| black_box(s) as u64)
                    .sum();
                sum
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_push, bench_push_raw, bench_read);
criterion_main!(benches);
