//! Hash and HMAC throughput benchmarks

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use hashes::{HashAlgorithm, HashContext, HmacContext};

fn bench_hashes(c: &mut Criterion) {
    let data = [0x5au8; 4096];
    let mut group = c.benchmark_group("hash 4 KiB");
    group.throughput(Throughput::Bytes(data.len() as u64));

    for algorithm in HashAlgorithm::ALL {
        let Ok(ctx) = HashContext::new(algorithm) else {
            continue;
        };
        group.bench_function(algorithm.as_str(), |b| {
            b.iter(|| {
                let mut ctx = ctx.clone();
                let mut out = [0u8; 64];
                ctx.update(core::hint::black_box(&data)).unwrap();
                ctx.finalize(&mut out).unwrap()
            })
        });
    }
    group.finish();
}

fn bench_hmac(c: &mut Criterion) {
    let mut group = c.benchmark_group("hmac");
    for algorithm in [HashAlgorithm::Sha3_256, HashAlgorithm::Sha256] {
        let Ok(mac) = HmacContext::new(algorithm, b"benchmark key") else {
            continue;
        };
        group.bench_function(algorithm.as_str(), |b| {
            b.iter(|| {
                let mut mac = mac.clone();
                let mut out = [0u8; 64];
                mac.update(core::hint::black_box(b"short message")).unwrap();
                mac.finalize(&mut out).unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hashes, bench_hmac);
criterion_main!(benches);
