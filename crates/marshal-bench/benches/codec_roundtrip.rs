//! Criterion view of the same round trips the time-boxed runner measures
//!
//! Useful for comparing a single encoding across commits with criterion's
//! change detection, which the runner's plain averages cannot do.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use marshal_bench::{CorpusConfig, Encoding, default_encodings, generate_corpus};
use std::hint::black_box;

const CORPUS_SIZE: usize = 256;

fn corpus() -> Vec<marshal_bench::Record> {
    generate_corpus(&CorpusConfig {
        target_records: CORPUS_SIZE,
        ..CorpusConfig::default()
    })
}

fn benchmark_marshal(c: &mut Criterion) {
    let records = corpus();
    let encodings = default_encodings().expect("avro schema parses");
    let mut group = c.benchmark_group("marshal");

    group.throughput(Throughput::Elements(CORPUS_SIZE as u64));
    for encoding in &encodings {
        group.bench_function(encoding.name(), |b| {
            b.iter(|| {
                for record in &records {
                    black_box(encoding.encode(black_box(record)).unwrap());
                }
            })
        });
    }

    group.finish();
}

fn benchmark_unmarshal(c: &mut Criterion) {
    let records = corpus();
    let encodings = default_encodings().expect("avro schema parses");
    let mut group = c.benchmark_group("unmarshal");

    for encoding in &encodings {
        let payloads: Vec<Vec<u8>> = records
            .iter()
            .map(|record| encoding.encode(record).unwrap())
            .collect();
        let total_bytes: usize = payloads.iter().map(Vec::len).sum();

        group.throughput(Throughput::Bytes(total_bytes as u64));
        group.bench_function(encoding.name(), |b| {
            b.iter(|| {
                for payload in &payloads {
                    black_box(encoding.decode(black_box(payload)).unwrap());
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_marshal, benchmark_unmarshal);
criterion_main!(benches);
