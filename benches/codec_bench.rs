//! Criterion benchmark untuk codec PLU
//!
//! Run dengan: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use plumsg::codec::{decode, encode, Record, CHUNK_LEN, LINE_COUNT};

/// Batch sintetis dengan ID unik dan baris terisi.
fn make_batch(count: usize) -> Vec<Record> {
    (1..=count as u64)
        .map(|id| {
            let mut lines: [String; LINE_COUNT] = Default::default();
            lines[0] = format!("PLU ITEM {}", id);
            lines[1] = "FRESH DAILY".to_string();
            lines[2] = "WEIGHED PER KG".to_string();
            Record::new(id, lines)
        })
        .collect()
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for records in [100, 1000, 10000].iter() {
        let (bytes, _) = encode(&make_batch(*records));
        group.throughput(Throughput::Bytes((records * CHUNK_LEN) as u64));
        group.bench_function(format!("records_{}", records), |b| {
            b.iter(|| decode(black_box(&bytes)));
        });
    }

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for records in [100, 1000, 10000].iter() {
        let batch = make_batch(*records);
        group.throughput(Throughput::Bytes((records * CHUNK_LEN) as u64));
        group.bench_function(format!("records_{}", records), |b| {
            b.iter(|| encode(black_box(&batch)));
        });
    }

    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");
    group.throughput(Throughput::Elements(1));

    let batch = make_batch(1);
    let record = &batch[0];

    group.bench_function("merge_naive", |b| {
        b.iter(|| black_box(record).merge_naive("\n"));
    });
    group.bench_function("merge_optimal", |b| {
        b.iter(|| black_box(record).merge_optimal("\n"));
    });
    group.bench_function("merge_optimal_no_sep", |b| {
        b.iter(|| black_box(record).merge_optimal(""));
    });

    group.finish();
}

criterion_group!(benches, bench_decode, bench_encode, bench_merge);
criterion_main!(benches);
