//! Plumsg - PLU Message Codec
//!
//! Arsitektur:
//! - Offset-Driven FSM: decode per-byte tanpa kopling loop-counter/field
//! - Total Decode: buffer apa pun menghasilkan urutan record
//! - Byte-Exact: encode(decode(buffer)) == buffer
//! - Windows-1252: satu byte per karakter, pass-through saat decode

use plumsg::codec::{decode, encode, Record, CHUNK_LEN, LINE_COUNT};
use std::time::Instant;

fn main() {
    println!("🚀 Plumsg PLU Message Codec - PoC v0.1");
    println!("======================================\n");

    // Benchmark Decoder
    benchmark_decoder();

    // Benchmark Encoder
    benchmark_encoder();

    // Benchmark Text Normalizer
    benchmark_merge();

    println!("\n✅ All benchmarks complete!");
    println!("\nTo dump a message file: cargo run --release --bin plumsg_dump -- file.msg");
}

/// Batch sintetis: ID berurutan, baris terisi teks pendek.
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

fn benchmark_decoder() {
    println!("📊 Decoder Benchmark (Offset-Driven FSM)");
    println!("----------------------------------------");

    const RECORDS: usize = 10_000;
    const ITERATIONS: usize = 100;

    let (bytes, _) = encode(&make_batch(RECORDS));

    let start = Instant::now();
    for _ in 0..ITERATIONS {
        let records = decode(&bytes);
        assert_eq!(records.len(), RECORDS);
    }
    let duration = start.elapsed();

    let total_records = (RECORDS * ITERATIONS) as f64;
    let decode_ns = duration.as_nanos() as f64 / total_records;

    println!("  Records: {} x {} iterations", RECORDS, ITERATIONS);
    println!(
        "  Decode latency: {:.2} ns/record ({:.3} μs/record)",
        decode_ns,
        decode_ns / 1000.0
    );
    println!(
        "  Throughput:     {:.2} MB/sec\n",
        (bytes.len() * ITERATIONS) as f64 / duration.as_secs_f64() / 1_000_000.0
    );
}

fn benchmark_encoder() {
    println!("📊 Encoder Benchmark (Set-Based Dedup)");
    println!("--------------------------------------");

    const RECORDS: usize = 10_000;
    const ITERATIONS: usize = 100;

    let batch = make_batch(RECORDS);

    let start = Instant::now();
    for _ in 0..ITERATIONS {
        let (bytes, report) = encode(&batch);
        assert_eq!(report.accepted, RECORDS);
        assert_eq!(bytes.len(), RECORDS * CHUNK_LEN);
    }
    let duration = start.elapsed();

    let total_records = (RECORDS * ITERATIONS) as f64;
    let encode_ns = duration.as_nanos() as f64 / total_records;

    println!("  Records: {} x {} iterations", RECORDS, ITERATIONS);
    println!(
        "  Encode latency: {:.2} ns/record ({:.3} μs/record)",
        encode_ns,
        encode_ns / 1000.0
    );
    println!(
        "  Throughput:     {:.2} MB/sec\n",
        (RECORDS * CHUNK_LEN * ITERATIONS) as f64 / duration.as_secs_f64() / 1_000_000.0
    );
}

fn benchmark_merge() {
    println!("📊 Text Normalizer Benchmark (Merged Views)");
    println!("-------------------------------------------");

    const ITERATIONS: usize = 1_000_000;

    let batch = make_batch(1);
    let record = &batch[0];

    let start = Instant::now();
    for _ in 0..ITERATIONS {
        let merged = record.merged_with_newlines();
        std::hint::black_box(merged);
    }
    let duration = start.elapsed();

    let merge_ns = duration.as_nanos() as f64 / ITERATIONS as f64;

    println!("  Operations: {}", ITERATIONS);
    println!(
        "  Merge latency: {:.2} ns/op ({:.3} μs/op)",
        merge_ns,
        merge_ns / 1000.0
    );
    println!(
        "  Throughput:    {:.2} M ops/sec",
        ITERATIONS as f64 / duration.as_secs_f64() / 1_000_000.0
    );
}
