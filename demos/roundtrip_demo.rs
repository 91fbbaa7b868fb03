//! Roundtrip Demo - Encode lalu Decode Batch Kecil
//!
//! Skenario:
//! 1. Susun batch dengan ID duplikat dan ID di luar rentang
//! 2. Encode ke byte stream 412 byte per record, tampilkan laporannya
//! 3. Decode balik dan tampilkan record plus tiga view gabungan
//! 4. Verifikasi round-trip byte-exact
//!
//! Usage:
//!   cargo run --release --example roundtrip_demo

use plumsg::codec::{decode, encode, Record, CHUNK_LEN, LINE_COUNT};

fn record(id: u64, lines: [&str; 3]) -> Record {
    let mut all: [String; LINE_COUNT] = Default::default();
    all[0] = lines[0].to_string();
    all[1] = lines[1].to_string();
    all[2] = lines[2].to_string();
    Record::new(id, all)
}

fn main() {
    println!("🚀 Plumsg Roundtrip Demo");
    println!("========================\n");

    let batch = vec![
        record(3, ["SALMON FILET", "FRESH DAILY", "PER KG"]),
        record(1, ["RIBEYE STEAK", "GRAIN FED", ""]),
        record(3, ["DUPLICATE ID", "NEVER EMITTED", ""]),
        record(5_000_000_000, ["OUT OF RANGE ID", "GETS CLAMPED", ""]),
    ];

    println!("📊 Encoding {} input records...", batch.len());
    let (bytes, report) = encode(&batch);

    println!("  Accepted: {} ({} bytes)", report.accepted, bytes.len());
    println!("  Rejected duplicates: {:?}", report.rejected);
    for clamp in &report.clamped {
        println!("  Clamped: {} -> {}", clamp.raw, clamp.clamped);
    }
    assert_eq!(bytes.len(), report.accepted * CHUNK_LEN);

    println!("\n📊 Decoding back...");
    let records = decode(&bytes);
    for record in &records {
        println!("\nMessage {}:", record.id);
        for (index, line) in record.lines.iter().enumerate() {
            if !line.is_empty() {
                println!("  M{}: {:?}", index + 1, line);
            }
        }
        println!("  Merged with Spaces:   {:?}", record.merged_with_spaces());
        println!("  Merged with Newlines: {:?}", record.merged_with_newlines());
    }

    // Round-trip byte-exact
    let (bytes_again, report_again) = encode(&records);
    assert_eq!(bytes, bytes_again);
    assert_eq!(report_again.accepted, records.len());

    println!("\n✅ Roundtrip byte-exact: {} bytes identical", bytes.len());
}
