//! Plumsg Pack - Tabel TSV ke Berkas Pesan
//!
//! Membaca tabel tab-separated berkolom ID, M1..M8 (baris header "ID..."
//! opsional), membangun record, meng-encode batch, dan menulis berkas .msg.
//! Baris tanpa ID yang bisa diparse dilewati dan dihitung. ID negatif
//! diperlakukan sebagai di bawah rentang dan berakhir di-clamp ke 1 oleh
//! encoder.
//!
//! Laporan batch dicetak ke stdout: jumlah diterima, ID duplikat (reused),
//! ID yang di-clamp, dan record yang gagal encode.
//!
//! Usage:
//!   cargo run --release --bin plumsg_pack -- <table.tsv> <out.msg>

use anyhow::{bail, Context, Result};

use plumsg::codec::{BatchReport, Record, CHUNK_LEN, LINE_COUNT};
use plumsg::storage::write_records;

/// Parse sel ID: u64 langsung, atau i64 untuk menampung nilai negatif
/// (dipetakan ke sentinel di-bawah-rentang 0).
fn parse_id(cell: &str) -> Option<u64> {
    let cell = cell.trim();
    if let Ok(id) = cell.parse::<u64>() {
        return Some(id);
    }
    match cell.parse::<i64>() {
        Ok(id) if id < 0 => Some(0),
        _ => None,
    }
}

/// Parse satu baris TSV menjadi record. Sel yang hilang menjadi baris kosong.
fn parse_row(row: &str) -> Option<Record> {
    let mut cells = row.split('\t');
    let id = parse_id(cells.next()?)?;

    let mut lines: [String; LINE_COUNT] = Default::default();
    for line in lines.iter_mut() {
        match cells.next() {
            Some(cell) => *line = cell.to_string(),
            None => break,
        }
    }
    Some(Record::new(id, lines))
}

fn print_report(report: &BatchReport, out: &str) {
    println!(
        "📊 {} records packed ({} bytes) to {}",
        report.accepted,
        report.accepted * CHUNK_LEN,
        out
    );

    if !report.rejected.is_empty() {
        println!(
            "⚠️  {} messages had reused ids and were not included: {:?}",
            report.rejected.len(),
            report.rejected
        );
        println!("    Verify that each message has a unique non-zero id in the table.");
    }
    if !report.clamped.is_empty() {
        for clamp in &report.clamped {
            println!("⚠️  id {} out of range, clamped to {}", clamp.raw, clamp.clamped);
        }
    }
    if !report.failed.is_empty() {
        for failure in &report.failed {
            println!(
                "❌ row {} (id {}) skipped: {}",
                failure.index + 1,
                failure.id,
                failure.error
            );
        }
    }
    if report.is_clean() {
        println!("✅ Batch clean: no duplicates, clamps, or failures");
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 || args.iter().any(|a| a == "--help" || a == "-h") {
        println!("Plumsg Pack - Text Table to PLU Message File\n");
        println!("Usage: plumsg_pack <table.tsv> <out.msg>\n");
        println!("Input columns: ID, M1..M8 (tab-separated, header row optional)");
        if args.len() < 3 {
            bail!("expected <table.tsv> and <out.msg> arguments");
        }
        return Ok(());
    }
    let table_path = &args[1];
    let out_path = &args[2];

    let table = std::fs::read_to_string(table_path)
        .with_context(|| format!("failed to read {}", table_path))?;

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for (index, row) in table.lines().enumerate() {
        if row.trim().is_empty() {
            continue;
        }
        match parse_row(row) {
            Some(record) => records.push(record),
            None => {
                // Baris header sekali di awal tidak dihitung sebagai drop
                if index == 0 && row.starts_with("ID") {
                    continue;
                }
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        println!("⚠️  {} rows without a parseable id were skipped", skipped);
    }

    let report = write_records(out_path, &records)
        .with_context(|| format!("failed to write {}", out_path))?;
    print_report(&report, out_path);

    Ok(())
}
