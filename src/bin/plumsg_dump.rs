//! Plumsg Dump - Decode Berkas Pesan ke Tabel Teks
//!
//! Membaca berkas .msg, mencetak setiap record (ID, M1..M8) plus tiga view
//! gabungan, lalu memeriksa apakah ID naik ketat. Kalau belum terurut dan
//! `--sorted-out` diberikan, salinan tersortir ditulis sebagai berkas .msg
//! baru.
//!
//! Mode `--tsv` mencetak tabel tab-separated berkolom ID, M1..M8 saja —
//! format yang sama dengan input plumsg_pack, sel apa adanya tanpa escaping.
//!
//! Usage:
//!   cargo run --release --bin plumsg_dump -- <file.msg> [OPTIONS]

use anyhow::{bail, Context, Result};

use plumsg::codec::{is_sorted_by_id, Record};
use plumsg::storage::{read_records, write_records};

/// Konfigurasi dump
struct DumpConfig {
    path: String,
    tsv: bool,
    sorted_out: Option<String>,
}

fn parse_args() -> Result<DumpConfig> {
    let args: Vec<String> = std::env::args().collect();
    let mut path = None;
    let mut tsv = false;
    let mut sorted_out = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--tsv" | "-t" => {
                tsv = true;
            }
            "--sorted-out" | "-s" => {
                if i + 1 < args.len() {
                    sorted_out = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Plumsg Dump - PLU Message File to Text Table\n");
                println!("Usage: plumsg_dump <file.msg> [OPTIONS]\n");
                println!("Options:");
                println!("  -t, --tsv                Tab-separated output (ID, M1..M8)");
                println!("  -s, --sorted-out <PATH>  Write id-sorted copy when input is unsorted");
                println!("  -h, --help               Show this help");
                std::process::exit(0);
            }
            arg if !arg.starts_with('-') && path.is_none() => {
                path = Some(arg.to_string());
            }
            _ => {}
        }
        i += 1;
    }

    match path {
        Some(path) => Ok(DumpConfig { path, tsv, sorted_out }),
        None => bail!("missing input file, see --help"),
    }
}

fn print_table(records: &[Record]) {
    for record in records {
        println!("Message {}:", record.id);
        for (index, line) in record.lines.iter().enumerate() {
            println!("  M{}: {:?}", index + 1, line);
        }
        println!("  Merged:               {:?}", record.merged());
        println!("  Merged with Spaces:   {:?}", record.merged_with_spaces());
        println!("  Merged with Newlines: {:?}", record.merged_with_newlines());
        println!();
    }
}

fn print_tsv(records: &[Record]) {
    println!("ID\tM1\tM2\tM3\tM4\tM5\tM6\tM7\tM8");
    for record in records {
        print!("{}", record.id);
        for line in &record.lines {
            print!("\t{}", line);
        }
        println!();
    }
}

fn main() -> Result<()> {
    let config = parse_args()?;

    let records = read_records(&config.path)
        .with_context(|| format!("failed to read {}", config.path))?;

    if config.tsv {
        print_tsv(&records);
    } else {
        print_table(&records);
        println!("📊 {} records decoded from {}", records.len(), config.path);
    }

    if is_sorted_by_id(&records) {
        if !config.tsv {
            println!("✅ Ids already strictly increasing");
        }
    } else if let Some(out) = &config.sorted_out {
        let mut sorted = records.clone();
        sorted.sort_by_key(|record| record.id);
        let report = write_records(out, &sorted)
            .with_context(|| format!("failed to write {}", out))?;
        println!("✅ Sorted copy written to {} ({} records)", out, report.accepted);
        if !report.rejected.is_empty() {
            println!("⚠️  {} duplicate ids dropped in sorted copy: {:?}",
                report.rejected.len(), report.rejected);
        }
        if !report.clamped.is_empty() {
            println!("⚠️  {} out-of-range ids clamped in sorted copy",
                report.clamped.len());
        }
    } else if !config.tsv {
        println!("⚠️  Ids are not strictly increasing (use --sorted-out for a sorted copy)");
    }

    Ok(())
}
