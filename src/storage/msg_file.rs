//! Mmap Read/Write untuk Berkas Pesan PLU

use memmap2::MmapOptions;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

use crate::codec::{decode, encode, BatchReport, Record};

/// Baca dan decode seluruh berkas pesan.
///
/// Berkas di-mmap read-only sehingga decoder membaca langsung dari page
/// cache. Berkas kosong menghasilkan urutan record kosong tanpa mapping
/// (mmap panjang nol ditolak sebagian platform).
pub fn read_records<P: AsRef<Path>>(path: P) -> io::Result<Vec<Record>> {
    let file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Ok(Vec::new());
    }

    // SAFETY: map read-only; berkas tidak dimodifikasi selama map hidup
    let mmap = unsafe { MmapOptions::new().map(&file)? };

    Ok(decode(&mmap))
}

/// Encode batch dan tulis ke berkas pesan lewat mmap mutable.
///
/// Berkas dibuat/di-truncate, panjangnya di-set ke ukuran hasil encode,
/// lalu byte di-copy dan di-flush. Laporan batch dikembalikan supaya caller
/// bisa menampilkan duplikat/clamp/kegagalan ke pengguna.
pub fn write_records<P: AsRef<Path>>(path: P, records: &[Record]) -> io::Result<BatchReport> {
    let (bytes, report) = encode(records);

    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.set_len(bytes.len() as u64)?;

    if bytes.is_empty() {
        return Ok(report);
    }

    // SAFETY: berkas dibuka read/write dan panjangnya sudah di-set
    let mut mmap = unsafe { MmapOptions::new().map_mut(&file)? };
    mmap.copy_from_slice(&bytes);
    mmap.flush()?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{CHUNK_LEN, LINE_COUNT};
    use std::fs;

    fn record(id: u64, first_line: &str) -> Record {
        let mut lines: [String; LINE_COUNT] = Default::default();
        lines[0] = first_line.to_string();
        Record::new(id, lines)
    }

    #[test]
    fn test_write_then_read_roundtrip() {
        let path = "test_msg_roundtrip.msg";

        let batch = vec![record(1, "SALMON"), record(2, "FILET"), record(9, "FRESH")];
        let report = write_records(path, &batch).unwrap();
        assert_eq!(report.accepted, 3);
        assert_eq!(fs::metadata(path).unwrap().len(), (3 * CHUNK_LEN) as u64);

        let records = read_records(path).unwrap();
        assert_eq!(records, batch);

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_write_drops_duplicates() {
        let path = "test_msg_duplicates.msg";

        let batch = vec![record(7, "X"), record(7, "Y")];
        let report = write_records(path, &batch).unwrap();
        assert_eq!(report.accepted, 1);
        assert_eq!(report.rejected, vec![7]);

        let records = read_records(path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].lines[0], "X");

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_empty_batch_empty_file() {
        let path = "test_msg_empty.msg";

        let report = write_records(path, &[]).unwrap();
        assert_eq!(report.accepted, 0);
        assert_eq!(fs::metadata(path).unwrap().len(), 0);
        assert!(read_records(path).unwrap().is_empty());

        fs::remove_file(path).ok();
    }
}
