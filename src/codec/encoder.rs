//! Encoder: Record Sequence -> Byte Stream
//!
//! Satu pass sequential dalam urutan input: deteksi duplikat memakai
//! membership set lintas batch, jadi tidak bisa di-shard tanpa merge akhir.
//! Kegagalan bersifat per-record (partial success) — batch tidak pernah
//! abort, dan setiap penolakan/clamp/kegagalan tercatat di [`BatchReport`].

use std::collections::HashSet;

use log::debug;
use thiserror::Error;

use super::codepage;
use super::ident;
use super::record::{Record, CHUNK_LEN, ID_LEN, LINE_COUNT, LINE_LEN};

/// Error encode fatal untuk satu record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Baris `line` (1-based, M1..M8) memuat karakter di luar Windows-1252.
    #[error("line M{line} contains a character outside the Windows-1252 code page")]
    UnsupportedCharacter { line: usize },
}

/// ID di luar rentang yang di-clamp saat encode (lossy, jadi dilaporkan).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClampedId {
    /// Nilai asli dari input.
    pub raw: u64,
    /// Nilai setelah clamp ke `[1, 4294967295]`.
    pub clamped: u32,
}

/// Satu record yang gagal di-encode dan dilewati.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFailure {
    /// Posisi record di batch input (0-based).
    pub index: usize,
    /// ID mentah record tersebut.
    pub id: u64,
    /// Penyebab kegagalan.
    pub error: EncodeError,
}

/// Laporan out-of-band hasil satu batch encode, untuk diagnosa caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Jumlah record yang diterima (tepat 412 byte per record di output).
    pub accepted: usize,
    /// ID duplikat yang ditolak, dalam urutan penolakan.
    pub rejected: Vec<u64>,
    /// ID di luar rentang yang di-clamp.
    pub clamped: Vec<ClampedId>,
    /// Record yang gagal encode.
    pub failed: Vec<RecordFailure>,
}

impl BatchReport {
    /// Batch bersih: tanpa penolakan, clamp, maupun kegagalan.
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty() && self.clamped.is_empty() && self.failed.is_empty()
    }
}

/// Encoder batch dengan deteksi duplikat berbasis set.
///
/// Urutan input dipertahankan oleh buffer output itu sendiri; set hanya
/// menjawab pertanyaan keanggotaan.
pub struct Encoder {
    buffer: Vec<u8>,
    seen: HashSet<u64>,
    report: BatchReport,
    index: usize,
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder {
    /// Membuat encoder kosong.
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            seen: HashSet::new(),
            report: BatchReport::default(),
            index: 0,
        }
    }

    /// Membuat encoder dengan kapasitas untuk `records` record.
    pub fn with_capacity(records: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(records * CHUNK_LEN),
            seen: HashSet::with_capacity(records),
            report: BatchReport::default(),
            index: 0,
        }
    }

    /// Encode satu record ke ekor batch.
    ///
    /// Urutan langkah: cek duplikat memakai ID mentah, baru clamp ke
    /// `[1, 4294967295]`, baru encode kedelapan baris. Record duplikat atau
    /// gagal tidak memancarkan satu byte pun.
    pub fn push(&mut self, record: &Record) {
        let index = self.index;
        self.index += 1;

        if self.seen.contains(&record.id) {
            debug!("record {}: duplicate id {} rejected", index, record.id);
            self.report.rejected.push(record.id);
            return;
        }

        let id = ident::clamp_id(record.id);
        if id as u64 != record.id {
            debug!("record {}: id {} clamped to {}", index, record.id, id);
            self.report.clamped.push(ClampedId { raw: record.id, clamped: id });
        }

        match encode_lines(&record.lines) {
            Ok(lines) => {
                self.buffer.extend_from_slice(&ident::encode_id(id));
                self.buffer.extend_from_slice(&lines);
                self.seen.insert(id as u64);
                self.report.accepted += 1;
            }
            Err(error) => {
                debug!("record {}: id {} skipped: {}", index, record.id, error);
                self.report.failed.push(RecordFailure { index, id: record.id, error });
            }
        }
    }

    /// Selesaikan batch: byte hasil plus laporannya.
    pub fn finish(self) -> (Vec<u8>, BatchReport) {
        (self.buffer, self.report)
    }
}

/// Encode kedelapan baris: tiap baris dipotong ke 50 karakter pertama,
/// di-encode Windows-1252, di-pad NUL sampai 50 byte, lalu ditutup satu
/// byte separator NUL.
fn encode_lines(lines: &[String; LINE_COUNT]) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::with_capacity(CHUNK_LEN - ID_LEN);
    for (index, text) in lines.iter().enumerate() {
        let text = match text.char_indices().nth(LINE_LEN) {
            Some((cut, _)) => &text[..cut],
            None => text.as_str(),
        };
        let bytes = codepage::encode_text(text)
            .ok_or(EncodeError::UnsupportedCharacter { line: index + 1 })?;
        out.extend_from_slice(&bytes);
        out.resize(out.len() + (LINE_LEN - bytes.len()) + 1, 0);
    }
    Ok(out)
}

/// Encode batch penuh dalam urutan input. Lihat [`Encoder::push`].
pub fn encode(records: &[Record]) -> (Vec<u8>, BatchReport) {
    let mut encoder = Encoder::with_capacity(records.len());
    for record in records {
        encoder.push(record);
    }
    encoder.finish()
}
