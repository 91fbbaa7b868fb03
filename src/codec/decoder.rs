//! Decoder: Byte Stream -> Record Sequence
//!
//! Loop decode dinyatakan sebagai finite-state machine eksplisit: state tiap
//! byte diturunkan murni dari offset absolutnya di dalam chunk 412 byte,
//! sehingga tidak ada kopling tersembunyi antara counter loop dan identitas
//! field.
//!
//! Decode bersifat total: buffer apa pun menghasilkan urutan record tanpa
//! error. Chunk independen satu sama lain (batasnya statis di kelipatan 412
//! byte), hanya state di dalam satu chunk yang sequential.

use log::warn;

use super::codepage;
use super::ident;
use super::record::{Record, CHUNK_LEN, ID_LEN, LINE_LEN, SLOT_LEN};

/// State satu byte, diturunkan dari offset absolut dalam chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChunkState {
    /// Offset 0..4: byte ID ke-`byte` (little-endian).
    Ident { byte: usize },
    /// Di dalam span 50 byte milik baris `line` (0-based).
    Field { line: usize },
    /// Byte separator penutup baris `line`.
    Separator { line: usize },
}

/// Transition table: offset absolut 0..412 -> state.
#[inline(always)]
fn state_at(offset: usize) -> ChunkState {
    debug_assert!(offset < CHUNK_LEN);
    if offset < ID_LEN {
        return ChunkState::Ident { byte: offset };
    }
    let rel = offset - ID_LEN;
    let line = rel / SLOT_LEN;
    if rel % SLOT_LEN == LINE_LEN {
        ChunkState::Separator { line }
    } else {
        ChunkState::Field { line }
    }
}

/// State mutable per-chunk; seluruhnya di-reset di batas 412 byte.
struct ChunkScratch {
    id_bytes: [u8; ID_LEN],
    record: Record,
    line_buf: Vec<u8>,
    suppressed: bool,
}

impl ChunkScratch {
    fn new() -> Self {
        Self {
            id_bytes: [0; ID_LEN],
            record: Record::empty(),
            line_buf: Vec::with_capacity(LINE_LEN + 1),
            suppressed: false,
        }
    }

    /// Proses satu byte sesuai state offset-nya.
    #[inline(always)]
    fn feed(&mut self, offset: usize, byte: u8) {
        match state_at(offset) {
            ChunkState::Ident { byte: index } => {
                self.id_bytes[index] = byte;
                if index == ID_LEN - 1 {
                    self.record.id = ident::decode_id(self.id_bytes) as u64;
                }
            }
            ChunkState::Field { .. } => {
                if self.suppressed {
                    return;
                }
                if byte == 0 {
                    // NUL tertanam: sisa span field ini padding implisit
                    self.suppressed = true;
                } else {
                    self.line_buf.push(byte);
                }
            }
            ChunkState::Separator { line } => {
                // Toleransi data rusak: separator non-nol ikut masuk field
                // selama suppression belum aktif
                if !self.suppressed && byte != 0 {
                    self.line_buf.push(byte);
                }
                self.finish_line(line);
            }
        }
    }

    /// Finalisasi teks baris: decode Windows-1252, buang NUL nyasar, reset
    /// state suppression untuk baris berikutnya.
    fn finish_line(&mut self, line: usize) {
        let text = codepage::decode_text(&self.line_buf);
        self.record.lines[line] = text.replace('\0', "");
        self.line_buf.clear();
        self.suppressed = false;
    }

    /// Ambil record yang selesai dan reset seluruh state per-chunk.
    fn take_record(&mut self) -> Record {
        self.id_bytes = [0; ID_LEN];
        self.line_buf.clear();
        self.suppressed = false;
        std::mem::take(&mut self.record)
    }

    /// Kebijakan chunk buntung di akhir input: baris yang sedang berjalan
    /// difinalisasi dulu, lalu record parsial dipertahankan hanya jika
    /// ID-nya bukan nol. Fragmen lebih pendek dari 4 byte tidak pernah
    /// punya ID sehingga selalu dibuang.
    fn finish_partial(&mut self, resume_offset: usize) -> Option<Record> {
        match state_at(resume_offset) {
            ChunkState::Field { line } | ChunkState::Separator { line } => {
                self.finish_line(line);
            }
            ChunkState::Ident { .. } => {}
        }
        if self.record.has_valid_id() {
            Some(self.take_record())
        } else {
            None
        }
    }
}

/// Decoder satu buffer penuh, byte-position-driven.
pub struct Decoder<'a> {
    buffer: &'a [u8],
}

impl<'a> Decoder<'a> {
    /// Membuat decoder dari buffer.
    #[inline(always)]
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer }
    }

    /// Decode seluruh buffer menjadi urutan record dalam urutan file.
    ///
    /// Fungsi total: tidak pernah gagal, berapa pun panjang buffer.
    pub fn decode(self) -> Vec<Record> {
        let mut records = Vec::with_capacity(self.buffer.len() / CHUNK_LEN + 1);
        let mut chunk = ChunkScratch::new();

        for (index, &byte) in self.buffer.iter().enumerate() {
            let offset = index % CHUNK_LEN;
            chunk.feed(offset, byte);
            if offset == CHUNK_LEN - 1 {
                records.push(chunk.take_record());
            }
        }

        let leftover = self.buffer.len() % CHUNK_LEN;
        if leftover != 0 {
            match chunk.finish_partial(leftover) {
                Some(record) => {
                    warn!(
                        "trailing {} bytes (not a multiple of {}): keeping partial record id {}",
                        leftover, CHUNK_LEN, record.id
                    );
                    records.push(record);
                }
                None => {
                    warn!(
                        "trailing {} bytes (not a multiple of {}): no valid id, discarded",
                        leftover, CHUNK_LEN
                    );
                }
            }
        }

        records
    }
}

/// Decode buffer penuh menjadi urutan record. Lihat [`Decoder::decode`].
#[inline(always)]
pub fn decode(bytes: &[u8]) -> Vec<Record> {
    Decoder::new(bytes).decode()
}
