//! Plumsg - Byte-Exact Codec untuk Berkas Pesan PLU
//!
//! Codec biner dua arah untuk berkas pesan (.msg) timbangan retail CAS:
//! - Chunk 412 byte: ID 4 byte little-endian + 8 baris teks 50 byte,
//!   masing-masing ditutup satu byte separator NUL
//! - Windows-1252: satu byte per karakter; decode tidak pernah gagal,
//!   encode gagal eksplisit untuk karakter di luar code page
//! - Round-trip byte-exact: encode(decode(buffer)) == buffer
//!
//! Lapisan presentasi (spreadsheet, menu interaktif, dialog berkas) berada
//! di luar crate ini; antarmukanya cukup `Vec<Record>` dua arah plus
//! [`codec::BatchReport`] untuk diagnosa.

pub mod codec;
pub mod storage;

pub use codec::{decode, encode, BatchReport, Decoder, EncodeError, Encoder, Record};
