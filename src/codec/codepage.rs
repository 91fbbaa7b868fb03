//! Code Page Layer: Windows-1252
//!
//! Seluruh byte teks di wire memakai code page Windows-1252 (satu byte per
//! karakter). Dua arah dengan sifat asimetris:
//! - Decode bersifat total: setiap byte 0x00-0xFF punya pemetaan, byte asing
//!   lewat apa adanya tanpa transcoding failure.
//! - Encode bisa gagal: karakter tanpa representasi satu byte adalah error
//!   eksplisit, bukan substitusi diam-diam.

use encoding_rs::WINDOWS_1252;

/// Decode byte Windows-1252 menjadi `String`. Tidak pernah gagal.
///
/// Dipakai `decode_without_bom_handling` supaya byte awal yang kebetulan
/// menyerupai BOM tetap diperlakukan sebagai teks Windows-1252 biasa.
#[inline(always)]
pub fn decode_text(bytes: &[u8]) -> String {
    let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
    text.into_owned()
}

/// Encode teks ke byte Windows-1252.
///
/// Returns `None` jika ada karakter di luar code page. Output encoder
/// pengganti (numeric character reference) tidak pernah dipakai.
#[inline(always)]
pub fn encode_text(text: &str) -> Option<Vec<u8>> {
    let (bytes, _, had_errors) = WINDOWS_1252.encode(text);
    if had_errors {
        return None;
    }
    Some(bytes.into_owned())
}
