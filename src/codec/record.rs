//! PLU Message Record
//!
//! Satu record menempati tepat satu chunk 412 byte di wire:
//!
//! ```text
//! ┌────────┬──────────┬───┬──────────┬───┬─────┬──────────┬───┐
//! │ ID 4B  │ M1 50B   │NUL│ M2 50B   │NUL│ ... │ M8 50B   │NUL│
//! └────────┴──────────┴───┴──────────┴───┴─────┴──────────┴───┘
//!   LE        4 + 51*8 = 412 byte
//! ```
//!
//! Delapan baris direpresentasikan sebagai array berindeks tetap, bukan
//! dispatch per nama field, sehingga decoder/encoder cukup bekerja dengan
//! indeks baris.

/// Jumlah field baris per record.
pub const LINE_COUNT: usize = 8;

/// Lebar satu field baris di wire (byte).
pub const LINE_LEN: usize = 50;

/// Panjang ID di wire (byte).
pub const ID_LEN: usize = 4;

/// Satu field baris plus satu byte separator NUL.
pub const SLOT_LEN: usize = LINE_LEN + 1;

/// Ukuran satu chunk: 4 + 8 * 51 = 412 byte.
pub const CHUNK_LEN: usize = ID_LEN + LINE_COUNT * SLOT_LEN;

/// Satu pesan PLU: ID plus delapan baris teks.
///
/// `id` memakai `u64` supaya nilai di luar rentang 4 byte bertahan utuh
/// sampai encoder meng-clamp-nya; record hasil decode selalu muat di 32 bit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// ID pesan. 0 adalah sentinel "absent/invalid" dan hanya bisa muncul
    /// dari decode (misalnya chunk yang seluruhnya nol).
    pub id: u64,
    /// Baris M1..M8, masing-masing logis maksimal 50 karakter Windows-1252.
    pub lines: [String; LINE_COUNT],
}

impl Record {
    /// Membuat record dari ID dan delapan baris.
    pub fn new(id: u64, lines: [String; LINE_COUNT]) -> Self {
        Self { id, lines }
    }

    /// Record kosong dengan ID sentinel 0.
    pub fn empty() -> Self {
        Self::default()
    }

    /// ID dianggap valid jika bukan sentinel 0.
    #[inline(always)]
    pub fn has_valid_id(&self) -> bool {
        self.id > 0
    }

    /// Gabungkan kedelapan baris apa adanya: `sep` disisipkan di antara
    /// baris berurutan (7 separator), kiri ke kanan.
    pub fn merge_naive(&self, sep: &str) -> String {
        self.lines.join(sep)
    }

    /// Gabungkan kedelapan baris dengan pemangkasan baris kosong di ekor.
    ///
    /// Untuk `sep` kosong hasilnya sama dengan [`merge_naive`] minus byte
    /// NUL (tidak ada pemangkasan). Untuk `sep` non-kosong: berjalan dari
    /// baris 8 turun ke baris 1, selama baris masih blank dan belum ada
    /// baris belakang yang non-blank, teks baris plus satu separator ekor
    /// dibuang; baris non-blank pertama menghentikan seluruh pemangkasan,
    /// sehingga baris blank yang lebih awal tetap dipertahankan.
    ///
    /// [`merge_naive`]: Record::merge_naive
    pub fn merge_optimal(&self, sep: &str) -> String {
        let mut merged = self.merge_naive(sep);

        if sep.is_empty() {
            return merged.replace('\0', "");
        }

        for line in self.lines.iter().rev() {
            if !line_is_blank(line) {
                break;
            }
            let keep = merged.len().saturating_sub(sep.len() + line.len());
            merged.truncate(keep);
        }

        merged.replace('\0', "")
    }

    /// View gabungan tanpa separator (kolom `Merged`).
    pub fn merged(&self) -> String {
        self.merge_optimal("")
    }

    /// View gabungan dengan spasi (kolom `Merged with Spaces`).
    pub fn merged_with_spaces(&self) -> String {
        self.merge_optimal(" ")
    }

    /// View gabungan dengan newline (kolom `Merged with Newlines`).
    pub fn merged_with_newlines(&self) -> String {
        self.merge_optimal("\n")
    }
}

/// Baris dianggap blank jika kosong atau berisi persis satu karakter NUL.
#[inline(always)]
fn line_is_blank(line: &str) -> bool {
    line.is_empty() || line == "\0"
}

/// Cek apakah ID naik ketat sepanjang urutan (probe untuk memutuskan perlu
/// tidaknya varian tersortir; sorting sendiri urusan kolaborator).
pub fn is_sorted_by_id(records: &[Record]) -> bool {
    let mut prev = 0u64;
    for record in records {
        if record.id <= prev {
            return false;
        }
        prev = record.id;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with(lines: [&str; LINE_COUNT]) -> Record {
        Record::new(1, lines.map(String::from))
    }

    #[test]
    fn test_chunk_len() {
        assert_eq!(CHUNK_LEN, 412);
    }

    #[test]
    fn test_merge_naive_inserts_seven_separators() {
        let record = record_with(["a", "b", "c", "d", "e", "f", "g", "h"]);
        assert_eq!(record.merge_naive("|"), "a|b|c|d|e|f|g|h");
        assert_eq!(record.merge_naive(""), "abcdefgh");
    }

    #[test]
    fn test_merge_optimal_trims_trailing_blanks() {
        let record = record_with(["A", "B", "", "", "", "", "", ""]);
        assert_eq!(record.merge_optimal("|"), "A|B");
        assert_eq!(record.merge_optimal(" "), "A B");
        assert_eq!(record.merge_optimal("\n"), "A\nB");
    }

    #[test]
    fn test_merge_optimal_keeps_interior_blanks() {
        // Baris kosong di tengah bertahan: pemangkasan berhenti di baris
        // non-blank pertama dari belakang
        let record = record_with(["A", "", "C", "", "", "", "", ""]);
        assert_eq!(record.merge_optimal("|"), "A||C");
    }

    #[test]
    fn test_merge_optimal_empty_sep_equals_naive_stripped() {
        let record = record_with(["A", "\0", "C", "", "", "", "", "D"]);
        assert_eq!(record.merge_optimal(""), record.merge_naive("").replace('\0', ""));
        assert_eq!(record.merge_optimal(""), "ACD");
    }

    #[test]
    fn test_merge_optimal_all_blank_record() {
        let record = record_with(["", "", "", "", "", "", "", ""]);
        assert_eq!(record.merge_optimal("|"), "");
        assert_eq!(record.merge_optimal(""), "");
    }

    #[test]
    fn test_merge_optimal_nul_line_counts_as_blank() {
        let record = record_with(["A", "B", "\0", "", "", "", "", ""]);
        assert_eq!(record.merge_optimal("|"), "A|B");
        // "\0\0" TIDAK blank (lebih dari satu karakter), ikut tergabung
        let record = record_with(["A", "\0\0", "", "", "", "", "", ""]);
        assert_eq!(record.merge_optimal("|"), "A|");
    }

    #[test]
    fn test_merged_views() {
        let record = record_with(["HOT", "FRESH", "", "", "", "", "", ""]);
        assert_eq!(record.merged(), "HOTFRESH");
        assert_eq!(record.merged_with_spaces(), "HOT FRESH");
        assert_eq!(record.merged_with_newlines(), "HOT\nFRESH");
    }

    #[test]
    fn test_is_sorted_by_id() {
        let make = |ids: &[u64]| -> Vec<Record> {
            ids.iter().map(|&id| Record::new(id, Default::default())).collect()
        };
        assert!(is_sorted_by_id(&make(&[])));
        assert!(is_sorted_by_id(&make(&[1])));
        assert!(is_sorted_by_id(&make(&[1, 2, 100])));
        assert!(!is_sorted_by_id(&make(&[2, 1])));
        assert!(!is_sorted_by_id(&make(&[1, 1])));
        // Sentinel 0 tidak pernah dianggap terurut
        assert!(!is_sorted_by_id(&make(&[0, 1])));
    }
}
