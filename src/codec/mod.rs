//! Codec Layer: PLU Message Binary Format
//!
//! Prinsip desain:
//! - Offset-driven FSM: identitas field ditentukan posisi absolut dalam chunk
//! - Total decode: buffer byte apa pun menghasilkan urutan record
//! - Partial success: kegagalan encode per-record, batch tetap jalan
//! - Byte-exact: encode(decode(buffer)) mengembalikan buffer yang sama

mod codepage;
mod decoder;
mod encoder;
mod ident;
mod record;

pub use decoder::{decode, Decoder};
pub use encoder::{encode, BatchReport, ClampedId, EncodeError, Encoder, RecordFailure};
pub use ident::{clamp_id, decode_id, encode_id, ID_MAX, ID_MIN};
pub use record::{is_sorted_by_id, Record, CHUNK_LEN, ID_LEN, LINE_COUNT, LINE_LEN, SLOT_LEN};
