//! Storage Layer: Mmap-Backed Message Files
//!
//! Prinsip desain:
//! - Zero-Copy read: berkas .msg di-mmap read-only, byte dipetakan langsung
//!   ke decoder tanpa buffer perantara
//! - Exact-length write: panjang output diketahui pasti (412 * n byte),
//!   berkas di-set ke panjang itu lalu diisi lewat mmap mutable

mod msg_file;

pub use msg_file::{read_records, write_records};
