//! Error taxonomy untuk encoder dan node model.
//!
//! Semua kegagalan adalah programmer/construction error, bukan kondisi
//! transient, jadi tidak ada retry. Lookup miss bukan error: `find_by_name`
//! mengembalikan `None`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Encode akan menulis melewati akhir buffer. Tidak ada byte yang ditulis.
    #[error("write of {needed} bytes at offset {at} exceeds buffer ({available} bytes available)")]
    BoundsViolation {
        at: usize,
        needed: usize,
        available: usize,
    },

    /// Cursor setelah `pack` tidak sama dengan `size` node.
    #[error("size accounting mismatch: expected {expected} bytes, wrote {written}")]
    InvalidSizeAccounting { expected: usize, written: usize },

    #[error("name is {len} bytes, longer than the 16-bit length field allows")]
    NameTooLong { len: usize },

    #[error("{count} entries exceed the maximum of {max}")]
    TooManyEntries { count: usize, max: usize },

    /// Record lebih besar dari yang bisa ditulis di field `size:i32`.
    #[error("record of {size} bytes does not fit the 32-bit size field")]
    SizeOverflow { size: usize },

    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
