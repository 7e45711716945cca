//! Core module: byte encoder, error taxonomy, dan storage
//!
//! Prinsip desain:
//! - Stateless: encode hanya bergantung pada buffer + cursor dari caller
//! - Bounds-checked: tidak ada write di luar buffer
//! - No I/O di encoder: file hanya disentuh oleh `storage`

mod encoder;
mod error;
pub mod storage;

pub use encoder::{encode, encode_bytes, encode_slice, encode_str, Encode, Encoder};
pub use error::{Error, Result};
