//! Treepack - Self-Describing Little-Endian Tree Encoder
//!
//! Arsitektur:
//! - Byte Encoder: little-endian per value, bounds-checked cursor
//! - Node Model: Primitive, Array/String, Object dengan `pack` polymorphic
//! - Driver: buffer tepat sebesar `root.size()`, satu kali pass
//! - Collaborators: event producers dan mmap storage di luar core

pub mod config;
pub mod core;
pub mod event;
pub mod protocol;

pub use crate::config::Config;
pub use crate::core::{Error, Result};
pub use crate::protocol::{serialize, Array, Node, Object, Pack, Primitive};
