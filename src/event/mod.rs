//! Event Layer: producer data untuk object model
//!
//! Events tidak menyentuh encoder secara langsung; mereka hanya menambahkan
//! Primitive/Array nodes ke Object lewat `Populate`.

mod device;
mod system;

pub use device::{DeviceType, Event, KeyboardEvent, Populate};
pub use system::System;
