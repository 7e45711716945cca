//! Wire Tags & Record Layout
//!
//! Layout per varian (semua integer little-endian, tanpa padding):
//! ┌───────────┬──────────────────────────────────────────────────────────────┐
//! │ Primitive │ name, nameLength:i16, wrapper:i8, type:i8, payload, size:i32 │
//! │ Array     │ name, nameLength:i16, wrapper:i8, type:i8, count:i32,        │
//! │           │ payload[count * width], size:i32                             │
//! │ String    │ sama dengan Array, width = 1, wrapper = String               │
//! │ Object    │ name, nameLength:i16, wrapper:i8, count:i16, [children],     │
//! │           │ size:i32                                                     │
//! └───────────┴──────────────────────────────────────────────────────────────┘
//!
//! `size` selalu field terakhir dan menghitung seluruh record termasuk
//! dirinya sendiri.

use std::mem;

use crate::core::Encode;

/// Varian node (one-byte discriminator)
#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrapper {
    Primitive = 1,
    Array = 2,
    String = 3,
    Object = 4,
}

impl Wrapper {
    #[inline(always)]
    pub fn from_i8(v: i8) -> Option<Self> {
        match v {
            1 => Some(Self::Primitive),
            2 => Some(Self::Array),
            3 => Some(Self::String),
            4 => Some(Self::Object),
            _ => None,
        }
    }
}

/// Jenis scalar payload Primitive/Array
///
/// Signed kinds memakai nilai 1-7. Unsigned kinds punya tag sendiri (8-11)
/// supaya signedness bisa dibaca dari tag.
#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    I8 = 1,
    I16 = 2,
    I32 = 3,
    I64 = 4,
    F32 = 5,
    F64 = 6,
    Bool = 7,
    U8 = 8,
    U16 = 9,
    U32 = 10,
    U64 = 11,
}

impl TypeTag {
    #[inline(always)]
    pub fn from_i8(v: i8) -> Option<Self> {
        match v {
            1 => Some(Self::I8),
            2 => Some(Self::I16),
            3 => Some(Self::I32),
            4 => Some(Self::I64),
            5 => Some(Self::F32),
            6 => Some(Self::F64),
            7 => Some(Self::Bool),
            8 => Some(Self::U8),
            9 => Some(Self::U16),
            10 => Some(Self::U32),
            11 => Some(Self::U64),
            _ => None,
        }
    }

    /// Lebar satu elemen dalam bytes
    #[inline(always)]
    pub fn width(self) -> usize {
        match self {
            Self::I8 | Self::U8 | Self::Bool => 1,
            Self::I16 | Self::U16 => 2,
            Self::I32 | Self::U32 | Self::F32 => 4,
            Self::I64 | Self::U64 | Self::F64 => 8,
        }
    }
}

/// Scalar yang bisa jadi payload Primitive atau elemen Array.
pub trait Scalar: Encode {
    const TYPE: TypeTag;
}

macro_rules! impl_scalar {
    ($($ty:ty => $tag:ident),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const TYPE: TypeTag = TypeTag::$tag;
            }
        )*
    };
}

impl_scalar! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    bool => Bool,
}

pub const NAME_LENGTH_SIZE: usize = mem::size_of::<i16>();
pub const WRAPPER_SIZE: usize = mem::size_of::<i8>();
pub const TYPE_TAG_SIZE: usize = mem::size_of::<i8>();
pub const SIZE_FIELD_SIZE: usize = mem::size_of::<i32>();
pub const ARRAY_COUNT_SIZE: usize = mem::size_of::<i32>();
pub const OBJECT_COUNT_SIZE: usize = mem::size_of::<i16>();

pub const MAX_NAME_LENGTH: usize = i16::MAX as usize; // 32767
pub const MAX_ARRAY_COUNT: usize = i32::MAX as usize;
pub const MAX_OBJECT_COUNT: usize = i16::MAX as usize;
pub const MAX_RECORD_SIZE: usize = i32::MAX as usize;
