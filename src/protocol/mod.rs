//! Protocol Layer: Self-Describing Tree Encoding
//!
//! Prinsip desain:
//! - Closed variant set: Primitive, Array/String, Object
//! - Size dihitung sekali saat konstruksi, tidak pernah di-scan ulang
//! - Record ditulis depth-first, `size` selalu field terakhir

mod array;
mod node;
mod object;
mod primitive;
mod serializer;
mod tags;

pub use array::Array;
pub use node::{Node, Pack};
pub use object::Object;
pub use primitive::Primitive;
pub use serializer::{serialize, serialize_all};
pub use tags::{
    Scalar, TypeTag, Wrapper, MAX_ARRAY_COUNT, MAX_NAME_LENGTH, MAX_OBJECT_COUNT, MAX_RECORD_SIZE,
};
