//! Primitive: leaf node berisi satu scalar.

use tracing::trace;

use super::node::{checked_pack, record_size, Header, Pack};
use super::tags::{Scalar, TypeTag, Wrapper, TYPE_TAG_SIZE};
use crate::core::{encode, Encoder, Result};

#[derive(Debug, Clone)]
pub struct Primitive {
    header: Header,
    type_tag: TypeTag,
    /// Bit pattern little-endian dari value
    data: Box<[u8]>,
    size: usize,
}

impl Primitive {
    /// Membuat Primitive; type tag diambil dari tipe Rust `T`.
    pub fn create<T: Scalar>(name: impl Into<String>, value: T) -> Result<Self> {
        let header = Header::new(name.into(), Wrapper::Primitive)?;

        let mut data = vec![0u8; T::WIDTH].into_boxed_slice();
        encode(&mut data, &mut 0, value)?;

        let size = record_size(&[header.fixed_len(), TYPE_TAG_SIZE, data.len()])?;

        Ok(Self {
            header,
            type_tag: T::TYPE,
            data,
            size,
        })
    }

    #[inline(always)]
    pub fn name_length(&self) -> i16 {
        self.header.name_length()
    }

    #[inline(always)]
    pub fn wrapper(&self) -> Wrapper {
        self.header.wrapper()
    }

    #[inline(always)]
    pub fn type_tag(&self) -> TypeTag {
        self.type_tag
    }

    /// Raw payload bytes (little-endian)
    #[inline(always)]
    pub fn payload(&self) -> &[u8] {
        &self.data
    }
}

impl Pack for Primitive {
    fn name(&self) -> &str {
        self.header.name()
    }

    fn size(&self) -> usize {
        self.size
    }

    fn pack(&self, encoder: &mut Encoder) -> Result<()> {
        trace!(node = self.name(), size = self.size, at = encoder.position(), "pack primitive");

        checked_pack(self.name(), self.size, encoder, |encoder| {
            self.header.write_lead(encoder)?;
            encoder.put(self.type_tag as i8)?;
            encoder.put_bytes(&self.data)?;
            encoder.put(self.size as i32)
        })
    }
}
