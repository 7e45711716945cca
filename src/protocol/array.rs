//! Array / String: leaf node berisi sequence homogen.
//!
//! String memakai struktur yang sama dengan Array (element width 1);
//! hanya wrapper tag yang membedakan.

use tracing::trace;

use super::node::{checked_pack, record_size, Header, Pack};
use super::tags::{Scalar, TypeTag, Wrapper, ARRAY_COUNT_SIZE, MAX_ARRAY_COUNT, TYPE_TAG_SIZE};
use crate::core::{encode_slice, Encoder, Error, Result};

#[derive(Debug, Clone)]
pub struct Array {
    header: Header,
    type_tag: TypeTag,
    count: i32,
    /// `count * width` bytes, little-endian per elemen
    data: Box<[u8]>,
    size: usize,
}

impl Array {
    /// Array of scalars, type tag dari `T`.
    pub fn create<T: Scalar>(name: impl Into<String>, values: &[T]) -> Result<Self> {
        let header = Header::new(name.into(), Wrapper::Array)?;
        let count = checked_count(values.len())?;

        let len = values
            .len()
            .checked_mul(T::WIDTH)
            .ok_or(Error::SizeOverflow { size: usize::MAX })?;
        let mut data = vec![0u8; len].into_boxed_slice();
        encode_slice(&mut data, &mut 0, values)?;

        Self::with_payload(header, T::TYPE, count, data)
    }

    /// String: tiap byte UTF-8 jadi satu elemen 8-bit.
    pub fn create_string(name: impl Into<String>, value: &str) -> Result<Self> {
        let header = Header::new(name.into(), Wrapper::String)?;
        let count = checked_count(value.len())?;
        let data = value.as_bytes().to_vec().into_boxed_slice();

        Self::with_payload(header, TypeTag::I8, count, data)
    }

    fn with_payload(header: Header, type_tag: TypeTag, count: i32, data: Box<[u8]>) -> Result<Self> {
        let size = record_size(&[header.fixed_len(), TYPE_TAG_SIZE, ARRAY_COUNT_SIZE, data.len()])?;

        Ok(Self {
            header,
            type_tag,
            count,
            data,
            size,
        })
    }

    #[inline(always)]
    pub fn name_length(&self) -> i16 {
        self.header.name_length()
    }

    /// `Wrapper::Array` atau `Wrapper::String`
    #[inline(always)]
    pub fn wrapper(&self) -> Wrapper {
        self.header.wrapper()
    }

    #[inline(always)]
    pub fn type_tag(&self) -> TypeTag {
        self.type_tag
    }

    /// Jumlah elemen
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.count as usize
    }

    #[inline(always)]
    pub fn payload(&self) -> &[u8] {
        &self.data
    }
}

fn checked_count(len: usize) -> Result<i32> {
    if len > MAX_ARRAY_COUNT {
        return Err(Error::TooManyEntries {
            count: len,
            max: MAX_ARRAY_COUNT,
        });
    }
    Ok(len as i32)
}

impl Pack for Array {
    fn name(&self) -> &str {
        self.header.name()
    }

    fn size(&self) -> usize {
        self.size
    }

    fn pack(&self, encoder: &mut Encoder) -> Result<()> {
        trace!(node = self.name(), count = self.count, size = self.size, "pack array");

        checked_pack(self.name(), self.size, encoder, |encoder| {
            self.header.write_lead(encoder)?;
            encoder.put(self.type_tag as i8)?;
            encoder.put(self.count)?;
            encoder.put_bytes(&self.data)?;
            encoder.put(self.size as i32)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u16_array_layout() {
        let a = Array::create("ids", &[1u16, 0x0203]).unwrap();
        assert_eq!(a.wrapper(), Wrapper::Array);
        assert_eq!(a.type_tag(), TypeTag::U16);
        assert_eq!(a.count(), 2);
        // name 3 + nameLength 2 + wrapper 1 + type 1 + count 4 + payload 4 + size 4
        assert_eq!(a.size(), 19);

        let mut encoder = Encoder::new(a.size());
        a.pack(&mut encoder).unwrap();
        assert_eq!(
            encoder.as_bytes(),
            &[
                b'i', b'd', b's', 3, 0, 2, 9, 2, 0, 0, 0, 1, 0, 0x03, 0x02, 19, 0, 0, 0
            ]
        );
    }

    #[test]
    fn test_string_layout() {
        let s = Array::create_string("msg", "hey").unwrap();
        assert_eq!(s.wrapper(), Wrapper::String);
        assert_eq!(s.type_tag(), TypeTag::I8);
        assert_eq!(s.count(), 3);
        assert_eq!(s.payload(), b"hey");

        let mut encoder = Encoder::new(s.size());
        s.pack(&mut encoder).unwrap();
        assert_eq!(encoder.as_bytes()[5], Wrapper::String as u8);
        assert_eq!(&encoder.as_bytes()[7..11], &[3, 0, 0, 0]);
        assert_eq!(&encoder.as_bytes()[11..14], b"hey");
    }

    #[test]
    fn test_empty_array() {
        let a = Array::create::<f32>("none", &[]).unwrap();
        assert_eq!(a.count(), 0);
        assert!(a.payload().is_empty());
        assert_eq!(a.size(), 4 + 2 + 1 + 1 + 4 + 4);
    }

    #[test]
    fn test_float_elements_use_bit_pattern() {
        let a = Array::create("f", &[1.5f32, -0.0]).unwrap();
        let mut expected = 1.5f32.to_bits().to_le_bytes().to_vec();
        expected.extend_from_slice(&(-0.0f32).to_bits().to_le_bytes());
        assert_eq!(a.payload(), expected.as_slice());
    }
}
