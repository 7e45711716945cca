//! Node model: header bersama dan dispatch `pack` ke tiap varian.

use tracing::error;

use super::array::Array;
use super::object::Object;
use super::primitive::Primitive;
use super::tags::{
    Wrapper, MAX_NAME_LENGTH, MAX_RECORD_SIZE, NAME_LENGTH_SIZE, SIZE_FIELD_SIZE, WRAPPER_SIZE,
};
use crate::core::{Encoder, Error, Result};

/// Node yang bisa menulis record-nya sendiri ke encoder.
pub trait Pack {
    fn name(&self) -> &str;

    /// Total byte record ini, termasuk field `size` di akhir.
    fn size(&self) -> usize;

    /// Tulis record mulai dari posisi cursor encoder saat ini.
    fn pack(&self, encoder: &mut Encoder) -> Result<()>;
}

/// Field yang dimiliki semua varian: name, nameLength, wrapper.
#[derive(Debug, Clone)]
pub(crate) struct Header {
    name: String,
    name_length: i16,
    wrapper: Wrapper,
}

impl Header {
    pub(crate) fn new(name: String, wrapper: Wrapper) -> Result<Self> {
        if name.len() > MAX_NAME_LENGTH {
            return Err(Error::NameTooLong { len: name.len() });
        }
        let name_length = name.len() as i16;
        Ok(Self {
            name,
            name_length,
            wrapper,
        })
    }

    #[inline(always)]
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    #[inline(always)]
    pub(crate) fn name_length(&self) -> i16 {
        self.name_length
    }

    #[inline(always)]
    pub(crate) fn wrapper(&self) -> Wrapper {
        self.wrapper
    }

    /// Byte yang dipakai header + trailing size field.
    #[inline(always)]
    pub(crate) fn fixed_len(&self) -> usize {
        self.name.len() + NAME_LENGTH_SIZE + WRAPPER_SIZE + SIZE_FIELD_SIZE
    }

    /// name bytes, nameLength, wrapper
    #[inline(always)]
    pub(crate) fn write_lead(&self, encoder: &mut Encoder) -> Result<()> {
        encoder.put_str(&self.name)?;
        encoder.put(self.name_length)?;
        encoder.put(self.wrapper as i8)
    }
}

/// Jumlahkan bagian-bagian record, tolak yang tidak muat di `size:i32`.
pub(crate) fn record_size(parts: &[usize]) -> Result<usize> {
    let size = parts
        .iter()
        .try_fold(0usize, |acc, &part| acc.checked_add(part))
        .ok_or(Error::SizeOverflow { size: usize::MAX })?;

    if size > MAX_RECORD_SIZE {
        return Err(Error::SizeOverflow { size });
    }
    Ok(size)
}

/// Jalankan `body`, lalu pastikan jumlah byte yang ditulis sama dengan `size`.
pub(crate) fn checked_pack<F>(name: &str, size: usize, encoder: &mut Encoder, body: F) -> Result<()>
where
    F: FnOnce(&mut Encoder) -> Result<()>,
{
    let start = encoder.position();
    body(encoder)?;
    let written = encoder.position() - start;

    if written != size {
        error!(record = name, expected = size, written, "size accounting mismatch");
        debug_assert_eq!(written, size, "record `{}` wrote wrong byte count", name);
        return Err(Error::InvalidSizeAccounting {
            expected: size,
            written,
        });
    }
    Ok(())
}

/// Satu unit tree yang self-describing.
///
/// Set varian tertutup: String adalah `Array` dengan wrapper `String`.
#[derive(Debug, Clone)]
pub enum Node {
    Primitive(Primitive),
    Array(Array),
    Object(Object),
}

impl Node {
    pub fn wrapper(&self) -> Wrapper {
        match self {
            Node::Primitive(p) => p.wrapper(),
            Node::Array(a) => a.wrapper(),
            Node::Object(o) => o.wrapper(),
        }
    }

    pub fn as_primitive(&self) -> Option<&Primitive> {
        match self {
            Node::Primitive(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Node::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Node::Object(o) => Some(o),
            _ => None,
        }
    }
}

impl Pack for Node {
    fn name(&self) -> &str {
        match self {
            Node::Primitive(p) => p.name(),
            Node::Array(a) => a.name(),
            Node::Object(o) => o.name(),
        }
    }

    fn size(&self) -> usize {
        match self {
            Node::Primitive(p) => p.size(),
            Node::Array(a) => a.size(),
            Node::Object(o) => o.size(),
        }
    }

    fn pack(&self, encoder: &mut Encoder) -> Result<()> {
        match self {
            Node::Primitive(p) => p.pack(encoder),
            Node::Array(a) => a.pack(encoder),
            Node::Object(o) => o.pack(encoder),
        }
    }
}

impl From<Primitive> for Node {
    fn from(p: Primitive) -> Self {
        Node::Primitive(p)
    }
}

impl From<Array> for Node {
    fn from(a: Array) -> Self {
        Node::Array(a)
    }
}

impl From<Object> for Node {
    fn from(o: Object) -> Self {
        Node::Object(o)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_rejects_long_name() {
        let name = "x".repeat(MAX_NAME_LENGTH + 1);
        let err = Header::new(name, Wrapper::Primitive).unwrap_err();
        assert!(matches!(err, Error::NameTooLong { len: 32768 }));
    }

    #[test]
    fn test_header_accepts_max_name() {
        let name = "x".repeat(MAX_NAME_LENGTH);
        let header = Header::new(name, Wrapper::Object).unwrap();
        assert_eq!(header.name_length(), i16::MAX);
        assert_eq!(header.fixed_len(), MAX_NAME_LENGTH + 7);
    }

    #[test]
    fn test_record_size_limits() {
        assert_eq!(record_size(&[4, 5, 8]).unwrap(), 17);
        assert!(matches!(
            record_size(&[MAX_RECORD_SIZE, 1]),
            Err(Error::SizeOverflow { .. })
        ));
        assert!(record_size(&[usize::MAX, 1]).is_err());
    }

    #[test]
    fn test_checked_pack_passes_on_exact_count() {
        let mut encoder = Encoder::new(8);
        checked_pack("ok", 4, &mut encoder, |e| e.put(7u32)).unwrap();
        assert_eq!(encoder.position(), 4);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_checked_pack_reports_mismatch() {
        let mut encoder = Encoder::new(8);
        let err = checked_pack("bad", 6, &mut encoder, |e| e.put(7u32)).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidSizeAccounting {
                expected: 6,
                written: 4
            }
        ));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "wrote wrong byte count")]
    fn test_checked_pack_panics_in_debug() {
        let mut encoder = Encoder::new(8);
        let _ = checked_pack("bad", 6, &mut encoder, |e| e.put(7u32));
    }
}
