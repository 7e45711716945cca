//! Little-Endian Byte Encoder
//!
//! Menulis representasi little-endian satu value ke buffer pada posisi
//! cursor, lalu memajukan cursor sebanyak byte yang ditulis.
//!
//! Aturan:
//! - Integer: byte ke-i = bit [8i, 8i+8) dari value
//! - Float: reinterpretasi bit pattern sebagai integer dengan lebar sama
//! - String / slice: tiap elemen di-encode berurutan, tanpa length prefix
//!
//! Bounds dicek sebelum menulis: write yang tidak muat ditolak utuh.

use super::error::{Error, Result};

/// Value yang punya representasi little-endian dengan lebar tetap.
pub trait Encode: Copy {
    /// Jumlah byte yang ditulis per value
    const WIDTH: usize;

    /// Tulis tepat `WIDTH` byte ke `out`.
    fn write_le(self, out: &mut [u8]);
}

macro_rules! impl_encode_int {
    ($($ty:ty => $bits:ty),* $(,)?) => {
        $(
            impl Encode for $ty {
                const WIDTH: usize = std::mem::size_of::<$ty>();

                #[inline(always)]
                fn write_le(self, out: &mut [u8]) {
                    let bits = self as $bits;
                    for (i, byte) in out.iter_mut().take(Self::WIDTH).enumerate() {
                        *byte = ((bits >> (8 * i)) & 0xFF) as u8;
                    }
                }
            }
        )*
    };
}

impl_encode_int! {
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
}

impl Encode for f32 {
    const WIDTH: usize = 4;

    #[inline(always)]
    fn write_le(self, out: &mut [u8]) {
        self.to_bits().write_le(out);
    }
}

impl Encode for f64 {
    const WIDTH: usize = 8;

    #[inline(always)]
    fn write_le(self, out: &mut [u8]) {
        self.to_bits().write_le(out);
    }
}

impl Encode for bool {
    const WIDTH: usize = 1;

    #[inline(always)]
    fn write_le(self, out: &mut [u8]) {
        (self as u8).write_le(out);
    }
}

/// Cek ruang tersisa, return posisi akhir write.
#[inline(always)]
fn reserve(len: usize, at: usize, needed: usize) -> Result<usize> {
    let available = len.saturating_sub(at);
    if needed > available {
        return Err(Error::BoundsViolation {
            at,
            needed,
            available,
        });
    }
    Ok(at + needed)
}

/// Encode satu value ke `buffer[*cursor..]` dan majukan cursor.
#[inline(always)]
pub fn encode<T: Encode>(buffer: &mut [u8], cursor: &mut usize, value: T) -> Result<()> {
    let end = reserve(buffer.len(), *cursor, T::WIDTH)?;
    value.write_le(&mut buffer[*cursor..end]);
    *cursor = end;
    Ok(())
}

/// Copy raw bytes apa adanya (payload yang sudah di-encode).
#[inline(always)]
pub fn encode_bytes(buffer: &mut [u8], cursor: &mut usize, bytes: &[u8]) -> Result<()> {
    let end = reserve(buffer.len(), *cursor, bytes.len())?;
    buffer[*cursor..end].copy_from_slice(bytes);
    *cursor = end;
    Ok(())
}

/// Tiap karakter (byte UTF-8) sebagai value 8-bit. Tidak ada length prefix.
#[inline(always)]
pub fn encode_str(buffer: &mut [u8], cursor: &mut usize, value: &str) -> Result<()> {
    encode_bytes(buffer, cursor, value.as_bytes())
}

/// Encode sequence homogen tanpa separator maupun count.
pub fn encode_slice<T: Encode>(buffer: &mut [u8], cursor: &mut usize, values: &[T]) -> Result<()> {
    let needed = values
        .len()
        .checked_mul(T::WIDTH)
        .ok_or(Error::SizeOverflow { size: usize::MAX })?;
    let end = reserve(buffer.len(), *cursor, needed)?;

    for (value, out) in values
        .iter()
        .zip(buffer[*cursor..end].chunks_exact_mut(T::WIDTH))
    {
        value.write_le(out);
    }

    *cursor = end;
    Ok(())
}

/// Pre-allocated encoder buffer
///
/// Kapasitas tetap sejak `new`, tidak pernah grow. Write yang melewati
/// kapasitas menghasilkan `Error::BoundsViolation`.
pub struct Encoder {
    buffer: Box<[u8]>,
    write_pos: usize,
}

impl Encoder {
    /// Membuat encoder dengan buffer size tertentu
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: vec![0u8; capacity].into_boxed_slice(),
            write_pos: 0,
        }
    }

    /// Reset encoder untuk reuse
    #[inline(always)]
    pub fn reset(&mut self) {
        self.write_pos = 0;
    }

    #[inline(always)]
    pub fn put<T: Encode>(&mut self, value: T) -> Result<()> {
        encode(&mut self.buffer, &mut self.write_pos, value)
    }

    #[inline(always)]
    pub fn put_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        encode_bytes(&mut self.buffer, &mut self.write_pos, bytes)
    }

    #[inline(always)]
    pub fn put_str(&mut self, value: &str) -> Result<()> {
        encode_str(&mut self.buffer, &mut self.write_pos, value)
    }

    #[inline(always)]
    pub fn put_slice<T: Encode>(&mut self, values: &[T]) -> Result<()> {
        encode_slice(&mut self.buffer, &mut self.write_pos, values)
    }

    /// Posisi cursor saat ini
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.write_pos
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Available space in buffer
    #[inline(always)]
    pub fn available(&self) -> usize {
        self.buffer.len() - self.write_pos
    }

    /// Get current buffer content
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.write_pos]
    }

    /// Ambil seluruh buffer (termasuk bagian yang belum ditulis)
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encode_i32_little_endian() {
        let mut buf = [0u8; 4];
        let mut cursor = 0;
        encode(&mut buf, &mut cursor, 0x0102_0304i32).unwrap();

        assert_eq!(buf, [0x04, 0x03, 0x02, 0x01]);
        assert_eq!(cursor, 4);
    }

    #[test]
    fn test_encode_negative_keeps_twos_complement() {
        let mut buf = [0u8; 2];
        let mut cursor = 0;
        encode(&mut buf, &mut cursor, -2i16).unwrap();
        assert_eq!(buf, [0xFE, 0xFF]);
    }

    #[test]
    fn test_encode_bool() {
        let mut buf = [0xAAu8; 2];
        let mut cursor = 0;
        encode(&mut buf, &mut cursor, true).unwrap();
        encode(&mut buf, &mut cursor, false).unwrap();
        assert_eq!(buf, [1, 0]);
    }

    #[test]
    fn test_bounds_rejected_before_write() {
        let mut buf = [0u8; 6];
        let mut cursor = 3;
        let err = encode(&mut buf, &mut cursor, u32::MAX).unwrap_err();

        assert!(matches!(
            err,
            Error::BoundsViolation {
                at: 3,
                needed: 4,
                available: 3
            }
        ));
        // Tidak ada byte yang berubah, cursor tetap
        assert_eq!(buf, [0u8; 6]);
        assert_eq!(cursor, 3);
    }

    #[test]
    fn test_slice_rejected_as_a_whole() {
        let mut buf = [0u8; 5];
        let mut cursor = 0;
        assert!(encode_slice(&mut buf, &mut cursor, &[1u16, 2, 3]).is_err());
        assert_eq!(buf, [0u8; 5]);
        assert_eq!(cursor, 0);
    }

    #[test]
    fn test_encode_slice_in_order() {
        let mut buf = [0u8; 6];
        let mut cursor = 0;
        encode_slice(&mut buf, &mut cursor, &[0x0102u16, 0x0304, 0x0506]).unwrap();
        assert_eq!(buf, [0x02, 0x01, 0x04, 0x03, 0x06, 0x05]);
        assert_eq!(cursor, 6);
    }

    #[test]
    fn test_encode_str_no_prefix() {
        let mut buf = [0u8; 4];
        let mut cursor = 0;
        encode_str(&mut buf, &mut cursor, "Test").unwrap();
        assert_eq!(&buf, b"Test");
    }

    #[test]
    fn test_encoder_tracks_position() {
        let mut encoder = Encoder::new(16);
        encoder.put(1u8).unwrap();
        encoder.put(2u64).unwrap();
        encoder.put_str("ab").unwrap();

        assert_eq!(encoder.position(), 11);
        assert_eq!(encoder.available(), 5);
        assert_eq!(&encoder.as_bytes()[..3], &[1, 2, 0]);

        encoder.reset();
        assert_eq!(encoder.position(), 0);
        assert_eq!(encoder.capacity(), 16);
    }

    proptest! {
        #[test]
        fn prop_first_byte_is_lowest(v16 in any::<u16>(), v32 in any::<i32>(), v64 in any::<u64>()) {
            let mut buf = [0u8; 8];

            let mut cursor = 0;
            encode(&mut buf, &mut cursor, v16).unwrap();
            prop_assert_eq!(buf[0], (v16 & 0xFF) as u8);

            let mut cursor = 0;
            encode(&mut buf, &mut cursor, v32).unwrap();
            prop_assert_eq!(buf[0], (v32 & 0xFF) as u8);
            prop_assert_eq!(&buf[..4], &v32.to_le_bytes()[..]);

            let mut cursor = 0;
            encode(&mut buf, &mut cursor, v64).unwrap();
            prop_assert_eq!(buf, v64.to_le_bytes());
        }

        #[test]
        fn prop_float_matches_bit_pattern(f in any::<f32>(), d in any::<f64>()) {
            let mut a = [0u8; 4];
            let mut b = [0u8; 4];
            encode(&mut a, &mut 0, f).unwrap();
            encode(&mut b, &mut 0, f.to_bits()).unwrap();
            prop_assert_eq!(a, b);

            let mut a = [0u8; 8];
            let mut b = [0u8; 8];
            encode(&mut a, &mut 0, d).unwrap();
            encode(&mut b, &mut 0, d.to_bits() as i64).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
