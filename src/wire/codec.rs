//! Little-endian primitive reader/writer with Decred's compact varints.

use super::hash::{HASH_SIZE, Hash};
use super::WireError;

pub(crate) struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        if self.remaining() < n {
            return Err(WireError::UnexpectedEof {
                needed: n,
                remaining: self.remaining(),
            });
        }
        let bytes = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], WireError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, WireError> {
        Ok(u16::from_le_bytes(self.take_array()?))
    }

    pub fn read_u32(&mut self) -> Result<u32, WireError> {
        Ok(u32::from_le_bytes(self.take_array()?))
    }

    pub fn read_u64(&mut self) -> Result<u64, WireError> {
        Ok(u64::from_le_bytes(self.take_array()?))
    }

    pub fn read_i64(&mut self) -> Result<i64, WireError> {
        Ok(i64::from_le_bytes(self.take_array()?))
    }

    pub fn read_hash(&mut self) -> Result<Hash, WireError> {
        Ok(Hash::new(self.take_array::<HASH_SIZE>()?))
    }

    /// Reads a compact varint, rejecting encodings that are not minimal.
    pub fn read_var_int(&mut self) -> Result<u64, WireError> {
        let discriminant = self.read_u8()?;
        let (value, min) = match discriminant {
            0xff => (self.read_u64()?, 0x1_0000_0000),
            0xfe => (u64::from(self.read_u32()?), 0x1_0000),
            0xfd => (u64::from(self.read_u16()?), 0xfd),
            n => return Ok(u64::from(n)),
        };
        if value < min {
            return Err(WireError::NonCanonicalVarInt { discriminant, value });
        }
        Ok(value)
    }

    /// Reads an element count and makes sure `count` elements of at least
    /// `min_size` bytes each could still be present.
    pub fn read_count(&mut self, what: &'static str, min_size: usize) -> Result<usize, WireError> {
        let count = self.read_var_int()?;
        let fits = usize::try_from(count)
            .ok()
            .filter(|c| c.saturating_mul(min_size) <= self.remaining());
        fits.ok_or(WireError::TooMany { what, count })
    }

    pub fn read_var_bytes(&mut self, what: &'static str) -> Result<Vec<u8>, WireError> {
        let len = self.read_var_int()?;
        let len = usize::try_from(len).map_err(|_| WireError::TooMany { what, count: len })?;
        Ok(self.take(len)?.to_vec())
    }
}

#[derive(Default)]
pub(crate) struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }

    pub fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    pub fn write_u16(&mut self, v: u16) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_i64(&mut self, v: i64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_hash(&mut self, hash: &Hash) {
        self.buf.extend_from_slice(hash.as_bytes());
    }

    pub fn write_var_int(&mut self, v: u64) {
        match v {
            0..=0xfc => self.write_u8(v as u8),
            0xfd..=0xffff => {
                self.write_u8(0xfd);
                self.write_u16(v as u16);
            }
            0x1_0000..=0xffff_ffff => {
                self.write_u8(0xfe);
                self.write_u32(v as u32);
            }
            _ => {
                self.write_u8(0xff);
                self.buf.extend_from_slice(&v.to_le_bytes());
            }
        }
    }

    pub fn write_var_bytes(&mut self, bytes: &[u8]) {
        self.write_var_int(bytes.len() as u64);
        self.buf.extend_from_slice(bytes);
    }
}
