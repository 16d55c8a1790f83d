//! A position-tracking reader over a borrowed byte slice.

use byteorder::{ByteOrder, LE};

use crate::error::{DecodeError, Result};

/// Reads fixed-width little-endian integers and sub-slices out of a byte
/// slice, advancing an internal offset and failing with a short-read error
/// when the slice runs out.
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Wraps `buf` in a cursor starting at offset 0.
    pub fn new(buf: &'a [u8]) -> Self {
        ByteCursor { buf, pos: 0 }
    }

    /// The current offset into the underlying buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The number of unread bytes remaining.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn take(&mut self, field: &'static str, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(DecodeError::ShortRead(field, n, self.remaining()));
        }
        let out = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    /// Reads one byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take("u8", 1)?[0])
    }

    /// Reads a little-endian u16.
    pub fn read_u16_le(&mut self) -> Result<u16> {
        Ok(LE::read_u16(self.take("u16", 2)?))
    }

    /// Reads a little-endian u32.
    pub fn read_u32_le(&mut self) -> Result<u32> {
        Ok(LE::read_u32(self.take("u32", 4)?))
    }

    /// Reads a little-endian u64.
    pub fn read_u64_le(&mut self) -> Result<u64> {
        Ok(LE::read_u64(self.take("u64", 8)?))
    }

    /// Reads `n` raw bytes.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        self.take("bytes", n)
    }

    /// Returns every remaining byte and advances the cursor to the end.
    pub fn take_remaining(&mut self) -> &'a [u8] {
        let out = &self.buf[self.pos..];
        self.pos = self.buf.len();
        out
    }

    /// Looks at the next `n` bytes without advancing the cursor.
    pub fn peek(&self, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(DecodeError::ShortRead("peek", n, self.remaining()));
        }
        Ok(&self.buf[self.pos..self.pos + n])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_advance_position() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        let mut c = ByteCursor::new(&data);
        assert_eq!(c.read_u8().unwrap(), 0x01);
        assert_eq!(c.position(), 1);
        assert_eq!(c.read_u16_le().unwrap(), 0x0302);
        assert_eq!(c.position(), 3);
        assert_eq!(c.read_u32_le().unwrap(), 0x0807_0605);
        assert_eq!(c.position(), 7);
        assert_eq!(c.remaining(), 1);
    }

    #[test]
    fn short_read_reports_needed_and_remaining() {
        let data = [0xAAu8];
        let mut c = ByteCursor::new(&data);
        match c.read_u16_le() {
            Err(DecodeError::ShortRead(field, needed, remaining)) => {
                assert_eq!(field, "u16");
                assert_eq!(needed, 2);
                assert_eq!(remaining, 1);
            }
            other => panic!("expected ShortRead, got {:?}", other),
        }
    }

    #[test]
    fn take_remaining_drains_cursor() {
        let data = [1, 2, 3];
        let mut c = ByteCursor::new(&data);
        c.read_u8().unwrap();
        assert_eq!(c.take_remaining(), &[2, 3]);
        assert_eq!(c.remaining(), 0);
    }
}
