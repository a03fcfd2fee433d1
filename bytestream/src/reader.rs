//! Byte-level reader with bounded operations.

use crate::error::{ByteError, ByteResult};

/// A byte-level reader for decoding fixed-width little-endian data.
///
/// All read operations are bounds-checked and return errors on failure.
/// The reader never panics on malformed input.
#[derive(Debug)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a new `ByteReader` from a byte slice.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of bytes remaining to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the current byte position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    fn take(&mut self, count: usize) -> ByteResult<&'a [u8]> {
        if count > self.remaining() {
            return Err(ByteError::UnexpectedEof {
                requested: count,
                available: self.remaining(),
            });
        }
        let slice = &self.data[self.pos..self.pos + count];
        self.pos += count;
        Ok(slice)
    }

    /// Reads a single byte.
    pub fn read_u8(&mut self) -> ByteResult<u8> {
        Ok(self.take(1)?[0])
    }

    /// Reads a `u16` in little-endian order.
    pub fn read_u16_le(&mut self) -> ByteResult<u16> {
        let bytes = self.take(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    /// Reads an `i16` in little-endian order.
    pub fn read_i16_le(&mut self) -> ByteResult<i16> {
        let bytes = self.take(2)?;
        Ok(i16::from_le_bytes([bytes[0], bytes[1]]))
    }

    /// Reads an `f32` in little-endian IEEE-754 order.
    pub fn read_f32_le(&mut self) -> ByteResult<f32> {
        let bytes = self.take(4)?;
        Ok(f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }
}
