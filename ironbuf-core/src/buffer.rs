//! Cursor-owning wrappers around the append and get functions.
//!
//! This module provides:
//! - [`BufferWriter`] for packing a sequence of fields into a caller buffer
//! - [`BufferReader`] for unpacking them in the same order under a limit
//!
//! Both forward to [`crate::encoder`] and [`crate::decoder`], so the bytes
//! and cursor behaviour are identical to calling the free functions with a
//! hand-held cursor.

use crate::bounds::{LEGACY_BUFFER_LIMIT, Limit};
use crate::decoder;
use crate::encoder;
use crate::error::{Error, Result};

/// Converts a slice length into a cursor limit.
fn slice_limit(len: usize) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}

/// Write cursor over a caller-owned buffer.
///
/// The `append_*` methods do not check bounds and panic on overrun; the
/// `try_append_*` methods return an error instead and leave the cursor in
/// place.
///
/// # Example
/// ```
/// use ironbuf_core::buffer::BufferWriter;
///
/// let mut buf = [0u8; 8];
/// let mut writer = BufferWriter::new(&mut buf, 0);
/// writer.append_int32(-1);
/// writer.append_float16(1.5, 10.0);
/// assert_eq!(writer.bytes_written(), 6);
/// assert!(writer.try_append_uint32(7).is_err());
/// ```
#[derive(Debug)]
pub struct BufferWriter<'a> {
    buffer: &'a mut [u8],
    offset: i32,
    position: i32,
}

impl<'a> BufferWriter<'a> {
    /// Creates a new writer.
    ///
    /// # Arguments
    /// * `buffer` - Mutable byte buffer to write to
    /// * `offset` - Starting cursor in the buffer
    #[must_use]
    pub fn new(buffer: &'a mut [u8], offset: i32) -> Self {
        Self {
            buffer,
            offset,
            position: offset,
        }
    }

    /// Returns the underlying buffer.
    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        self.buffer
    }

    /// Returns the bytes written since the starting offset.
    #[must_use]
    pub fn written(&self) -> &[u8] {
        let start = usize::try_from(self.offset).unwrap_or(0);
        let end = usize::try_from(self.position).unwrap_or(0);
        self.buffer.get(start..end).unwrap_or(&[])
    }

    /// Returns the starting offset.
    #[must_use]
    pub const fn offset(&self) -> i32 {
        self.offset
    }

    /// Returns the current cursor.
    #[must_use]
    pub const fn position(&self) -> i32 {
        self.position
    }

    /// Returns the number of bytes written.
    #[must_use]
    pub const fn bytes_written(&self) -> i32 {
        self.position - self.offset
    }

    /// Returns the number of bytes left after the cursor.
    #[must_use]
    pub fn remaining(&self) -> usize {
        usize::try_from(self.position)
            .map_or(0, |position| self.buffer.len().saturating_sub(position))
    }

    /// Appends an i16.
    pub fn append_int16(&mut self, value: i16) {
        encoder::append_int16(self.buffer, value, &mut self.position);
    }

    /// Appends a u16.
    pub fn append_uint16(&mut self, value: u16) {
        encoder::append_uint16(self.buffer, value, &mut self.position);
    }

    /// Appends an i32.
    pub fn append_int32(&mut self, value: i32) {
        encoder::append_int32(self.buffer, value, &mut self.position);
    }

    /// Appends a u32.
    pub fn append_uint32(&mut self, value: u32) {
        encoder::append_uint32(self.buffer, value, &mut self.position);
    }

    /// Appends `value * scale` as an i16.
    pub fn append_float16(&mut self, value: f32, scale: f32) {
        encoder::append_float16(self.buffer, value, scale, &mut self.position);
    }

    /// Appends `value * scale` as an i32.
    pub fn append_float32(&mut self, value: f32, scale: f32) {
        encoder::append_float32(self.buffer, value, scale, &mut self.position);
    }

    /// Appends an auto-float word.
    pub fn append_float32_auto(&mut self, value: f32) {
        encoder::append_float32_auto(self.buffer, value, &mut self.position);
    }

    /// Appends a bool byte.
    pub fn append_bool(&mut self, value: bool) {
        encoder::append_bool(self.buffer, value, &mut self.position);
    }

    /// Checked [`Self::append_int16`].
    ///
    /// # Errors
    /// Returns an error if the value does not fit.
    pub fn try_append_int16(&mut self, value: i16) -> Result<()> {
        encoder::try_append_int16(self.buffer, value, &mut self.position)
    }

    /// Checked [`Self::append_uint16`].
    ///
    /// # Errors
    /// Returns an error if the value does not fit.
    pub fn try_append_uint16(&mut self, value: u16) -> Result<()> {
        encoder::try_append_uint16(self.buffer, value, &mut self.position)
    }

    /// Checked [`Self::append_int32`].
    ///
    /// # Errors
    /// Returns an error if the value does not fit.
    pub fn try_append_int32(&mut self, value: i32) -> Result<()> {
        encoder::try_append_int32(self.buffer, value, &mut self.position)
    }

    /// Checked [`Self::append_uint32`].
    ///
    /// # Errors
    /// Returns an error if the value does not fit.
    pub fn try_append_uint32(&mut self, value: u32) -> Result<()> {
        encoder::try_append_uint32(self.buffer, value, &mut self.position)
    }

    /// Checked [`Self::append_float16`].
    ///
    /// # Errors
    /// Returns an error if the value does not fit.
    pub fn try_append_float16(&mut self, value: f32, scale: f32) -> Result<()> {
        encoder::try_append_float16(self.buffer, value, scale, &mut self.position)
    }

    /// Checked [`Self::append_float32`].
    ///
    /// # Errors
    /// Returns an error if the value does not fit.
    pub fn try_append_float32(&mut self, value: f32, scale: f32) -> Result<()> {
        encoder::try_append_float32(self.buffer, value, scale, &mut self.position)
    }

    /// Checked [`Self::append_float32_auto`].
    ///
    /// # Errors
    /// Returns an error if the value does not fit.
    pub fn try_append_float32_auto(&mut self, value: f32) -> Result<()> {
        encoder::try_append_float32_auto(self.buffer, value, &mut self.position)
    }

    /// Checked [`Self::append_bool`].
    ///
    /// # Errors
    /// Returns an error if the value does not fit.
    pub fn try_append_bool(&mut self, value: bool) -> Result<()> {
        encoder::try_append_bool(self.buffer, value, &mut self.position)
    }
}

/// Read cursor over a buffer with a fixed decode limit.
///
/// Reads past the limit never fail; they return zero values and clamp the
/// cursor like the free `get_*` functions.
///
/// # Example
/// ```
/// use ironbuf_core::buffer::BufferReader;
///
/// let data = [0x00, 0x2A, 0x01];
/// let mut reader = BufferReader::new(&data);
/// assert_eq!(reader.get_uint16(), 42);
/// assert!(reader.get_bool());
/// assert!(reader.is_exhausted());
/// assert_eq!(reader.get_int32(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct BufferReader<'a> {
    buffer: &'a [u8],
    position: i32,
    limit: i32,
}

impl<'a> BufferReader<'a> {
    /// Creates a reader limited to the length of `buffer`.
    #[must_use]
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            position: 0,
            limit: slice_limit(buffer.len()),
        }
    }

    /// Creates a reader using the legacy 1024-byte limit.
    #[must_use]
    pub fn legacy(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            position: 0,
            limit: LEGACY_BUFFER_LIMIT,
        }
    }

    /// Creates a reader with an explicit limit.
    ///
    /// # Errors
    /// Returns [`Error::InvalidLimit`] if the limit is negative.
    pub fn with_limit(buffer: &'a [u8], limit: Limit) -> Result<Self> {
        let limit = limit.value();
        if limit < 0 {
            return Err(Error::InvalidLimit {
                limit: i64::from(limit),
            });
        }
        Ok(Self {
            buffer,
            position: 0,
            limit,
        })
    }

    /// Returns the current cursor.
    #[must_use]
    pub const fn position(&self) -> i32 {
        self.position
    }

    /// Moves the cursor.
    pub fn set_position(&mut self, position: i32) {
        self.position = position;
    }

    /// Returns the decode limit.
    #[must_use]
    pub const fn limit(&self) -> i32 {
        self.limit
    }

    /// Returns the number of bytes between the cursor and the limit.
    #[must_use]
    pub fn remaining(&self) -> i32 {
        (self.limit - self.position.max(0)).max(0)
    }

    /// Returns true once the cursor has reached the limit.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.position >= self.limit
    }

    /// Reads an i16.
    pub fn get_int16(&mut self) -> i16 {
        decoder::get_int16_safe(self.buffer, &mut self.position, self.limit)
    }

    /// Reads a u16.
    pub fn get_uint16(&mut self) -> u16 {
        decoder::get_uint16_safe(self.buffer, &mut self.position, self.limit)
    }

    /// Reads an i32.
    pub fn get_int32(&mut self) -> i32 {
        decoder::get_int32_safe(self.buffer, &mut self.position, self.limit)
    }

    /// Reads a u32.
    pub fn get_uint32(&mut self) -> u32 {
        decoder::get_uint32_safe(self.buffer, &mut self.position, self.limit)
    }

    /// Reads a scaled i16 divided by `scale`.
    pub fn get_float16(&mut self, scale: f32) -> f32 {
        decoder::get_float16_safe(self.buffer, scale, &mut self.position, self.limit)
    }

    /// Reads a scaled i32 divided by `scale`.
    pub fn get_float32(&mut self, scale: f32) -> f32 {
        decoder::get_float32_safe(self.buffer, scale, &mut self.position, self.limit)
    }

    /// Reads an auto-float word.
    pub fn get_float32_auto(&mut self) -> f32 {
        decoder::get_float32_auto_safe(self.buffer, &mut self.position, self.limit)
    }

    /// Reads a bool byte.
    pub fn get_bool(&mut self) -> bool {
        decoder::get_bool_safe(self.buffer, &mut self.position, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_sample(buf: &mut [u8]) -> i32 {
        let mut writer = BufferWriter::new(buf, 0);
        writer.append_uint16(0x0402);
        writer.append_float16(36.6, 10.0);
        writer.append_float32(24.125, 1000.0);
        writer.append_float32_auto(-1234.5);
        writer.append_int32(-42);
        writer.append_bool(true);
        writer.append_int16(-300);
        writer.append_uint32(3_000_000_000);
        writer.bytes_written()
    }

    #[test]
    fn test_writer_reader_sequence() {
        let mut buf = [0u8; 64];
        let written = write_sample(&mut buf);
        assert_eq!(written, 2 + 2 + 4 + 4 + 4 + 1 + 2 + 4);

        let mut reader = BufferReader::new(&buf[..written as usize]);
        assert_eq!(reader.get_uint16(), 0x0402);
        assert!((reader.get_float16(10.0) - 36.6).abs() <= 0.1);
        assert!((reader.get_float32(1000.0) - 24.125).abs() <= 0.001);
        assert_eq!(reader.get_float32_auto(), -1234.5);
        assert_eq!(reader.get_int32(), -42);
        assert!(reader.get_bool());
        assert_eq!(reader.get_int16(), -300);
        assert_eq!(reader.get_uint32(), 3_000_000_000);
        assert!(reader.is_exhausted());
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_reader_truncated_input() {
        let mut buf = [0u8; 64];
        write_sample(&mut buf);

        // Cut the frame in the middle of the int32 field.
        let mut reader = BufferReader::new(&buf[..14]);
        reader.set_position(12);
        assert_eq!(reader.get_int32(), 0);
        assert_eq!(reader.position(), 14);
        assert!(!reader.get_bool());
        assert_eq!(reader.position(), 14);
        assert_eq!(reader.get_float32(1.0), 0.0);
    }

    #[test]
    fn test_reader_legacy_limit() {
        let buf = [0u8; 8];
        let mut reader = BufferReader::legacy(&buf);
        assert_eq!(reader.limit(), 1024);
        reader.set_position(6);
        assert_eq!(reader.get_uint32(), 0);
        assert_eq!(reader.position(), 1024);
        assert!(reader.is_exhausted());
    }

    #[test]
    fn test_reader_with_limit() {
        let buf = [0xFFu8; 8];
        let mut reader = BufferReader::with_limit(&buf, Limit::Length(3)).unwrap();
        assert_eq!(reader.remaining(), 3);
        assert_eq!(reader.get_uint16(), 0xFFFF);
        assert_eq!(reader.get_uint16(), 0);
        assert_eq!(reader.position(), 3);

        let reader = BufferReader::with_limit(&buf, Limit::Legacy).unwrap();
        assert_eq!(reader.limit(), LEGACY_BUFFER_LIMIT);

        let err = BufferReader::with_limit(&buf, Limit::Length(-1)).unwrap_err();
        assert_eq!(err, Error::InvalidLimit { limit: -1 });
    }

    #[test]
    fn test_writer_accessors() {
        let mut buf = [0u8; 10];
        let mut writer = BufferWriter::new(&mut buf, 2);
        assert_eq!(writer.offset(), 2);
        assert_eq!(writer.position(), 2);
        assert_eq!(writer.remaining(), 8);

        writer.append_uint16(0xABCD);
        assert_eq!(writer.position(), 4);
        assert_eq!(writer.bytes_written(), 2);
        assert_eq!(writer.written(), &[0xAB, 0xCD]);
        assert_eq!(writer.remaining(), 6);
        assert_eq!(writer.buffer().len(), 10);
    }

    #[test]
    fn test_writer_checked_methods() {
        let mut buf = [0u8; 7];
        let mut writer = BufferWriter::new(&mut buf, 0);
        writer.try_append_int16(1).unwrap();
        writer.try_append_uint16(2).unwrap();
        writer.try_append_bool(false).unwrap();
        assert!(writer.try_append_int32(3).is_err());
        assert!(writer.try_append_float32(3.0, 1.0).is_err());
        assert!(writer.try_append_float32_auto(3.0).is_err());
        assert!(writer.try_append_uint32(3).is_err());
        assert_eq!(writer.position(), 5);
        writer.try_append_float16(0.5, 4.0).unwrap();
        assert_eq!(writer.remaining(), 0);
        assert!(writer.try_append_bool(true).is_err());
        assert_eq!(writer.written(), &[0, 1, 0, 2, 0, 0, 2]);
    }
}
