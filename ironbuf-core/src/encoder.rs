//! Append functions for the buffer wire format.
//!
//! Each `append_*` writes a value big-endian at the cursor and advances the
//! cursor by the width of the type. The unchecked family does no bounds
//! checking: the producer sizes the buffer up front. Writing past the end
//! of the slice panics.
//!
//! The `try_append_*` family writes the same bytes but first verifies the
//! value fits, returning an [`Error`] and leaving buffer and cursor untouched
//! when it does not.
//!
//! # Example
//! ```
//! use ironbuf_core::encoder::{append_bool, append_float32, append_uint16};
//!
//! let mut buffer = [0u8; 7];
//! let mut index = 0;
//! append_uint16(&mut buffer, 0xBEEF, &mut index);
//! append_float32(&mut buffer, 12.5, 100.0, &mut index);
//! append_bool(&mut buffer, true, &mut index);
//! assert_eq!(index, 7);
//! assert_eq!(buffer, [0xBE, 0xEF, 0x00, 0x00, 0x04, 0xE2, 0x01]);
//! ```

use crate::auto_float::encode_float32_auto;
use crate::error::{Error, Result};
use crate::types::WireType;

/// Copies `bytes` to the cursor and advances it.
///
/// # Panics
/// Panics if the cursor is negative or the bytes do not fit.
#[inline(always)]
fn put<const N: usize>(buffer: &mut [u8], bytes: [u8; N], index: &mut i32) {
    let start = usize::try_from(*index).unwrap_or(usize::MAX);
    buffer[start..start.saturating_add(N)].copy_from_slice(&bytes);
    *index += N as i32;
}

/// Truncates toward zero and wraps into 16 bits.
#[inline]
fn scaled_i16(value: f32, scale: f32) -> i16 {
    (value * scale) as i64 as i16
}

/// Truncates toward zero and wraps into 32 bits.
#[inline]
fn scaled_i32(value: f32, scale: f32) -> i32 {
    (value * scale) as i64 as i32
}

/// Appends an i16, high byte first.
///
/// # Panics
/// Panics if fewer than 2 bytes remain at the cursor.
#[inline]
pub fn append_int16(buffer: &mut [u8], value: i16, index: &mut i32) {
    put(buffer, value.to_be_bytes(), index);
}

/// Appends a u16, high byte first.
///
/// # Panics
/// Panics if fewer than 2 bytes remain at the cursor.
#[inline]
pub fn append_uint16(buffer: &mut [u8], value: u16, index: &mut i32) {
    put(buffer, value.to_be_bytes(), index);
}

/// Appends an i32, most significant byte first.
///
/// # Panics
/// Panics if fewer than 4 bytes remain at the cursor.
#[inline]
pub fn append_int32(buffer: &mut [u8], value: i32, index: &mut i32) {
    put(buffer, value.to_be_bytes(), index);
}

/// Appends a u32, most significant byte first.
///
/// # Panics
/// Panics if fewer than 4 bytes remain at the cursor.
#[inline]
pub fn append_uint32(buffer: &mut [u8], value: u32, index: &mut i32) {
    put(buffer, value.to_be_bytes(), index);
}

/// Appends `value * scale` truncated toward zero as an i16.
///
/// The caller guarantees `value * scale` fits in 16 bits; larger values
/// wrap silently.
///
/// # Panics
/// Panics if fewer than 2 bytes remain at the cursor.
#[inline]
pub fn append_float16(buffer: &mut [u8], value: f32, scale: f32, index: &mut i32) {
    append_int16(buffer, scaled_i16(value, scale), index);
}

/// Appends `value * scale` truncated toward zero as an i32.
///
/// The caller guarantees `value * scale` fits in 32 bits; larger values
/// wrap silently.
///
/// # Panics
/// Panics if fewer than 4 bytes remain at the cursor.
#[inline]
pub fn append_float32(buffer: &mut [u8], value: f32, scale: f32, index: &mut i32) {
    append_int32(buffer, scaled_i32(value, scale), index);
}

/// Appends `value` as an auto-float word.
///
/// See [`crate::auto_float`] for the layout.
///
/// # Panics
/// Panics if fewer than 4 bytes remain at the cursor.
#[inline]
pub fn append_float32_auto(buffer: &mut [u8], value: f32, index: &mut i32) {
    append_uint32(buffer, encode_float32_auto(value), index);
}

/// Appends a bool as a single `1` or `0` byte.
///
/// # Panics
/// Panics if no byte remains at the cursor.
#[inline]
pub fn append_bool(buffer: &mut [u8], value: bool, index: &mut i32) {
    put(buffer, [u8::from(value)], index);
}

/// Verifies a field of `ty` fits at `index`.
fn ensure_room(buffer_len: usize, index: i32, ty: WireType) -> Result<()> {
    let Ok(start) = usize::try_from(index) else {
        tracing::debug!("rejecting {} write at negative cursor {}", ty, index);
        return Err(Error::cursor_out_of_bounds(index, buffer_len));
    };
    let required = start.saturating_add(ty.size());
    if required > buffer_len {
        tracing::debug!(
            "rejecting {} write at cursor {}: needs {} bytes, buffer has {}",
            ty,
            index,
            required,
            buffer_len
        );
        return Err(Error::buffer_too_short(required, buffer_len));
    }
    Ok(())
}

/// Checked [`append_int16`].
///
/// # Errors
/// Returns an error if the cursor is negative or fewer than 2 bytes remain.
pub fn try_append_int16(buffer: &mut [u8], value: i16, index: &mut i32) -> Result<()> {
    ensure_room(buffer.len(), *index, WireType::Int16)?;
    append_int16(buffer, value, index);
    Ok(())
}

/// Checked [`append_uint16`].
///
/// # Errors
/// Returns an error if the cursor is negative or fewer than 2 bytes remain.
pub fn try_append_uint16(buffer: &mut [u8], value: u16, index: &mut i32) -> Result<()> {
    ensure_room(buffer.len(), *index, WireType::Uint16)?;
    append_uint16(buffer, value, index);
    Ok(())
}

/// Checked [`append_int32`].
///
/// # Errors
/// Returns an error if the cursor is negative or fewer than 4 bytes remain.
pub fn try_append_int32(buffer: &mut [u8], value: i32, index: &mut i32) -> Result<()> {
    ensure_room(buffer.len(), *index, WireType::Int32)?;
    append_int32(buffer, value, index);
    Ok(())
}

/// Checked [`append_uint32`].
///
/// # Errors
/// Returns an error if the cursor is negative or fewer than 4 bytes remain.
pub fn try_append_uint32(buffer: &mut [u8], value: u32, index: &mut i32) -> Result<()> {
    ensure_room(buffer.len(), *index, WireType::Uint32)?;
    append_uint32(buffer, value, index);
    Ok(())
}

/// Checked [`append_float16`].
///
/// # Errors
/// Returns an error if the cursor is negative or fewer than 2 bytes remain.
pub fn try_append_float16(
    buffer: &mut [u8],
    value: f32,
    scale: f32,
    index: &mut i32,
) -> Result<()> {
    ensure_room(buffer.len(), *index, WireType::Float16)?;
    append_float16(buffer, value, scale, index);
    Ok(())
}

/// Checked [`append_float32`].
///
/// # Errors
/// Returns an error if the cursor is negative or fewer than 4 bytes remain.
pub fn try_append_float32(
    buffer: &mut [u8],
    value: f32,
    scale: f32,
    index: &mut i32,
) -> Result<()> {
    ensure_room(buffer.len(), *index, WireType::Float32)?;
    append_float32(buffer, value, scale, index);
    Ok(())
}

/// Checked [`append_float32_auto`].
///
/// # Errors
/// Returns an error if the cursor is negative or fewer than 4 bytes remain.
pub fn try_append_float32_auto(buffer: &mut [u8], value: f32, index: &mut i32) -> Result<()> {
    ensure_room(buffer.len(), *index, WireType::Float32Auto)?;
    append_float32_auto(buffer, value, index);
    Ok(())
}

/// Checked [`append_bool`].
///
/// # Errors
/// Returns an error if the cursor is negative or no byte remains.
pub fn try_append_bool(buffer: &mut [u8], value: bool, index: &mut i32) -> Result<()> {
    ensure_room(buffer.len(), *index, WireType::Bool)?;
    append_bool(buffer, value, index);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_integers_big_endian() {
        let mut buf = [0u8; 12];
        let mut index = 0;

        append_int16(&mut buf, -2, &mut index);
        assert_eq!(index, 2);
        append_uint16(&mut buf, 0x1234, &mut index);
        assert_eq!(index, 4);
        append_int32(&mut buf, -100_000, &mut index);
        assert_eq!(index, 8);
        append_uint32(&mut buf, 0xDEAD_BEEF, &mut index);
        assert_eq!(index, 12);

        assert_eq!(&buf[0..2], &[0xFF, 0xFE]);
        assert_eq!(&buf[2..4], &[0x12, 0x34]);
        assert_eq!(&buf[4..8], &(-100_000i32).to_be_bytes());
        assert_eq!(&buf[8..12], &[0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn test_append_at_offset() {
        let mut buf = [0xAAu8; 8];
        let mut index = 3;
        append_uint32(&mut buf, 0x0102_0304, &mut index);
        assert_eq!(index, 7);
        assert_eq!(buf, [0xAA, 0xAA, 0xAA, 0x01, 0x02, 0x03, 0x04, 0xAA]);
    }

    #[test]
    fn test_append_float32_truncates_toward_zero() {
        let mut buf = [0u8; 8];
        let mut index = 0;
        append_float32(&mut buf, 1.239, 100.0, &mut index);
        append_float32(&mut buf, -1.239, 100.0, &mut index);
        assert_eq!(&buf[0..4], &123i32.to_be_bytes());
        assert_eq!(&buf[4..8], &(-123i32).to_be_bytes());
    }

    #[test]
    fn test_append_float16_truncates_and_wraps() {
        let mut buf = [0u8; 4];
        let mut index = 0;
        append_float16(&mut buf, 2.99, 10.0, &mut index);
        assert_eq!(&buf[0..2], &29i16.to_be_bytes());

        // 40000 does not fit in i16 and wraps.
        append_float16(&mut buf, 4000.0, 10.0, &mut index);
        assert_eq!(&buf[2..4], &(40_000i32 as i16).to_be_bytes());
        assert_eq!(index, 4);
    }

    #[test]
    fn test_append_float32_auto() {
        let mut buf = [0u8; 4];
        let mut index = 0;
        append_float32_auto(&mut buf, 1.0, &mut index);
        assert_eq!(buf, [0x3F, 0x80, 0x00, 0x00]);
        assert_eq!(index, 4);
    }

    #[test]
    fn test_append_bool() {
        let mut buf = [0xFFu8; 2];
        let mut index = 0;
        append_bool(&mut buf, true, &mut index);
        append_bool(&mut buf, false, &mut index);
        assert_eq!(buf, [1, 0]);
        assert_eq!(index, 2);
    }

    #[test]
    #[should_panic]
    fn test_append_past_end_panics() {
        let mut buf = [0u8; 3];
        let mut index = 0;
        append_uint32(&mut buf, 1, &mut index);
    }

    #[test]
    #[should_panic]
    fn test_append_negative_cursor_panics() {
        let mut buf = [0u8; 8];
        let mut index = -1;
        append_int16(&mut buf, 1, &mut index);
    }

    #[test]
    fn test_try_append_success() {
        let mut buf = [0u8; 15];
        let mut index = 0;
        try_append_int16(&mut buf, 7, &mut index).unwrap();
        try_append_uint16(&mut buf, 8, &mut index).unwrap();
        try_append_int32(&mut buf, 9, &mut index).unwrap();
        try_append_float16(&mut buf, 1.5, 2.0, &mut index).unwrap();
        try_append_float32_auto(&mut buf, -2.5, &mut index).unwrap();
        try_append_bool(&mut buf, true, &mut index).unwrap();
        assert_eq!(index, 15);
        assert_eq!(&buf[8..10], &3i16.to_be_bytes());
        assert_eq!(&buf[10..14], &[0xC0, 0x20, 0x00, 0x00]);
        assert_eq!(buf[14], 1);
    }

    #[test]
    fn test_try_append_buffer_too_short() {
        let mut buf = [0u8; 6];
        let mut index = 3;
        let err = try_append_uint32(&mut buf, 0xFFFF_FFFF, &mut index).unwrap_err();
        assert_eq!(err, Error::buffer_too_short(7, 6));
        assert_eq!(index, 3);
        assert_eq!(buf, [0u8; 6]);

        let err = try_append_float32(&mut buf, 1.0, 1.0, &mut index).unwrap_err();
        assert!(matches!(err, Error::BufferTooShort { .. }));

        let mut index = 6;
        assert!(try_append_bool(&mut buf, true, &mut index).is_err());
        assert_eq!(index, 6);
    }

    #[test]
    fn test_try_append_negative_cursor() {
        let mut buf = [0u8; 6];
        let mut index = -2;
        let err = try_append_int32(&mut buf, 1, &mut index).unwrap_err();
        assert_eq!(err, Error::cursor_out_of_bounds(-2, 6));
        assert_eq!(index, -2);
    }
}
