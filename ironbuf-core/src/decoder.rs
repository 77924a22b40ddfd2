//! Bounds-checked get functions for the buffer wire format.
//!
//! Every getter reads at the cursor and advances it by the width of the
//! type. Getters never fail and never touch bytes outside
//! `[0, min(limit, buffer.len()))`; malformed or truncated input yields the
//! type's zero value with the cursor clamped per [`crate::bounds`].
//!
//! Two tiers share one implementation:
//! - `get_*_safe` takes the decode limit explicitly as `buffer_len`
//! - `get_*` uses the fixed [`LEGACY_BUFFER_LIMIT`] of 1024 bytes
//!
//! # Example
//! ```
//! use ironbuf_core::decoder::{get_bool_safe, get_float32_safe, get_uint16_safe};
//!
//! let buffer = [0xBE, 0xEF, 0x00, 0x00, 0x04, 0xE2, 0x01];
//! let mut index = 0;
//! assert_eq!(get_uint16_safe(&buffer, &mut index, 7), 0xBEEF);
//! assert_eq!(get_float32_safe(&buffer, 100.0, &mut index, 7), 12.5);
//! assert!(get_bool_safe(&buffer, &mut index, 7));
//!
//! // Exhausted: zero value, cursor pinned at the limit.
//! assert_eq!(get_uint16_safe(&buffer, &mut index, 7), 0);
//! assert_eq!(index, 7);
//! ```

use crate::auto_float::decode_float32_auto;
use crate::bounds::{self, LEGACY_BUFFER_LIMIT};
use crate::types::WireType;

/// Reads a big-endian i16 within `buffer_len`.
///
/// Out of bounds returns `0` and sets the cursor to `buffer_len`.
#[inline]
pub fn get_int16_safe(buffer: &[u8], index: &mut i32, buffer_len: i32) -> i16 {
    bounds::take(buffer, index, buffer_len, WireType::Int16).map_or(0, i16::from_be_bytes)
}

/// Reads a big-endian u16 within `buffer_len`.
///
/// Out of bounds returns `0` and sets the cursor to `buffer_len`.
#[inline]
pub fn get_uint16_safe(buffer: &[u8], index: &mut i32, buffer_len: i32) -> u16 {
    bounds::take(buffer, index, buffer_len, WireType::Uint16).map_or(0, u16::from_be_bytes)
}

/// Reads a big-endian i32 within `buffer_len`.
///
/// Out of bounds returns `0` and sets the cursor to `buffer_len`.
#[inline]
pub fn get_int32_safe(buffer: &[u8], index: &mut i32, buffer_len: i32) -> i32 {
    bounds::take(buffer, index, buffer_len, WireType::Int32).map_or(0, i32::from_be_bytes)
}

/// Reads a big-endian u32 within `buffer_len`.
///
/// Out of bounds returns `0` and sets the cursor to `buffer_len`.
#[inline]
pub fn get_uint32_safe(buffer: &[u8], index: &mut i32, buffer_len: i32) -> u32 {
    bounds::take(buffer, index, buffer_len, WireType::Uint32).map_or(0, u32::from_be_bytes)
}

/// Reads a scaled i16 and divides it by `scale`.
///
/// `scale` is not validated: a zero scale produces an infinity or NaN.
#[inline]
pub fn get_float16_safe(buffer: &[u8], scale: f32, index: &mut i32, buffer_len: i32) -> f32 {
    f32::from(get_int16_safe(buffer, index, buffer_len)) / scale
}

/// Reads a scaled i32 and divides it by `scale`.
///
/// A zero or non-finite `scale` skips the field without reading it and
/// returns `0.0`. A non-finite quotient is replaced by `0.0`, with the
/// cursor already advanced past the field.
pub fn get_float32_safe(buffer: &[u8], scale: f32, index: &mut i32, buffer_len: i32) -> f32 {
    if scale == 0.0 || !scale.is_finite() {
        tracing::trace!(
            "float32 read at cursor {} with invalid scale {}, skipping field",
            *index,
            scale
        );
        bounds::skip(index, buffer_len, WireType::Float32);
        return 0.0;
    }

    let value = get_int32_safe(buffer, index, buffer_len) as f32 / scale;
    if !value.is_finite() {
        tracing::trace!("float32 quotient is not finite (scale {}), substituting 0.0", scale);
        return 0.0;
    }
    value
}

/// Reads an auto-float word within `buffer_len`.
///
/// Out of bounds or non-finite words return `0.0`.
#[inline]
pub fn get_float32_auto_safe(buffer: &[u8], index: &mut i32, buffer_len: i32) -> f32 {
    decode_float32_auto(get_uint32_safe(buffer, index, buffer_len))
}

/// Reads a bool within `buffer_len`. Only the byte `1` is true.
///
/// Out of bounds returns `false` and advances the cursor by one if it is
/// below `buffer_len`.
#[inline]
pub fn get_bool_safe(buffer: &[u8], index: &mut i32, buffer_len: i32) -> bool {
    bounds::take_byte(buffer, index, buffer_len) == Some(1)
}

/// [`get_int16_safe`] with the legacy 1024-byte limit.
#[inline]
pub fn get_int16(buffer: &[u8], index: &mut i32) -> i16 {
    get_int16_safe(buffer, index, LEGACY_BUFFER_LIMIT)
}

/// [`get_uint16_safe`] with the legacy 1024-byte limit.
#[inline]
pub fn get_uint16(buffer: &[u8], index: &mut i32) -> u16 {
    get_uint16_safe(buffer, index, LEGACY_BUFFER_LIMIT)
}

/// [`get_int32_safe`] with the legacy 1024-byte limit.
#[inline]
pub fn get_int32(buffer: &[u8], index: &mut i32) -> i32 {
    get_int32_safe(buffer, index, LEGACY_BUFFER_LIMIT)
}

/// [`get_uint32_safe`] with the legacy 1024-byte limit.
#[inline]
pub fn get_uint32(buffer: &[u8], index: &mut i32) -> u32 {
    get_uint32_safe(buffer, index, LEGACY_BUFFER_LIMIT)
}

/// [`get_float16_safe`] with the legacy 1024-byte limit.
#[inline]
pub fn get_float16(buffer: &[u8], scale: f32, index: &mut i32) -> f32 {
    get_float16_safe(buffer, scale, index, LEGACY_BUFFER_LIMIT)
}

/// [`get_float32_safe`] with the legacy 1024-byte limit.
#[inline]
pub fn get_float32(buffer: &[u8], scale: f32, index: &mut i32) -> f32 {
    get_float32_safe(buffer, scale, index, LEGACY_BUFFER_LIMIT)
}

/// [`get_float32_auto_safe`] with the legacy 1024-byte limit.
#[inline]
pub fn get_float32_auto(buffer: &[u8], index: &mut i32) -> f32 {
    get_float32_auto_safe(buffer, index, LEGACY_BUFFER_LIMIT)
}

/// [`get_bool_safe`] with the legacy 1024-byte limit.
#[inline]
pub fn get_bool(buffer: &[u8], index: &mut i32) -> bool {
    get_bool_safe(buffer, index, LEGACY_BUFFER_LIMIT)
}
