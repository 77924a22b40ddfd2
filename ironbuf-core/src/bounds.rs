//! Read bounds policy shared by every decoder.
//!
//! A read of `width` bytes at `cursor` is allowed only when
//! `0 <= cursor` and `cursor + width <= limit`, and the bytes actually exist
//! in the slice. When the check fails no byte is touched and the cursor is
//! clamped:
//! - multi-byte reads jump the cursor to `limit` ([`take`])
//! - single-byte bool reads advance the cursor by one if it is still below
//!   `limit`, otherwise leave it alone ([`take_byte`])

use crate::types::WireType;

/// Implicit decode limit of the legacy getter family, in bytes.
pub const LEGACY_BUFFER_LIMIT: i32 = 1024;

/// Exclusive upper bound a decoder may read up to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Limit {
    /// The fixed [`LEGACY_BUFFER_LIMIT`].
    #[default]
    Legacy,
    /// An explicit buffer length.
    Length(i32),
}

impl Limit {
    /// Returns the limit as a cursor value.
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Self::Legacy => LEGACY_BUFFER_LIMIT,
            Self::Length(len) => len,
        }
    }
}

impl From<i32> for Limit {
    fn from(len: i32) -> Self {
        Self::Length(len)
    }
}

/// Returns true if `width` bytes can be read at `cursor`.
///
/// # Arguments
/// * `buffer_len` - Length of the backing slice
/// * `cursor` - Byte offset of the first byte
/// * `width` - Number of bytes to read
/// * `limit` - Exclusive decode limit
#[inline]
#[must_use]
pub fn can_read(buffer_len: usize, cursor: i32, width: i32, limit: i32) -> bool {
    let start = i64::from(cursor);
    let end = start + i64::from(width);
    let available = i64::try_from(buffer_len).unwrap_or(i64::MAX);
    start >= 0 && end <= i64::from(limit) && end <= available
}

/// Reads `N` bytes at the cursor and advances it by `N`.
///
/// On a failed bounds check returns `None` and sets the cursor to `limit`.
#[inline]
pub fn take<const N: usize>(
    buffer: &[u8],
    cursor: &mut i32,
    limit: i32,
    ty: WireType,
) -> Option<[u8; N]> {
    debug_assert_eq!(N, ty.size());
    let width = N as i32;
    if !can_read(buffer.len(), *cursor, width, limit) {
        tracing::trace!(
            "{} read at cursor {} exceeds limit {} (buffer {} bytes), clamping to limit",
            ty,
            *cursor,
            limit,
            buffer.len()
        );
        *cursor = limit;
        return None;
    }

    let start = *cursor as usize;
    let mut bytes = [0u8; N];
    bytes.copy_from_slice(&buffer[start..start + N]);
    *cursor += width;
    Some(bytes)
}

/// Reads one byte at the cursor and advances it by one.
///
/// On a failed bounds check returns `None`; the cursor still advances by one
/// when it is below `limit`, and is left unchanged otherwise.
#[inline]
pub fn take_byte(buffer: &[u8], cursor: &mut i32, limit: i32) -> Option<u8> {
    if !can_read(buffer.len(), *cursor, 1, limit) {
        tracing::trace!(
            "bool read at cursor {} exceeds limit {} (buffer {} bytes), skipping one byte",
            *cursor,
            limit,
            buffer.len()
        );
        if *cursor < limit {
            *cursor += 1;
        }
        return None;
    }

    let byte = buffer[*cursor as usize];
    *cursor += 1;
    Some(byte)
}

/// Advances the cursor past a field of `ty` without reading it.
///
/// Skips by the field width when the whole field lies within `limit`,
/// otherwise clamps the cursor to `limit`.
#[inline]
pub fn skip(cursor: &mut i32, limit: i32, ty: WireType) {
    let start = i64::from(*cursor);
    if start >= 0 && start + i64::from(ty.width()) <= i64::from(limit) {
        *cursor += ty.width();
    } else {
        *cursor = limit;
    }
}
