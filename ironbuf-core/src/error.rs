//! Error types for IronBuf core operations.
//!
//! Decoding never fails: the `get_*` family substitutes a zero value and
//! clamps the cursor instead. These errors are only produced by the checked
//! encoder variants and by reader construction.

use thiserror::Error;

/// Core error type for IronBuf operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Buffer is too short for the requested write.
    #[error("buffer too short: required {required} bytes, available {available} bytes")]
    BufferTooShort {
        /// Required buffer size in bytes (cursor + encoded width).
        required: usize,
        /// Available buffer size in bytes.
        available: usize,
    },

    /// Cursor lies outside the buffer.
    #[error("cursor {cursor} out of bounds for buffer of size {size}")]
    CursorOutOfBounds {
        /// Offending cursor value.
        cursor: i32,
        /// Buffer size in bytes.
        size: usize,
    },

    /// A decode limit that cannot describe a buffer length.
    #[error("invalid decode limit: {limit}")]
    InvalidLimit {
        /// Rejected limit.
        limit: i64,
    },
}

impl Error {
    /// Creates a buffer too short error.
    pub fn buffer_too_short(required: usize, available: usize) -> Self {
        Self::BufferTooShort {
            required,
            available,
        }
    }

    /// Creates a cursor out of bounds error.
    pub fn cursor_out_of_bounds(cursor: i32, size: usize) -> Self {
        Self::CursorOutOfBounds { cursor, size }
    }
}

/// Result type alias for IronBuf core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_buffer_too_short() {
        let err = Error::buffer_too_short(6, 4);
        let msg = err.to_string();
        assert!(msg.contains("buffer too short"));
        assert!(msg.contains("required 6"));
        assert!(msg.contains("available 4"));
    }

    #[test]
    fn test_error_display_cursor_out_of_bounds() {
        let err = Error::cursor_out_of_bounds(-3, 16);
        let msg = err.to_string();
        assert!(msg.contains("-3"));
        assert!(msg.contains("16"));
    }

    #[test]
    fn test_error_display_invalid_limit() {
        let err = Error::InvalidLimit { limit: -1 };
        assert_eq!(err.to_string(), "invalid decode limit: -1");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(Error::buffer_too_short(4, 2), Error::buffer_too_short(4, 2));
        assert_ne!(Error::buffer_too_short(4, 2), Error::buffer_too_short(4, 3));
    }
}
