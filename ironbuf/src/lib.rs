//! # IronBuf
//!
//! Bounds-checked big-endian buffer codec for request/response protocols.
//!
//! Producers append fields at a cursor; consumers read them back in the same
//! order. Decoding never reads outside the decode limit and never fails:
//! truncated or malformed input yields zero values and a clamped cursor.
//!
//! ## Quick Start
//!
//! ```
//! use ironbuf::prelude::*;
//!
//! let mut buf = [0u8; 10];
//! let mut writer = BufferWriter::new(&mut buf, 0);
//! writer.append_float32(48.25, 1000.0);
//! writer.append_float32_auto(-0.5);
//! writer.append_int16(-7);
//!
//! let mut reader = BufferReader::new(&buf);
//! assert_eq!(reader.get_float32(1000.0), 48.25);
//! assert_eq!(reader.get_float32_auto(), -0.5);
//! assert_eq!(reader.get_int16(), -7);
//! assert!(reader.is_exhausted());
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Append/get functions, bounds policy, auto-float layout

pub mod prelude;

/// Codec functions and types.
pub mod core {
    pub use ironbuf_core::*;
}

// Re-export commonly used items at the crate root
pub use ironbuf_core::{
    auto_float::{AutoFloatWord, decode_float32_auto, encode_float32_auto},
    bounds::{LEGACY_BUFFER_LIMIT, Limit},
    buffer::{BufferReader, BufferWriter},
    error::{Error, Result},
    types::WireType,
};
