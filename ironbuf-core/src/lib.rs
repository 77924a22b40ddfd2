//! # IronBuf Core
//!
//! Bounds-checked big-endian buffer codec.
//!
//! This crate provides:
//! - Append functions packing integers, scaled reals, auto-float words and
//!   bools at a caller-held cursor
//! - Get functions that read them back and never touch bytes outside the
//!   decode limit, substituting zero values on truncated input
//! - The auto-float 32-bit real encoding (sign, exponent with bias 126,
//!   23-bit significand)
//! - Cursor-owning [`BufferWriter`] and [`BufferReader`] wrappers
//!
//! Appends are unchecked (the producer sizes the buffer); use the
//! `try_append_*` family for checked writes. Decoding comes in two tiers
//! sharing one implementation: `get_*_safe` with an explicit limit and
//! `get_*` with the legacy 1024-byte limit.

pub mod auto_float;
pub mod bounds;
pub mod buffer;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod types;

pub use auto_float::{AutoFloatWord, decode_float32_auto, encode_float32_auto};
pub use bounds::{LEGACY_BUFFER_LIMIT, Limit};
pub use buffer::{BufferReader, BufferWriter};
pub use error::{Error, Result};
pub use types::WireType;
