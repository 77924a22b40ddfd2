//! Prelude module for convenient imports.
//!
//! ```
//! use ironbuf::prelude::*;
//! ```

pub use ironbuf_core::bounds::{LEGACY_BUFFER_LIMIT, Limit};
pub use ironbuf_core::buffer::{BufferReader, BufferWriter};
pub use ironbuf_core::decoder::{
    get_bool, get_bool_safe, get_float16, get_float16_safe, get_float32, get_float32_auto,
    get_float32_auto_safe, get_float32_safe, get_int16, get_int16_safe, get_int32,
    get_int32_safe, get_uint16, get_uint16_safe, get_uint32, get_uint32_safe,
};
pub use ironbuf_core::encoder::{
    append_bool, append_float16, append_float32, append_float32_auto, append_int16,
    append_int32, append_uint16, append_uint32, try_append_bool, try_append_float16,
    try_append_float32, try_append_float32_auto, try_append_int16, try_append_int32,
    try_append_uint16, try_append_uint32,
};
pub use ironbuf_core::error::{Error as CoreError, Result as CoreResult};
pub use ironbuf_core::types::WireType;
