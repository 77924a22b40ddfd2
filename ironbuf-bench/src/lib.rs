//! # IronBuf Bench
//!
//! Sample frames and helpers shared by the IronBuf benchmarks.

pub mod frame;
