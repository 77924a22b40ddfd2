//! Auto-float word: a self-describing 32-bit real value encoding.
//!
//! # Wire Format
//! ```text
//! bit  31     : sign
//! bits 30..23 : biased exponent (bias 126)
//! bits 22..0  : (|significand| - 0.5) * 2^24, significand in [0.5, 1)
//! ```
//!
//! The value is `significand * 2^(exponent - 126)`. Magnitudes below
//! [`SUBNORMAL_THRESHOLD`] are flushed to the all-zero word on encode.
//!
//! The exponent decomposition ([`frexp`]) and recomposition ([`ldexp`]) are
//! exact power-of-two operations, never `log2`/`powf` approximations.

use num_traits::Float;

/// Exponent bias of the auto-float layout.
pub const EXPONENT_BIAS: i32 = 126;

/// 2^23, the scale of the significand field.
pub const SIGNIFICAND_SCALE: f32 = 8_388_608.0;

/// Magnitudes below this encode as zero.
pub const SUBNORMAL_THRESHOLD: f32 = 1.5e-38;

const SIGN_BIT: u32 = 1 << 31;
const EXPONENT_SHIFT: u32 = 23;
const EXPONENT_MASK: u32 = 0xFF;
const SIGNIFICAND_MASK: u32 = 0x7F_FFFF;

/// Decomposed auto-float word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AutoFloatWord {
    /// Sign bit.
    pub negative: bool,
    /// Biased exponent field.
    pub exponent: u8,
    /// 23-bit significand field.
    pub significand: u32,
}

impl AutoFloatWord {
    /// Packs the fields into a 32-bit word. Significand bits above bit 22
    /// are discarded.
    #[inline]
    #[must_use]
    pub const fn pack(&self) -> u32 {
        let mut word = ((self.exponent as u32) & EXPONENT_MASK) << EXPONENT_SHIFT
            | (self.significand & SIGNIFICAND_MASK);
        if self.negative {
            word |= SIGN_BIT;
        }
        word
    }

    /// Splits a 32-bit word into its fields.
    #[inline]
    #[must_use]
    pub const fn unpack(word: u32) -> Self {
        Self {
            negative: word & SIGN_BIT != 0,
            exponent: ((word >> EXPONENT_SHIFT) & EXPONENT_MASK) as u8,
            significand: word & SIGNIFICAND_MASK,
        }
    }
}

/// Splits `value` into `(significand, exponent)` with
/// `value = significand * 2^exponent` and `0.5 <= |significand| < 1`.
///
/// Zero, infinities and NaN are returned unchanged with exponent 0.
#[must_use]
pub fn frexp(value: f32) -> (f32, i32) {
    if value == 0.0 || !value.is_finite() {
        return (value, 0);
    }

    // value = sign * mantissa * 2^exponent, mantissa < 2^24
    let (mantissa, exponent, sign) = Float::integer_decode(value);
    // Normalize subnormals so bit 23 is the leading bit.
    let shift = mantissa.leading_zeros() as i32 - 40;
    let mantissa = mantissa << shift;
    let exponent = i32::from(exponent) - shift + 24;

    let significand = mantissa as f32 / 16_777_216.0;
    (significand * f32::from(sign), exponent)
}

/// Returns `significand * 2^exponent`, rounded once to `f32`.
///
/// Overflow yields an infinity, underflow a (signed) subnormal or zero.
#[must_use]
pub fn ldexp(significand: f32, exponent: i32) -> f32 {
    if significand == 0.0 || !significand.is_finite() {
        return significand;
    }

    // Any f32 scaled by 2^±400 is out of f32 range but still exact in f64.
    let exponent = exponent.clamp(-400, 400);
    let scale = f64::from_bits(((exponent + 1023) as u64) << 52);
    (f64::from(significand) * scale) as f32
}

/// Encodes a real value as an auto-float word.
///
/// NaN and infinities are not representable and encode as zero.
#[must_use]
pub fn encode_float32_auto(value: f32) -> u32 {
    let value = if !value.is_finite() || value.abs() < SUBNORMAL_THRESHOLD {
        0.0
    } else {
        value
    };

    let (sig, mut exponent) = frexp(value);
    let sig_abs = sig.abs();
    let mut significand = 0u32;

    if sig_abs >= 0.5 {
        significand = ((sig_abs - 0.5) * 2.0 * SIGNIFICAND_SCALE).round() as u32;
        exponent += EXPONENT_BIAS;
    }

    AutoFloatWord {
        negative: sig < 0.0,
        exponent: (exponent as u32 & EXPONENT_MASK) as u8,
        significand,
    }
    .pack()
}

/// Decodes an auto-float word.
///
/// A word that recomposes to a non-finite value decodes as `0.0`.
#[must_use]
pub fn decode_float32_auto(word: u32) -> f32 {
    let fields = AutoFloatWord::unpack(word);
    let mut exponent = i32::from(fields.exponent);
    let mut sig = 0.0f32;

    if fields.exponent != 0 || fields.significand != 0 {
        sig = fields.significand as f32 / (SIGNIFICAND_SCALE * 2.0) + 0.5;
        exponent -= EXPONENT_BIAS;
    }

    if fields.negative {
        sig = -sig;
    }

    let value = ldexp(sig, exponent);
    if !value.is_finite() {
        tracing::trace!("auto-float word {:#010x} is not finite, substituting 0.0", word);
        return 0.0;
    }
    value
}
