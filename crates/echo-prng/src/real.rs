// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Uniform real sampling on `[0, 1)`.
//!
//! Two constructions are offered:
//! - [`Prng::next_f64`] places 52 random bits in the mantissa of a number in
//!   `[1, 2)` and subtracts one. Outputs are evenly spaced at `2^-52` and the
//!   smallest nonzero output is `2^-52`.
//! - [`Prng::next_f64_exact`] can return every representable double in
//!   `[0, 1)`, subnormals included, each with probability proportional to the
//!   width of the real interval it rounds from. Most outputs are in `[0.5, 1)`
//!   as they should be, but the tail reaches all the way down to `2^-1074`.

use crate::engine::Prng;

const MANTISSA_MASK: u64 = 0x000F_FFFF_FFFF_FFFF;
const ONE_EXPONENT_BITS: u64 = 0x3FF0_0000_0000_0000;

/// Scale exponent of the first word: a word read as an integer in `[0, 2^64)`
/// is scaled by `2^-64` into `[0, 1)`.
const FIRST_WORD_EXPONENT: i32 = -64;
/// Smallest binary exponent of any double (the least subnormal is `2^-1074`).
const MIN_EXPONENT: i32 = -1074;
/// Largest double strictly below one.
const ONE_MINUS_ULP: f64 = 1.0 - f64::EPSILON / 2.0;

/// Maps one output word to `[0, 1)` with `2^-52` granularity.
#[inline]
pub(crate) fn unit_f64_from_word(word: u64) -> f64 {
    f64::from_bits((word & MANTISSA_MASK) | ONE_EXPONENT_BITS) - 1.0
}

/// Builds a full-precision uniform double from a stream of words.
///
/// Leading zero words each shift the scale down by 64 binary places; once the
/// scale passes the subnormal floor the result is zero. The first nonzero word
/// is normalized (its leading zeros refilled from one more word) and its low
/// bit is forced on as a sticky bit before the conversion rounds to 53 bits.
pub(crate) fn exact_unit_f64_from_words(mut next_word: impl FnMut() -> u64) -> f64 {
    let mut exponent = FIRST_WORD_EXPONENT;
    let mut significand = next_word();
    while significand == 0 {
        exponent -= 64;
        if exponent < MIN_EXPONENT {
            return 0.0;
        }
        significand = next_word();
    }

    let shift = significand.leading_zeros();
    // `leading_zeros` of a nonzero u64 is at most 63.
    #[allow(clippy::cast_possible_wrap)]
    let shift_exp = shift as i32;
    exponent -= shift_exp;
    if shift != 0 {
        significand <<= shift;
        significand |= next_word() >> (64 - shift);
    }
    significand |= 1;

    // Rounding to 53 bits is the intended conversion here.
    #[allow(clippy::cast_precision_loss)]
    let value = libm::ldexp(significand as f64, exponent);
    // A significand within half an ulp of 2^64 rounds up to exactly one.
    if value < 1.0 {
        value
    } else {
        ONE_MINUS_ULP
    }
}

impl Prng {
    /// Returns a uniform `f64` in `[0, 1)` with `2^-52` spacing.
    ///
    /// Consumes exactly one word. This is usually the sampler you want: it is
    /// fast and not biased towards small magnitudes, but it never produces
    /// nonzero values below `2^-52`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        unit_f64_from_word(self.next_u64())
    }

    /// Returns a uniform `f64` in `[0, 1)` that can hit every representable
    /// double in the interval, including subnormals.
    ///
    /// Consumes one word in the common case and two when the first word has
    /// leading zeros; each all-zero word costs one more. The low mantissa bit
    /// of the intermediate significand is always set before rounding.
    pub fn next_f64_exact(&mut self) -> f64 {
        exact_unit_f64_from_words(|| self.next_u64())
    }
}
