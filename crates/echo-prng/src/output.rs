// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! XSL-RR output permutation ("xorshift low, random rotation").

/// Bit position of the rotation amount: the top 6 bits of the state.
const ROTATE_SHIFT: u32 = 128 - 6;

/// Folds a 128-bit state into one 64-bit output word.
///
/// The high and low halves are XORed together and the result is rotated right
/// by the state's top 6 bits.
#[inline]
pub fn permute(state: u128) -> u64 {
    // Truncation to the low half is the point of the fold.
    #[allow(clippy::cast_possible_truncation)]
    let (high, low) = ((state >> 64) as u64, state as u64);
    // `state >> 122` fits in 6 bits.
    #[allow(clippy::cast_possible_truncation)]
    let rot = (state >> ROTATE_SHIFT) as u32;
    (high ^ low).rotate_right(rot)
}
