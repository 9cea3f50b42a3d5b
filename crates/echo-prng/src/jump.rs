// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Closed-form jump-ahead over the affine recurrence.
//!
//! One step is the affine map `x -> x * M + C (mod 2^128)`. Composing the map
//! with itself gives another affine map, so `n` steps collapse into a single
//! `(mult, plus)` pair built by binary exponentiation: the "doubled" pair for
//! `2^k` steps is squared once per bit of `n`, and folded into the accumulator
//! whenever that bit is set.
//!
//! Every step is a bijection mod `2^128`, so the group of steps has order
//! `2^128`. Moving back `n` steps is the same as moving forward
//! `2^128 - n` steps, i.e. `n.wrapping_neg()`.

use tracing::trace;

use crate::engine::{Prng, MULTIPLIER};

/// Returns the state reached from `state` after `delta` applications of
/// `x -> x * mult + plus`, computed in `O(log delta)`.
///
/// `delta == 0` returns `state` unchanged.
pub fn advance_affine(state: u128, mut delta: u128, mult: u128, plus: u128) -> u128 {
    let mut acc_mult: u128 = 1;
    let mut acc_plus: u128 = 0;
    let mut cur_mult = mult;
    let mut cur_plus = plus;
    while delta > 0 {
        if delta & 1 == 1 {
            acc_mult = acc_mult.wrapping_mul(cur_mult);
            acc_plus = acc_plus.wrapping_mul(cur_mult).wrapping_add(cur_plus);
        }
        cur_plus = cur_mult.wrapping_add(1).wrapping_mul(cur_plus);
        cur_mult = cur_mult.wrapping_mul(cur_mult);
        delta >>= 1;
    }
    acc_mult.wrapping_mul(state).wrapping_add(acc_plus)
}

impl Prng {
    /// Moves the generator `delta` steps forward without producing output.
    ///
    /// Passing the two's-complement encoding of a negative count
    /// (`n.wrapping_neg()`) moves the generator `n` steps back; see
    /// [`Prng::rewind`]. The result is bit-identical to `delta` calls of
    /// [`Prng::next_u64`] with the outputs discarded.
    pub fn skip(&mut self, delta: u128) {
        self.state = advance_affine(self.state, delta, MULTIPLIER, self.increment);
        trace!(delta = ?delta, "skipped prng");
    }

    /// Moves the generator `n` steps back, undoing `n` draws.
    pub fn rewind(&mut self, n: u128) {
        self.skip(n.wrapping_neg());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stepped(mut prng: Prng, n: u32) -> Prng {
        for _ in 0..n {
            prng.step();
        }
        prng
    }

    #[test]
    fn zero_delta_is_identity() {
        let mut prng = Prng::from_seed(0xABCD, 0x1234);
        let before = prng;
        prng.skip(0);
        assert_eq!(prng, before);
    }

    #[test]
    fn small_skips_match_sequential_steps() {
        let base = Prng::from_seed(0x9e37_79b9, 77);
        for n in 0..=130_u32 {
            let mut jumped = base;
            jumped.skip(u128::from(n));
            assert_eq!(jumped, stepped(base, n), "delta {n}");
        }
    }

    #[test]
    fn rewind_undoes_draws() {
        let mut prng = Prng::from_seed(5, 6);
        let start = prng;
        let first: Vec<u64> = (0..100).map(|_| prng.next_u64()).collect();
        prng.rewind(100);
        assert_eq!(prng, start);
        let replay: Vec<u64> = (0..100).map(|_| prng.next_u64()).collect();
        assert_eq!(first, replay);
    }

    #[test]
    fn full_period_returns_to_start() {
        // 2^128 steps wraps to zero; 2^127 twice is the same trip.
        let start = Prng::from_seed(1, 2);
        let mut prng = start;
        prng.skip(1 << 127);
        assert_ne!(prng, start);
        prng.skip(1 << 127);
        assert_eq!(prng, start);
    }

    #[test]
    fn skip_matches_reference_after_a_million_steps() {
        let mut prng = Prng::from_seed(42, 54);
        prng.skip(1_000_000);
        assert_eq!(prng.next_u64(), 0x3f79_894a_4e9c_4f31);
    }

    #[test]
    fn advance_affine_with_unit_multiplier_is_addition() {
        assert_eq!(advance_affine(10, 5, 1, 3), 25);
        assert_eq!(advance_affine(0, u128::MAX, 1, 1), u128::MAX);
    }
}
