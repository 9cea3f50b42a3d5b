// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Bounded integer sampling.

use crate::engine::Prng;

impl Prng {
    /// Returns an integer between `a` and `b` (either order).
    ///
    /// With `lo = min(a, b)`, `hi = max(a, b)` and `span = hi - lo`:
    /// - `lo == hi` returns `lo` and consumes no randomness;
    /// - a power-of-two `span` masks one word: `(word & (span - 1)) + lo`;
    /// - any other `span` uses rejection sampling to avoid modulo bias.
    ///
    /// The result is `word % span + lo`, so for distinct bounds it lies in
    /// `lo..hi` and `hi` itself is not produced.
    pub fn range(&mut self, a: u64, b: u64) -> u64 {
        let lo = a.min(b);
        let hi = a.max(b);
        let span = hi - lo;
        if span == 0 {
            return lo;
        }
        if span.is_power_of_two() {
            return (self.next_u64() & (span - 1)) + lo;
        }

        // 2^64 mod span: the short tail of the word space that would favour
        // small remainders.
        let limit = span.wrapping_neg() % span;
        loop {
            let candidate = self.next_u64();
            if candidate >= limit {
                break candidate % span + lo;
            }
        }
    }
}
