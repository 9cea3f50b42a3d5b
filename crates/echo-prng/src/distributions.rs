// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Gaussian and Poisson transforms over the exact uniform sampler.
//!
//! Transcendentals go through `libm` so results do not depend on the platform
//! math library.

use crate::engine::Prng;

impl Prng {
    /// Returns one Gaussian-shaped sample.
    ///
    /// Draws `rsq` from [`Prng::next_f64_exact`] (retrying on zero) and a second
    /// exact uniform `u`, and returns `u * sqrt(-2 ln(rsq) / rsq)`. Exactly one
    /// value is produced per call; no paired value is cached, so the stream
    /// position after a call depends only on the words consumed by the two
    /// uniform draws.
    pub fn gaussian(&mut self) -> f64 {
        let rsq = loop {
            let candidate = self.next_f64_exact();
            if candidate != 0.0 {
                break candidate;
            }
        };
        self.next_f64_exact() * libm::sqrt(-2.0 * libm::log(rsq) / rsq)
    }

    /// Returns a Poisson-distributed count with mean `ev` (Knuth's method).
    ///
    /// `ev` must be finite and non-negative. The cost is `O(ev)` uniform draws,
    /// so callers that need bounded latency should bound `ev`. `ev == 0`
    /// always returns 0 after consuming one uniform draw. Negative or NaN means
    /// are a contract violation; they currently return 0.
    pub fn poisson(&mut self, ev: f64) -> u64 {
        let threshold = libm::exp(-ev);
        let mut count = 0_u64;
        let mut product = self.next_f64_exact();
        while product > threshold {
            count += 1;
            product *= self.next_f64_exact();
        }
        count
    }
}
