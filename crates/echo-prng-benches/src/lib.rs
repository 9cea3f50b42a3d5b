// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared fixtures for the echo-prng criterion benches.

use echo_prng::{Prng, Seed};

/// Batch sizes used by throughput groups (elements per iteration).
pub const BATCH_SIZES: [u64; 3] = [64, 1_024, 16_384];

/// A generator warmed past its first few outputs so benches do not measure
/// the seeding path.
pub fn bench_prng() -> Prng {
    let mut prng = Prng::from(Seed::from_label("bench"));
    prng.skip(1 << 20);
    prng
}

/// `delta` values for the jump-ahead group: `2^k` for a spread of `k`, so
/// the loop runs for 9, 33, 65 and 128 iterations.
pub fn skip_deltas() -> [(u32, u128); 4] {
    [8, 32, 64, 127].map(|k| (k, 1_u128 << k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bench_prng_is_reproducible() {
        let mut a = bench_prng();
        let mut b = bench_prng();
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn skip_deltas_are_powers_of_two() {
        for (k, delta) in skip_deltas() {
            assert_eq!(delta.trailing_zeros(), k);
            assert!(delta.is_power_of_two());
        }
    }
}
