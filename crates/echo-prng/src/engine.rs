// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Generator context and the single-step recurrence.

use core::fmt;

use tracing::trace;

use crate::output::permute;

/// Multiplier `M` of the affine recurrence `state' = state * M + increment`.
///
/// Shared by every context; only the increment (the stream selector) varies.
pub const MULTIPLIER: u128 = 0x2360_ED05_1FC6_5DA4_4385_DF64_9FCC_F645;

const SPLITMIX_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// Stateful 128-bit PCG generator (LCG state, XSL-RR output) for deterministic
/// timelines.
///
/// * Not cryptographically secure; use only for simulation and replay.
/// * A context is a plain `Copy` value with no shared or global state. Callers
///   that hand one context to several workers must serialize access
///   themselves; the usual pattern is one context (or one stream) per worker.
/// * Matching seeds yield identical sequences across supported platforms.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prng {
    pub(crate) state: u128,
    pub(crate) increment: u128,
}

impl Prng {
    /// Constructs a generator from initial state material and a stream
    /// selector.
    ///
    /// The increment is `(initseq << 1) | 1`, so it is always odd and the top
    /// bit of `initseq` is discarded. The state is warmed up with two
    /// recurrence steps around the injection of `initstate` so that nearby
    /// seeds diverge immediately.
    pub fn from_seed(initstate: u128, initseq: u128) -> Self {
        let mut prng = Self {
            state: 0,
            increment: (initseq << 1) | 1,
        };
        prng.step();
        prng.state = prng.state.wrapping_add(initstate);
        prng.step();
        trace!(stream = ?initseq, "seeded prng");
        prng
    }

    /// Constructs a generator from a single 64-bit seed via SplitMix64
    /// expansion into 128-bit state material and stream selector.
    pub fn from_seed_u64(seed: u64) -> Self {
        fn splitmix64(state: &mut u64) -> u64 {
            *state = state.wrapping_add(SPLITMIX_GAMMA);
            let mut z = *state;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            z ^ (z >> 31)
        }

        let mut sm_state = seed;
        let mut next_u128 = || {
            let hi = u128::from(splitmix64(&mut sm_state));
            let lo = u128::from(splitmix64(&mut sm_state));
            (hi << 64) | lo
        };
        let initstate = next_u128();
        let initseq = next_u128();
        Self::from_seed(initstate, initseq)
    }

    /// Stream selector this generator was seeded with (`initseq` minus the
    /// discarded top bit).
    pub fn stream(&self) -> u128 {
        self.increment >> 1
    }

    /// Advances the recurrence by one step.
    #[inline]
    pub(crate) fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(self.increment);
    }

    /// Returns the next 64-bit output word.
    ///
    /// The state is always advanced before it is read; this word is the only
    /// randomness primitive the generator exposes.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.step();
        permute(self.state)
    }

    /// Fills `dest` with successive output words.
    ///
    /// Equivalent to calling [`Prng::next_u64`] once per element.
    pub fn fill_u64(&mut self, dest: &mut [u64]) {
        for slot in dest {
            *slot = self.next_u64();
        }
    }
}

// Raw state stays out of logs and panics; the stream is enough to tell
// generators apart.
impl fmt::Debug for Prng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prng")
            .field("stream", &format_args!("{:#x}", self.stream()))
            .finish_non_exhaustive()
    }
}
