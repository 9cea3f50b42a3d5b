// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `rand_core` trait implementations so a [`Prng`] can drive `rand`
//! distributions and adapters.

use rand_core::{impls, Error, RngCore, SeedableRng};

use crate::engine::Prng;

impl RngCore for Prng {
    /// High half of the next output word.
    fn next_u32(&mut self) -> u32 {
        // Keeping the high half is the intended truncation.
        #[allow(clippy::cast_possible_truncation)]
        let high = (Prng::next_u64(self) >> 32) as u32;
        high
    }

    fn next_u64(&mut self) -> u64 {
        Prng::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Prng {
    /// `initstate` (little-endian) followed by `initseq` (little-endian).
    type Seed = [u8; 32];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut state = [0_u8; 16];
        let mut stream = [0_u8; 16];
        state.copy_from_slice(&seed[..16]);
        stream.copy_from_slice(&seed[16..]);
        Prng::from_seed(u128::from_le_bytes(state), u128::from_le_bytes(stream))
    }
}
