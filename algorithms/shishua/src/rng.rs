//! `rand_core` integration.
//!
//! Lets [`Shishua`] drive every `rand` adaptor (`Rng::random`,
//! `Rng::random_range`, shuffling, distributions).

use crate::generator::Shishua;
use crate::kernels::constants::SEED_SIZE;
use rand_core::{RngCore, SeedableRng};

// =============================================================================
// RNG CORE
// =============================================================================

impl RngCore for Shishua {
    /// Low 32 bits of one 64-bit value.
    #[allow(clippy::cast_possible_truncation)]
    fn next_u32(&mut self) -> u32 {
        Self::next_u64(self) as u32
    }

    fn next_u64(&mut self) -> u64 {
        Self::next_u64(self)
    }

    /// Accepts any length. Whole 8-byte words are little-endian values from
    /// successive `next_u64` calls and a trailing partial word is truncated,
    /// so block-multiple buffers match the inherent bulk fill byte for byte.
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.write_words(dst);
    }
}

// =============================================================================
// SEEDING
// =============================================================================

/// Full entropy buffer for [`SeedableRng::from_seed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShishuaSeed(
    /// Raw entropy bytes.
    pub [u8; SEED_SIZE],
);

impl Default for ShishuaSeed {
    fn default() -> Self {
        Self([0; SEED_SIZE])
    }
}

impl AsRef<[u8]> for ShishuaSeed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsMut<[u8]> for ShishuaSeed {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl From<[u8; SEED_SIZE]> for ShishuaSeed {
    fn from(bytes: [u8; SEED_SIZE]) -> Self {
        Self(bytes)
    }
}

impl zeroize::Zeroize for ShishuaSeed {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl SeedableRng for Shishua {
    type Seed = ShishuaSeed;

    fn from_seed(seed: Self::Seed) -> Self {
        let seed = zeroize::Zeroizing::new(seed);
        Self::from_seed_bytes(&seed.0)
    }
}
