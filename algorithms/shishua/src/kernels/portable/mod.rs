//! Portable implementation of SHISHUA.
//!
//! Scalar rendition of the two-lane, 256-bit-register design: every vector
//! operation is emulated with shifts, masks and wrapping adds on `u64` words,
//! producing bit-identical output to a SIMD build.

use self::utils::{shuffle_lane, split_lane};
use crate::kernels::constants::{
    COUNTER_INCREMENTS, COUNTER_WORDS, HALF_LANE, HIGH_SHIFT, LANE_WORDS, LOW_SHIFT, NUM_LANES,
    OUTPUT_WORDS, PHI, SEED_SIZE, SEED_STRIDE, SEED_WORDS, STATE_WORDS,
};

mod utils;

pub use self::utils::merge_halves;

// =============================================================================
// STATE & TYPES
// =============================================================================

/// Complete generator state: working state, step counter and the most
/// recent output block.
///
/// Fixed-size arrays only. Nothing here allocates or resizes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShishuaState {
    state: [u64; STATE_WORDS],
    output: [u64; OUTPUT_WORDS],
    counter: [u64; COUNTER_WORDS],
}

impl ShishuaState {
    /// All-zero state, counter and output.
    #[must_use]
    pub const fn zeroed() -> Self {
        Self {
            state: [0; STATE_WORDS],
            output: [0; OUTPUT_WORDS],
            counter: [0; COUNTER_WORDS],
        }
    }

    /// Assemble a state from raw parts.
    ///
    /// Intended for reproducibility checks; the public generator only ever
    /// obtains a state through [`ShishuaState::seeded`].
    #[must_use]
    pub const fn from_parts(
        state: [u64; STATE_WORDS],
        counter: [u64; COUNTER_WORDS],
        output: [u64; OUTPUT_WORDS],
    ) -> Self {
        Self {
            state,
            output,
            counter,
        }
    }

    /// Working state words.
    #[must_use]
    pub const fn state(&self) -> &[u64; STATE_WORDS] {
        &self.state
    }

    /// Step counter words.
    #[must_use]
    pub const fn counter(&self) -> &[u64; COUNTER_WORDS] {
        &self.counter
    }

    /// Output block of the most recent diffusion step.
    #[must_use]
    pub const fn output(&self) -> &[u64; OUTPUT_WORDS] {
        &self.output
    }

    // =========================================================================
    // SEEDING
    // =========================================================================

    /// Initialize from seed words and run `rounds` warm-up steps.
    ///
    /// The constants table is XORed with the seed on even words only:
    /// `state[2i] ^= seed[i]` and `state[2i + 8] ^= seed[(i + 2) % 4]`.
    /// Each warm-up round is one [`shuffle`](Self::shuffle) followed by
    /// [`feed_back`](Self::feed_back).
    #[must_use]
    pub fn seeded(seed: &[u64; SEED_WORDS], rounds: usize) -> Self {
        let mut s = Self::from_parts(PHI, [0; COUNTER_WORDS], [0; OUTPUT_WORDS]);

        for (i, word) in seed.iter().enumerate() {
            s.state[2 * i] ^= word;
            s.state[2 * i + LANE_WORDS] ^= seed[(i + 2) % SEED_WORDS];
        }

        for _ in 0..rounds {
            s.shuffle();
            s.feed_back();
        }
        s
    }

    /// Copy the output block back into the state with the lanes reversed.
    ///
    /// State quarter `q` receives output quarter `3 - q`. The output block and
    /// the counter are left untouched.
    pub fn feed_back(&mut self) {
        let quarters = STATE_WORDS / HALF_LANE;
        for (q, quarter) in self.state.chunks_exact_mut(HALF_LANE).enumerate() {
            let src = (quarters - 1 - q) * HALF_LANE;
            quarter.copy_from_slice(&self.output[src..src + HALF_LANE]);
        }
    }

    // =========================================================================
    // DIFFUSION
    // =========================================================================

    /// Advance state and counter by one step and overwrite the output block.
    ///
    /// Per lane: counter into the high half, 32-bit cross-word shuffle,
    /// shift-and-add into both halves, emit four output words. Words 8..16 of
    /// the output are cross-lane XORs of the new state. All arithmetic wraps.
    #[allow(clippy::needless_range_loop)]
    pub fn shuffle(&mut self) {
        for lane in 0..NUM_LANES {
            let base = lane * LANE_WORDS;
            let mut s = [0u64; LANE_WORDS];
            s.copy_from_slice(&self.state[base..base + LANE_WORDS]);

            for (h, c) in s[HALF_LANE..].iter_mut().zip(self.counter.iter()) {
                *h = h.wrapping_add(*c);
            }

            let (t_lo, t_hi) = split_lane(&shuffle_lane(&s));

            let out = &mut self.output[lane * HALF_LANE..(lane + 1) * HALF_LANE];
            for k in 0..HALF_LANE {
                let u_lo = s[k] >> LOW_SHIFT;
                let u_hi = s[k + HALF_LANE] >> HIGH_SHIFT;
                s[k] = u_lo.wrapping_add(t_lo[k]);
                s[k + HALF_LANE] = u_hi.wrapping_add(t_hi[k]);
                out[k] = u_lo ^ t_hi[k];
            }

            self.state[base..base + LANE_WORDS].copy_from_slice(&s);
        }

        for j in 0..HALF_LANE {
            self.output[j + 8] = self.state[j] ^ self.state[j + 12];
            self.output[j + 12] = self.state[j + 8] ^ self.state[j + 4];
        }

        for (c, inc) in self.counter.iter_mut().zip(COUNTER_INCREMENTS) {
            *c = c.wrapping_add(inc);
        }
    }
}

// =============================================================================
// SEED DERIVATION
// =============================================================================

/// Derive the four seed words from a full entropy buffer.
///
/// Word `i` is the little-endian `u32` at byte offset `8i`, zero-extended.
/// Bytes `8i + 4..8i + 8` and everything past offset 27 are not used.
#[must_use]
pub fn seed_words(entropy: &[u8; SEED_SIZE]) -> [u64; SEED_WORDS] {
    let mut seed = [0u64; SEED_WORDS];
    for (word, chunk) in seed.iter_mut().zip(entropy.chunks_exact(SEED_STRIDE)) {
        *word = u64::from(u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
    }
    seed
}
