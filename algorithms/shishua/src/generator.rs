//! Generator
//!
//! Seeding, warm-up and extraction on top of the portable kernel.

use crate::entropy::EntropySource;
#[cfg(feature = "getrandom")]
use crate::entropy::OsEntropy;
use crate::kernels::constants::{BLOCK_SIZE, SEED_SIZE, WARMUP_ROUNDS, WORD_SIZE};
use crate::kernels::portable::{seed_words, ShishuaState};
use crate::types::ShishuaError;
use core::fmt;
use zeroize::{Zeroize, Zeroizing};

// =============================================================================
// GENERATOR
// =============================================================================

/// SHISHUA pseudo-random generator.
///
/// A single-consumer stream: every operation takes `&mut self`. Share an
/// instance across threads only behind a lock, or give each thread its own.
#[derive(Clone)]
pub struct Shishua {
    state: ShishuaState,
}

impl Shishua {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Create a generator seeded from the operating system.
    ///
    /// # Errors
    /// Returns `ShishuaError::Os` if the system source fails.
    #[cfg(feature = "getrandom")]
    pub fn new() -> Result<Self, ShishuaError> {
        Self::from_entropy_source(&mut OsEntropy)
    }

    /// Create a generator seeded from `source`.
    ///
    /// Requests exactly [`SEED_SIZE`] bytes, once.
    ///
    /// # Errors
    /// Returns `ShishuaError::ShortEntropy` if the source supplies fewer bytes
    /// than requested, or the source's own error if it fails.
    pub fn from_entropy_source<S: EntropySource + ?Sized>(
        source: &mut S,
    ) -> Result<Self, ShishuaError> {
        let mut entropy = Zeroizing::new([0u8; SEED_SIZE]);
        let supplied = source.fill_entropy(&mut entropy[..])?;

        if supplied < SEED_SIZE {
            log::warn!("entropy source supplied {supplied} of {SEED_SIZE} bytes");
            return Err(ShishuaError::ShortEntropy {
                requested: SEED_SIZE,
                supplied,
            });
        }

        Ok(Self::from_seed_bytes(&entropy))
    }

    /// Create a generator from a full entropy buffer.
    ///
    /// Deterministic: the same buffer always yields the same stream.
    #[must_use]
    pub fn from_seed_bytes(entropy: &[u8; SEED_SIZE]) -> Self {
        let mut seed = seed_words(entropy);
        let state = ShishuaState::seeded(&seed, WARMUP_ROUNDS);
        seed.zeroize();

        log::debug!("seeded generator, {WARMUP_ROUNDS} warm-up rounds");
        Self { state }
    }

    /// Resume a generator from a raw kernel state.
    #[must_use]
    pub const fn from_state(state: ShishuaState) -> Self {
        Self { state }
    }

    /// Current kernel state.
    #[must_use]
    pub const fn state(&self) -> &ShishuaState {
        &self.state
    }

    // =========================================================================
    // EXTRACTION
    // =========================================================================

    /// Return the next 64-bit value.
    ///
    /// Hands out word 0 of the current output block, then runs one diffusion
    /// step so the next call sees a fresh block.
    pub fn next_u64(&mut self) -> u64 {
        let out = self.state.output()[0];
        self.state.shuffle();
        out
    }

    /// Fill `buf` with random bytes and return the number written.
    ///
    /// Each [`BLOCK_SIZE`] chunk holds sixteen consecutive [`next_u64`]
    /// values in little-endian order. An empty buffer is valid and leaves
    /// the generator untouched.
    ///
    /// [`next_u64`]: Self::next_u64
    ///
    /// # Errors
    /// Returns `ShishuaError::InvalidBufferLength` if `buf.len()` is not a
    /// multiple of [`BLOCK_SIZE`]. Nothing is written and the generator does
    /// not advance.
    pub fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ShishuaError> {
        if buf.len() % BLOCK_SIZE != 0 {
            log::error!("rejected bulk fill of {} bytes", buf.len());
            return Err(ShishuaError::InvalidBufferLength { len: buf.len() });
        }

        for block in buf.chunks_exact_mut(BLOCK_SIZE) {
            self.write_block(block);
        }
        Ok(buf.len())
    }

    /// Return one [`BLOCK_SIZE`] byte block.
    ///
    /// Identical to one chunk of [`fill_bytes`](Self::fill_bytes).
    pub fn next_block(&mut self) -> [u8; BLOCK_SIZE] {
        let mut block = [0u8; BLOCK_SIZE];
        self.write_block(&mut block);
        block
    }

    /// Write little-endian words until `dest` is full; a trailing partial
    /// word is truncated.
    pub(crate) fn write_words(&mut self, dest: &mut [u8]) {
        let mut words = dest.chunks_exact_mut(WORD_SIZE);
        for word in &mut words {
            word.copy_from_slice(&self.next_u64().to_le_bytes());
        }
        let tail = words.into_remainder();
        if !tail.is_empty() {
            let bytes = self.next_u64().to_le_bytes();
            tail.copy_from_slice(&bytes[..tail.len()]);
        }
    }

    fn write_block(&mut self, block: &mut [u8]) {
        debug_assert_eq!(block.len(), BLOCK_SIZE);
        self.write_words(block);
    }
}

// =============================================================================
// TRAIT IMPL
// =============================================================================

#[cfg(feature = "getrandom")]
impl Default for Shishua {
    fn default() -> Self {
        Self::new().unwrap_or_else(|e| panic!("{}", e))
    }
}

impl fmt::Debug for Shishua {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shishua").finish_non_exhaustive()
    }
}

#[cfg(feature = "std")]
impl std::io::Read for Shishua {
    /// Fill the whole buffer, which must be a multiple of [`BLOCK_SIZE`].
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        Ok(self.fill_bytes(buf)?)
    }
}
