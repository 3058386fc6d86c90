//! Entropy Sources
//!
//! The generator reads its seed exactly once, at construction. Anything that
//! can fill a byte buffer can act as the source.

use crate::types::ShishuaError;

// =============================================================================
// SOURCE INTERFACE
// =============================================================================

/// A provider of seed material.
pub trait EntropySource {
    /// Fill `dest` with entropy and return how many bytes were written.
    ///
    /// Writing fewer than `dest.len()` bytes is reported to the caller, who
    /// treats it as a failed acquisition.
    ///
    /// # Errors
    /// Returns an error if the source cannot produce entropy at all.
    fn fill_entropy(&mut self, dest: &mut [u8]) -> Result<usize, ShishuaError>;
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn fill_entropy(&mut self, dest: &mut [u8]) -> Result<usize, ShishuaError> {
        (**self).fill_entropy(dest)
    }
}

// =============================================================================
// OPERATING SYSTEM
// =============================================================================

/// The operating system's cryptographically secure random source.
///
/// Blocks if the system pool is not yet initialized.
#[cfg(feature = "getrandom")]
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

#[cfg(feature = "getrandom")]
impl EntropySource for OsEntropy {
    fn fill_entropy(&mut self, dest: &mut [u8]) -> Result<usize, ShishuaError> {
        getrandom::fill(dest)?;
        Ok(dest.len())
    }
}

// =============================================================================
// FIXED BYTES
// =============================================================================

/// Replays a fixed byte string.
///
/// Supplies at most the bytes it holds; a short string therefore surfaces as
/// [`ShishuaError::ShortEntropy`] during seeding.
#[derive(Debug, Clone, Copy)]
pub struct FixedEntropy<'a> {
    bytes: &'a [u8],
}

impl<'a> FixedEntropy<'a> {
    /// Create a source that hands out `bytes`.
    #[must_use]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }
}

impl EntropySource for FixedEntropy<'_> {
    fn fill_entropy(&mut self, dest: &mut [u8]) -> Result<usize, ShishuaError> {
        let n = dest.len().min(self.bytes.len());
        dest[..n].copy_from_slice(&self.bytes[..n]);
        self.bytes = &self.bytes[n..];
        Ok(n)
    }
}
