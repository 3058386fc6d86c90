#![cfg_attr(not(feature = "std"), no_std)]

//! # SHISHUA
//!
//! Fast pseudo-random byte generator with a 1024-bit state.
//! Portable, allocation-free, bit-exact with the SIMD reference.
//!
//! Not a cryptographic primitive: there are no formal security claims.

//! # Usage
//! ```rust
//! use shishua::Shishua;
//!
//! // 1. Seed from the operating system
//! let mut rng = Shishua::new()?;
//!
//! // 2. Single values
//! let x = rng.next_u64();
//!
//! // 3. Bulk bytes (whole 128-byte blocks)
//! let mut buf = [0u8; 256];
//! let n = rng.fill_bytes(&mut buf)?;
//! assert_eq!(n, 256);
//!
//! // 4. Reproducible streams
//! let mut a = Shishua::from_seed_bytes(&[7u8; 64]);
//! let mut b = Shishua::from_seed_bytes(&[7u8; 64]);
//! assert_eq!(a.next_u64(), b.next_u64());
//! # let _ = x;
//! # Ok::<(), shishua::ShishuaError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod entropy;
mod generator;
// Re-export internal kernels for benchmarking/testing if needed, but hide from docs
#[doc(hidden)]
pub mod kernels; // Public for test/example use only
#[cfg(feature = "rand-core")]
mod rng;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

#[cfg(feature = "getrandom")]
pub use entropy::OsEntropy;
pub use entropy::{EntropySource, FixedEntropy};
pub use generator::Shishua;
pub use kernels::constants::{BLOCK_SIZE, SEED_SIZE};
#[cfg(feature = "rand-core")]
pub use rand_core;
#[cfg(feature = "rand-core")]
pub use rng::ShishuaSeed;
pub use types::ShishuaError;
