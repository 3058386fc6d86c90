//! Shared types used across the SHISHUA library.

use core::fmt;
#[cfg(feature = "std")]
use std::error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised while seeding or extracting from the generator.
///
/// Entropy errors only occur at construction. A generator that exists is
/// always fully seeded and warmed up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShishuaError {
    /// The operating system entropy source failed.
    #[cfg(feature = "getrandom")]
    Os(getrandom::Error),
    /// A caller-provided entropy source failed.
    EntropySource(&'static str),
    /// The entropy source returned fewer bytes than requested.
    ShortEntropy {
        /// Bytes requested from the source.
        requested: usize,
        /// Bytes the source actually supplied.
        supplied: usize,
    },
    /// A bulk fill buffer whose length is not a multiple of the block size.
    InvalidBufferLength {
        /// Length of the rejected buffer.
        len: usize,
    },
}

impl fmt::Display for ShishuaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "getrandom")]
            Self::Os(e) => write!(f, "system entropy source failed: {e}"),
            Self::EntropySource(reason) => write!(f, "entropy source failed: {reason}"),
            Self::ShortEntropy {
                requested,
                supplied,
            } => write!(
                f,
                "entropy source supplied {supplied} of {requested} requested bytes"
            ),
            Self::InvalidBufferLength { len } => write!(
                f,
                "buffer length {len} is not a multiple of {} bytes",
                crate::kernels::constants::BLOCK_SIZE
            ),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for ShishuaError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            #[cfg(feature = "getrandom")]
            Self::Os(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "getrandom")]
impl From<getrandom::Error> for ShishuaError {
    fn from(e: getrandom::Error) -> Self {
        Self::Os(e)
    }
}

#[cfg(feature = "std")]
impl From<ShishuaError> for std::io::Error {
    fn from(e: ShishuaError) -> Self {
        let kind = match e {
            ShishuaError::InvalidBufferLength { .. } => std::io::ErrorKind::InvalidInput,
            _ => std::io::ErrorKind::Other,
        };
        Self::new(kind, e)
    }
}
