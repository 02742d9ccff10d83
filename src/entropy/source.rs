//! Random byte sources.
//!
//! Any `RngCore + CryptoRng` can feed the generator. The operating system
//! CSPRNG (`rand_core::OsRng`) is the default; seeded ChaCha generators are
//! useful for reproducible tests and benchmarks.

use rand_core::{CryptoRng, RngCore};
use thiserror::Error;

/// Errors raised when the random source cannot supply bytes.
#[derive(Debug, Error)]
pub enum EntropyError {
    /// The underlying generator reported a failure.
    #[error("random source failed to supply {requested} bytes: {reason}")]
    Unavailable {
        /// Number of bytes that were requested.
        requested: usize,
        /// Failure reported by the source.
        reason: String,
    },
}

/// Supplier of uniformly random bytes.
///
/// A failure is never retried by callers: a randomness fault is terminal for
/// the draw that observed it.
pub trait EntropySource {
    /// Fills `dest` with cryptographically secure random bytes.
    fn draw(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

impl<R> EntropySource for R
where
    R: RngCore + CryptoRng + ?Sized,
{
    fn draw(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.try_fill_bytes(dest)
            .map_err(|e| EntropyError::Unavailable {
                requested: dest.len(),
                reason: e.to_string(),
            })
    }
}
