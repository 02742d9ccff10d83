//! Big-integer bit pool.
//!
//! A pool is drawn once per generated secret. Its bytes are read as one
//! big-endian unsigned integer, and symbols are taken from it as digits in
//! whatever base the alphabet needs (`seed % base`, then `seed /= base`).
//!
//! Reducing a uniform integer modulo a non-power-of-two base is biased. The
//! pool therefore always holds [`OVERDRAW_BITS`] more bits than the entropy
//! the caller plans to consume, which bounds the bias of every digit by
//! 2^-128.

use super::source::{EntropyError, EntropySource};
use num_bigint::BigUint;

/// Extra bits drawn beyond the requested entropy.
pub const OVERDRAW_BITS: u64 = 128;

/// A single random integer consumed as a sequence of digit draws.
pub struct BitPool {
    /// Remaining random value.
    seed: BigUint,
    /// Bits of entropy the pool was sized for (excluding the overdraw).
    sized_for: u64,
    /// Digits taken so far.
    digits_taken: usize,
}

impl BitPool {
    /// Number of bytes drawn for a pool sized to `bits` of entropy.
    #[inline]
    pub fn byte_count(bits: u64) -> usize {
        ((bits + OVERDRAW_BITS + 7) / 8) as usize
    }

    /// Draws a pool from `source` large enough to consume `bits` of entropy.
    ///
    /// Reads exactly [`BitPool::byte_count`] bytes.
    pub fn draw<S>(source: &mut S, bits: u64) -> Result<Self, EntropyError>
    where
        S: EntropySource + ?Sized,
    {
        let mut bytes = vec![0u8; Self::byte_count(bits)];
        source.draw(&mut bytes)?;

        tracing::trace!(
            entropy_bits = bits,
            bytes = bytes.len(),
            "Drew bit pool"
        );

        Ok(Self::from_bytes_be(&bytes, bits))
    }

    /// Builds a pool from already drawn bytes, most significant first.
    pub fn from_bytes_be(bytes: &[u8], sized_for: u64) -> Self {
        Self {
            seed: BigUint::from_bytes_be(bytes),
            sized_for,
            digits_taken: 0,
        }
    }

    /// Takes the next digit in `base`, returning a value in `[0, base)`.
    ///
    /// `base` must be non-zero.
    pub fn next_digit(&mut self, base: usize) -> usize {
        let base = BigUint::from(base);
        let digit = &self.seed % &base;
        self.seed /= &base;
        self.digits_taken += 1;

        // The remainder is below `base`, so it fits in the low u64 digit.
        digit.iter_u64_digits().next().unwrap_or(0) as usize
    }

    /// Bits of entropy this pool was sized for.
    #[inline]
    pub fn sized_for(&self) -> u64 {
        self.sized_for
    }

    /// Number of digits taken so far.
    #[inline]
    pub fn digits_taken(&self) -> usize {
        self.digits_taken
    }
}

impl std::fmt::Debug for BitPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitPool")
            .field("sized_for", &self.sized_for)
            .field("digits_taken", &self.digits_taken)
            .finish_non_exhaustive()
    }
}
