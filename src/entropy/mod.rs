//! Entropy supply for symbol draws.
//!
//! This module turns bytes from a cryptographically secure source into a
//! single large integer that the generator consumes digit by digit. It does
//! not implement a CSPRNG; it only consumes one.

mod pool;
mod source;

#[cfg(test)]
pub(crate) mod testing;

pub use pool::{BitPool, OVERDRAW_BITS};
pub use source::{EntropyError, EntropySource};
