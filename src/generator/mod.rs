//! Password and passphrase generation.
//!
//! Sizes the secret from the requested entropy, draws one bit pool from the
//! entropy source and renders the resulting digits through the alphabet.

mod password;
pub mod sizing;

pub use password::{Draw, GeneratedSecret, PasswordGenerator, DEFAULT_MIN_BITS};
pub use sizing::{achieved_bits, symbol_count, SymbolPlan};
