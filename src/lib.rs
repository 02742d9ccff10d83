//! Entropy-bounded password and passphrase generation.
//!
//! Generates passwords or multi-word passphrases that carry at least a
//! requested number of bits of entropy, drawn from a configurable alphabet.
//!
//! # Architecture
//!
//! ```text
//! catalog (select) → generator (size, draw, render) → secret
//!                          ↓
//!                  entropy (bit pool ← CSPRNG)
//! ```
//!
//! # Design Principles
//!
//! - **Exact accounting**: symbol counts and drawn bits are computed with
//!   big integers; no floating-point logarithms
//! - **One draw per secret**: a single big integer is drawn with 128 extra
//!   bits and consumed digit by digit, bounding modulo bias by 2^-128
//! - **Consumes, never implements, a CSPRNG**: the OS generator by default
//! - **Lazy word lists**: size filters only load a word list when its
//!   length actually matters
//!
//! # Example
//!
//! ```no_run
//! use entropy_password::{
//!     catalog::{AlphabetCatalog, Selector},
//!     generator::PasswordGenerator,
//! };
//!
//! let catalog = AlphabetCatalog::builtin();
//! let mut generator = PasswordGenerator::from_os_entropy();
//!
//! let secret = generator
//!     .generate_secret(96, &catalog, &Selector::exact(62))
//!     .unwrap();
//!
//! assert_eq!(secret.symbol_count(), 17);
//! assert!(secret.entropy_bits() >= 96);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod alphabet;
pub mod analysis;
pub mod catalog;
pub mod config;
pub mod entropy;
pub mod error;
pub mod generator;

// Re-export commonly used types at crate root
pub use alphabet::{Alphabet, LazyLength, WordList};
pub use catalog::{AlphabetCatalog, Selector};
pub use config::FileConfig;
pub use entropy::{BitPool, EntropySource};
pub use error::{Error, ErrorKind, Result};
pub use generator::{GeneratedSecret, PasswordGenerator};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
