//! Generator-facing error taxonomy.
//!
//! Every error is terminal for the call that raised it. Configuration errors
//! carry enough context (sizes, floors) for the caller to correct the
//! request. Resource errors are never retried.

use crate::alphabet::WordListError;
use crate::catalog::SizeRequest;
use crate::entropy::EntropyError;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned by generation and alphabet selection.
#[derive(Debug, Error)]
pub enum Error {
    /// Requested entropy is below the configured safety floor.
    #[error("requested {requested} bits of entropy, but at least {floor} are required")]
    InvalidEntropyFloor {
        /// Bits the caller asked for.
        requested: u32,
        /// Configured floor.
        floor: u32,
    },

    /// No registered alphabet satisfies the selection.
    #[error("no known alphabets {requested}; available sizes: {available_sizes:?}")]
    NoMatchingAlphabet {
        /// What the caller asked for.
        requested: SizeRequest,
        /// Sorted, deduplicated sizes of every registered alphabet.
        available_sizes: Vec<usize>,
    },

    /// The alphabet has too few symbols to carry any entropy.
    #[error("alphabet with {size} symbols cannot carry entropy")]
    DegenerateAlphabet {
        /// Offending size (of the alphabet or of one of its classes).
        size: usize,
    },

    /// The random source or the word list could not be read.
    #[error("source unavailable: {0}")]
    SourceUnavailable(#[from] SourceError),
}

/// Resource failures behind [`Error::SourceUnavailable`].
#[derive(Debug, Error)]
pub enum SourceError {
    /// Random bytes could not be drawn.
    #[error(transparent)]
    Entropy(#[from] EntropyError),
    /// The word list could not be loaded.
    #[error(transparent)]
    WordList(#[from] WordListError),
}

/// Broad class of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request or the alphabet configuration is unusable.
    Configuration,
    /// An external resource failed.
    Resource,
}

impl Error {
    /// Returns the broad class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidEntropyFloor { .. }
            | Error::NoMatchingAlphabet { .. }
            | Error::DegenerateAlphabet { .. } => ErrorKind::Configuration,
            Error::SourceUnavailable(_) => ErrorKind::Resource,
        }
    }
}

impl From<EntropyError> for Error {
    fn from(e: EntropyError) -> Self {
        Error::SourceUnavailable(e.into())
    }
}

impl From<WordListError> for Error {
    fn from(e: WordListError) -> Self {
        Error::SourceUnavailable(e.into())
    }
}
