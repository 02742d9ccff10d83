//! Alphabet selection criteria.

use crate::alphabet::WORD_LIST_LOWER_BOUND;
use std::fmt;

/// Which alphabets a caller wants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selector {
    /// Keep only alphabets of exactly this size.
    pub exact_size: Option<usize>,
    /// Keep only alphabets of at least this size (fallback for `exact_size`).
    pub min_size: Option<usize>,
    /// With no size given, rotate through the whole catalog instead of the
    /// default subset.
    pub rotate: bool,
}

impl Selector {
    /// Alphabets of exactly `size` symbols.
    pub fn exact(size: usize) -> Self {
        Self {
            exact_size: Some(size),
            ..Default::default()
        }
    }

    /// Alphabets of at least `size` symbols.
    pub fn at_least(size: usize) -> Self {
        Self {
            min_size: Some(size),
            ..Default::default()
        }
    }

    /// Every registered alphabet.
    pub fn rotation() -> Self {
        Self {
            rotate: true,
            ..Default::default()
        }
    }

    /// Interprets a single requested alphabet size.
    ///
    /// Sizes below the word-list bound are matched exactly; larger sizes
    /// are minimums, since word lists have no fixed length. `None` or zero
    /// means "no preference".
    pub fn from_requested_size(size: Option<usize>, rotate: bool) -> Self {
        let mut selector = Self {
            rotate,
            ..Default::default()
        };
        match size {
            Some(n) if n > 0 && n < WORD_LIST_LOWER_BOUND => selector.exact_size = Some(n),
            Some(n) if n > 0 => selector.min_size = Some(n),
            _ => {}
        }
        selector
    }

    /// Describes the request, for error messages.
    pub fn request(&self) -> SizeRequest {
        match (self.exact_size, self.min_size) {
            (Some(n), _) => SizeRequest::Exact(n),
            (None, Some(n)) => SizeRequest::AtLeast(n),
            (None, None) if self.rotate => SizeRequest::Any,
            (None, None) => SizeRequest::Default,
        }
    }
}

/// What was asked of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeRequest {
    /// Exactly this many symbols.
    Exact(usize),
    /// At least this many symbols.
    AtLeast(usize),
    /// Anything registered.
    Any,
    /// The default subset.
    Default,
}

impl fmt::Display for SizeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeRequest::Exact(n) => write!(f, "of size {n}"),
            SizeRequest::AtLeast(n) => write!(f, "of size {n} or more"),
            SizeRequest::Any => write!(f, "registered"),
            SizeRequest::Default => write!(f, "in the default set"),
        }
    }
}
