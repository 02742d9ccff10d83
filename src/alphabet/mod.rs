//! Symbol alphabets.
//!
//! An alphabet is one of three shapes:
//!
//! - [`Alphabet::Flat`]: a plain character set, rendered without separators.
//! - [`Alphabet::Classed`]: disjoint character classes, each of which must
//!   appear at least once; rendered without separators.
//! - [`Alphabet::Words`]: a lazily loaded word list, rendered with single
//!   spaces between words.
//!
//! Sizes are reported as a [`LazyLength`] so that filtering a catalog by
//! size does not force a word list off disk unless the answer depends on it.

pub mod builtin;
mod charset;
mod lazy;
mod wordlist;

pub use charset::{Charset, ClassedCharset};
pub use lazy::LazyLength;
pub use wordlist::{
    decode_word_list, load_word_list, WordList, WordListError, WORD_LIST_LOWER_BOUND,
};

use std::sync::Arc;

/// A source of symbols for generated secrets.
#[derive(Debug, Clone)]
pub enum Alphabet {
    /// Single characters drawn uniformly from one set.
    Flat(Charset),
    /// Character classes, each mandatory at least once.
    Classed(ClassedCharset),
    /// Words from a word list.
    Words(Arc<WordList>),
}

impl Alphabet {
    /// Creates a flat alphabet from the characters of `symbols`.
    pub fn flat(symbols: &str) -> Self {
        Alphabet::Flat(Charset::new(symbols))
    }

    /// Creates a classed alphabet, one class per string, in order.
    pub fn classed(classes: &[&str]) -> Self {
        Alphabet::Classed(ClassedCharset::new(
            classes.iter().map(|c| Charset::new(c)).collect(),
        ))
    }

    /// Wraps a word list.
    pub fn words(list: WordList) -> Self {
        Alphabet::Words(Arc::new(list))
    }

    /// Short name of the alphabet's shape, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Alphabet::Flat(_) => "flat",
            Alphabet::Classed(_) => "classed",
            Alphabet::Words(_) => "words",
        }
    }

    /// Number of symbols, deferred for word lists that are not loaded yet.
    pub fn size(&self) -> LazyLength<'_> {
        match self {
            Alphabet::Flat(set) => LazyLength::Known(set.len()),
            Alphabet::Classed(set) => LazyLength::Known(set.union().len()),
            Alphabet::Words(list) => list.size(),
        }
    }

    /// Number of symbols, loading the word list if necessary.
    pub fn exact_size(&self) -> Result<usize, WordListError> {
        self.size().force()
    }

    /// Number of leading symbols that are drawn from mandatory classes.
    pub fn mandatory_count(&self) -> usize {
        match self {
            Alphabet::Classed(set) => set.classes().len(),
            Alphabet::Flat(_) | Alphabet::Words(_) => 0,
        }
    }

    /// Text placed between rendered symbols.
    pub fn separator(&self) -> &'static str {
        match self {
            Alphabet::Flat(_) | Alphabet::Classed(_) => "",
            Alphabet::Words(_) => " ",
        }
    }

    /// Renders a digit sequence into the final secret.
    ///
    /// For flat alphabets and word lists each digit indexes the whole
    /// alphabet. For classed alphabets the first digits index the mandatory
    /// classes in order and the rest index their union. Digits must be in
    /// range for the position they occupy.
    pub fn render(&self, digits: &[usize]) -> Result<String, WordListError> {
        match self {
            Alphabet::Flat(set) => Ok(digits.iter().map(|&d| set.symbols()[d]).collect()),
            Alphabet::Classed(set) => Ok(set
                .classes()
                .iter()
                .chain(std::iter::repeat(set.union()))
                .zip(digits)
                .map(|(class, &d)| class.symbols()[d])
                .collect()),
            Alphabet::Words(list) => {
                let words = list.words()?;
                Ok(digits
                    .iter()
                    .map(|&d| words[d].as_str())
                    .collect::<Vec<_>>()
                    .join(self.separator()))
            }
        }
    }
}
