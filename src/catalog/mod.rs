//! Registry of alphabets and selection among them.
//!
//! A catalog is built once at startup (built-ins, then an optional word
//! list) and only read afterwards. Selection filters it by size, falls back
//! to a configured default subset, and shuffles the result so repeated runs
//! rotate through different alphabets.

mod selector;

pub use selector::{SizeRequest, Selector};

use crate::alphabet::{builtin, Alphabet, LazyLength, WordList, WordListError};
use crate::error::{Error, Result};
use rand::seq::SliceRandom;
use rand_core::RngCore;
use std::sync::Arc;
use thiserror::Error;

/// Weight of a registered word list relative to one character alphabet.
pub const WORD_LIST_WEIGHT: usize = 3;

/// Name under which a word list is registered.
pub const WORD_LIST_NAME: &str = "words";

/// Errors raised while assembling a catalog.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("unknown alphabet: {0}")]
    UnknownAlphabet(String),
    #[error("default alphabet set is empty")]
    EmptyDefaults,
}

/// A named alphabet in the catalog.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    name: String,
    alphabet: Arc<Alphabet>,
}

impl CatalogEntry {
    /// Returns the registered name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}

/// Ordered collection of registered alphabets.
#[derive(Debug, Clone, Default)]
pub struct AlphabetCatalog {
    entries: Vec<CatalogEntry>,
    defaults: Vec<CatalogEntry>,
}

impl AlphabetCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog of every built-in with the built-in default rotation.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for (name, alphabet) in builtin::all() {
            catalog.register(name, alphabet);
        }
        catalog.defaults = builtin::DEFAULT_ROTATION
            .iter()
            .filter_map(|name| catalog.entry(name))
            .collect();
        catalog
    }

    /// Registers `alphabet` once.
    pub fn register(&mut self, name: impl Into<String>, alphabet: Alphabet) {
        self.register_weighted(name, alphabet, 1);
    }

    /// Registers `alphabet` `weight` times, sharing one instance.
    pub fn register_weighted(&mut self, name: impl Into<String>, alphabet: Alphabet, weight: usize) {
        let entry = CatalogEntry {
            name: name.into(),
            alphabet: Arc::new(alphabet),
        };
        tracing::debug!(name = %entry.name, kind = entry.alphabet.kind(), weight, "Registered alphabet");
        self.entries
            .extend(std::iter::repeat(entry).take(weight));
    }

    /// Registers a word list, weighted so passphrases come up
    /// [`WORD_LIST_WEIGHT`] times as often as any single character alphabet.
    pub fn register_word_list(&mut self, list: WordList) {
        self.register_weighted(WORD_LIST_NAME, Alphabet::words(list), WORD_LIST_WEIGHT);
    }

    /// Replaces the default subset by names of registered alphabets.
    ///
    /// Names may repeat to weight an alphabet.
    pub fn set_defaults<S: AsRef<str>>(&mut self, names: &[S]) -> std::result::Result<(), CatalogError> {
        if names.is_empty() {
            return Err(CatalogError::EmptyDefaults);
        }
        let defaults = names
            .iter()
            .map(|name| {
                self.entry(name.as_ref())
                    .ok_or_else(|| CatalogError::UnknownAlphabet(name.as_ref().to_string()))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        self.defaults = defaults;
        Ok(())
    }

    /// Looks up a registered alphabet by name.
    pub fn get(&self, name: &str) -> Option<&Alphabet> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(CatalogEntry::alphabet)
    }

    /// Registered entries, repeated by weight.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Number of registered entries, counting weights.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Selects candidate alphabets in random order.
    ///
    /// Never returns an empty list; an empty selection is reported as
    /// [`Error::NoMatchingAlphabet`] with every available size. A word list
    /// shorter than its assumed lower bound is only seen at its real size
    /// after that forcing, so the selection is retried once against the
    /// forced sizes before giving up.
    pub fn select<G>(&self, selector: &Selector, rng: &mut G) -> Result<Vec<CatalogEntry>>
    where
        G: RngCore + ?Sized,
    {
        let mut chosen = self.candidates(selector)?;

        if chosen.is_empty() {
            let available_sizes = self.available_sizes()?;
            chosen = self.candidates(selector)?;
            if chosen.is_empty() {
                return Err(Error::NoMatchingAlphabet {
                    requested: selector.request(),
                    available_sizes,
                });
            }
            tracing::debug!(
                request = %selector.request(),
                "Matched only after loading word lists"
            );
        }

        chosen.shuffle(rng);
        tracing::debug!(
            request = %selector.request(),
            candidates = chosen.len(),
            "Selected alphabets"
        );
        Ok(chosen)
    }

    /// Sorted, deduplicated sizes of every registered alphabet.
    ///
    /// Loads any word list that is not in memory yet.
    pub fn available_sizes(&self) -> std::result::Result<Vec<usize>, WordListError> {
        let mut sizes = self
            .entries
            .iter()
            .map(|e| e.alphabet.exact_size())
            .collect::<std::result::Result<Vec<_>, _>>()?;
        sizes.sort_unstable();
        sizes.dedup();
        Ok(sizes)
    }

    fn entry(&self, name: &str) -> Option<CatalogEntry> {
        self.entries.iter().find(|e| e.name == name).cloned()
    }

    fn candidates(&self, selector: &Selector) -> Result<Vec<CatalogEntry>> {
        if let Some(exact) = selector.exact_size {
            let matches = self.filter(|size| size.equals(exact))?;
            return match selector.min_size {
                Some(min) if matches.is_empty() && min < exact => {
                    tracing::debug!(exact, min, "No exact match, falling back to minimum size");
                    self.filter(|size| size.at_least(min))
                }
                _ => Ok(matches),
            };
        }
        if let Some(min) = selector.min_size {
            return self.filter(|size| size.at_least(min));
        }
        if selector.rotate {
            Ok(self.entries.clone())
        } else {
            Ok(self.defaults.clone())
        }
    }

    fn filter<F>(&self, mut keep: F) -> Result<Vec<CatalogEntry>>
    where
        F: FnMut(&mut LazyLength<'_>) -> std::result::Result<bool, WordListError>,
    {
        let mut kept = Vec::new();
        for entry in &self.entries {
            if keep(&mut entry.alphabet.size())? {
                kept.push(entry.clone());
            }
        }
        Ok(kept)
    }
}
