//! Lazily loaded word lists.
//!
//! Word lists live on disk as bzip2-compressed text, one word per line.
//! They are only decompressed when a word is needed or when a size
//! comparison cannot be settled without the real length.

use super::lazy::LazyLength;
use bzip2::read::BzDecoder;
use once_cell::sync::OnceCell;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Length a word list is assumed to reach before it is loaded.
///
/// This is an assumption, not a guarantee: a shorter list compares as if it
/// had this many words until something forces it.
pub const WORD_LIST_LOWER_BOUND: usize = 100;

type Loader = Box<dyn Fn() -> Result<Vec<String>, WordListError> + Send + Sync>;

/// Word list loading errors.
#[derive(Debug, Clone, Error)]
pub enum WordListError {
    /// The file does not exist.
    #[error("word list not found: {}", .0.display())]
    NotFound(PathBuf),
    /// The file could not be read or decompressed.
    #[error("failed to read word list {origin}: {reason}")]
    Read {
        /// Where the list came from.
        origin: String,
        /// Underlying failure.
        reason: String,
    },
    /// The decompressed text is not UTF-8.
    #[error("word list {origin} is not valid UTF-8: {reason}")]
    Encoding {
        /// Where the list came from.
        origin: String,
        /// Underlying failure.
        reason: String,
    },
}

/// A list of words loaded at most once, on first use.
pub struct WordList {
    origin: String,
    loader: Loader,
    words: OnceCell<Vec<String>>,
}

impl WordList {
    /// Opens a bzip2-compressed word list without reading it.
    ///
    /// Fails only if the file does not exist; decompression errors surface
    /// on first use.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, WordListError> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(WordListError::NotFound(path));
        }
        let origin = path.display().to_string();
        Ok(Self::from_loader(origin, move || load_word_list(&path)))
    }

    /// Creates a list backed by an arbitrary loader.
    pub fn from_loader<F>(origin: impl Into<String>, loader: F) -> Self
    where
        F: Fn() -> Result<Vec<String>, WordListError> + Send + Sync + 'static,
    {
        Self {
            origin: origin.into(),
            loader: Box::new(loader),
            words: OnceCell::new(),
        }
    }

    /// Creates an already loaded list.
    pub fn from_words(words: Vec<String>) -> Self {
        Self {
            origin: "memory".to_string(),
            loader: Box::new(|| Ok(Vec::new())),
            words: OnceCell::with_value(words),
        }
    }

    /// Returns the words, loading them on first call.
    ///
    /// Concurrent first calls load once. A failed load is not cached.
    pub fn words(&self) -> Result<&[String], WordListError> {
        self.words
            .get_or_try_init(|| {
                tracing::info!(origin = %self.origin, "Loading word list");
                let words = (self.loader)()?;
                tracing::debug!(origin = %self.origin, words = words.len(), "Word list loaded");
                Ok(words)
            })
            .map(Vec::as_slice)
    }

    /// Returns the size, deferred if the list is not loaded yet.
    pub fn size(&self) -> LazyLength<'_> {
        match self.words.get() {
            Some(words) => LazyLength::Known(words.len()),
            None => LazyLength::Pending {
                lower_bound: WORD_LIST_LOWER_BOUND,
                list: self,
            },
        }
    }

    /// Returns true once the words are in memory.
    pub fn is_loaded(&self) -> bool {
        self.words.get().is_some()
    }

    /// Returns where the list comes from.
    pub fn origin(&self) -> &str {
        &self.origin
    }
}

impl std::fmt::Debug for WordList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordList")
            .field("origin", &self.origin)
            .field("loaded", &self.words.get().map(Vec::len))
            .finish()
    }
}

/// Reads a bzip2-compressed word list from `path`.
pub fn load_word_list(path: &Path) -> Result<Vec<String>, WordListError> {
    let origin = path.display().to_string();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            WordListError::NotFound(path.to_path_buf())
        } else {
            WordListError::Read {
                origin: origin.clone(),
                reason: e.to_string(),
            }
        }
    })?;
    decode_word_list(BufReader::new(file), &origin)
}

/// Decompresses and splits a word list, one word per line.
///
/// Surrounding whitespace (including `\r\n` line endings) is trimmed and
/// blank lines are skipped.
pub fn decode_word_list<R: Read>(reader: R, origin: &str) -> Result<Vec<String>, WordListError> {
    let mut raw = Vec::new();
    BzDecoder::new(reader)
        .read_to_end(&mut raw)
        .map_err(|e| WordListError::Read {
            origin: origin.to_string(),
            reason: e.to_string(),
        })?;

    let text = String::from_utf8(raw).map_err(|e| WordListError::Encoding {
        origin: origin.to_string(),
        reason: e.to_string(),
    })?;

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bzip2::write::BzEncoder;
    use bzip2::Compression;
    use std::io::Write;

    fn compress(text: &[u8]) -> Vec<u8> {
        let mut encoder = BzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(text).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn test_decode_trims_and_skips_blank_lines() {
        let data = compress("apple\r\nbanana\n\n  cherry  \ndürer\n".as_bytes());
        let words = decode_word_list(data.as_slice(), "test").unwrap();

        assert_eq!(words, vec!["apple", "banana", "cherry", "dürer"]);
    }

    #[test]
    fn test_decode_rejects_uncompressed_data() {
        let result = decode_word_list(&b"apple\nbanana\n"[..], "plain");
        assert!(matches!(result, Err(WordListError::Read { .. })));
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        let data = compress(&[0x61, 0xFF, 0xFE, 0x0A]);
        let result = decode_word_list(data.as_slice(), "latin1");
        assert!(matches!(result, Err(WordListError::Encoding { .. })));
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = WordList::open(dir.path().join("missing.txt.bz2"));
        assert!(matches!(result, Err(WordListError::NotFound(_))));
    }

    #[test]
    fn test_open_is_lazy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt.bz2");
        let text: String = (0..250).map(|i| format!("word{i}\n")).collect();
        std::fs::write(&path, compress(text.as_bytes())).unwrap();

        let list = WordList::open(&path).unwrap();
        assert!(!list.is_loaded());
        assert!(!list.size().is_known());

        assert_eq!(list.words().unwrap().len(), 250);
        assert!(list.is_loaded());
        assert_eq!(list.size().force().unwrap(), 250);
    }

    #[test]
    fn test_file_removed_after_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt.bz2");
        std::fs::write(&path, compress(b"one\ntwo\n")).unwrap();

        let list = WordList::open(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(list.words(), Err(WordListError::NotFound(_))));
        assert!(!list.is_loaded());
    }

    #[test]
    fn test_from_words_is_loaded() {
        let list = WordList::from_words(vec!["a".into(), "b".into()]);
        assert!(list.is_loaded());
        assert_eq!(list.size().lower_bound(), 2);
    }
}
