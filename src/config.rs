//! Generator configuration.
//!
//! Defaults come from a TOML file; command-line flags override them. The
//! safety floor and the default alphabet rotation are configuration rather
//! than fixed behaviour.

use crate::alphabet::builtin;
use crate::catalog::{Selector, WORD_LIST_NAME};
use crate::generator::DEFAULT_MIN_BITS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Largest entropy request accepted from configuration or the command line.
pub const MAX_BITS: u32 = 16_384;

/// Configuration file format.
///
/// ```toml
/// bits = 96
/// min_bits = 40
/// alphabet = 62
/// wordlist = "wordlist.txt.bz2"
/// default_alphabets = ["alnum62", "classed71"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Requested entropy, in bits.
    pub bits: u32,
    /// Safety floor; requests below it are rejected.
    pub min_bits: u32,
    /// Floor shown to users, may overstate `min_bits`.
    pub advertised_min_bits: u32,
    /// Requested alphabet size (exact below 100, minimum otherwise).
    pub alphabet: Option<usize>,
    /// Bzip2-compressed word list; relative paths are resolved against the
    /// directory of the configuration file.
    pub wordlist: PathBuf,
    /// Names of the alphabets rotated through when no size is requested.
    pub default_alphabets: Vec<String>,
    /// Pause between candidates in loop mode, in milliseconds.
    pub loop_delay_ms: u64,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            bits: 96,
            min_bits: DEFAULT_MIN_BITS,
            advertised_min_bits: 64,
            alphabet: None,
            wordlist: PathBuf::from("wordlist.txt.bz2"),
            default_alphabets: builtin::DEFAULT_ROTATION
                .iter()
                .map(|name| name.to_string())
                .collect(),
            loop_delay_ms: 750,
        }
    }
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        let mut config: FileConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        if config.wordlist.is_relative() {
            if let Some(dir) = path.parent() {
                config.wordlist = dir.join(&config.wordlist);
            }
        }

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_bits == 0 {
            return Err(ConfigError::InvalidFloor);
        }
        if self.bits > MAX_BITS {
            return Err(ConfigError::BitsTooLarge {
                bits: self.bits,
                max: MAX_BITS,
            });
        }
        if self.default_alphabets.is_empty() {
            return Err(ConfigError::EmptyDefaults);
        }
        if let Some(unknown) = self
            .default_alphabets
            .iter()
            .find(|name| builtin::builtin(name).is_none() && name.as_str() != WORD_LIST_NAME)
        {
            return Err(ConfigError::UnknownAlphabet(unknown.clone()));
        }
        Ok(())
    }

    /// Floor to show in messages: never below the real floor.
    pub fn displayed_min_bits(&self) -> u32 {
        self.advertised_min_bits.max(self.min_bits)
    }

    /// Selector for the configured alphabet size.
    pub fn selector(&self, rotate: bool) -> Selector {
        Selector::from_requested_size(self.alphabet, rotate)
    }
}

/// Configuration errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("safety floor must be at least 1 bit")]
    InvalidFloor,
    #[error("{bits} bits requested, at most {max} are supported")]
    BitsTooLarge { bits: u32, max: u32 },
    #[error("default_alphabets must name at least one alphabet")]
    EmptyDefaults,
    #[error("unknown alphabet in default_alphabets: {0}")]
    UnknownAlphabet(String),
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.displayed_min_bits(), 64);
        assert_eq!(config.selector(false), Selector::default());
    }

    #[test]
    fn test_displayed_floor_never_understates() {
        let config = FileConfig {
            min_bits: 80,
            ..Default::default()
        };
        assert_eq!(config.displayed_min_bits(), 80);
    }

    #[test]
    fn test_unknown_default_alphabet() {
        let config = FileConfig {
            default_alphabets: vec!["alnum62".into(), "klingon".into()],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnknownAlphabet(name)) if name == "klingon"
        ));
    }

    #[test]
    fn test_bits_ceiling() {
        let config = FileConfig {
            bits: MAX_BITS,
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        let config = FileConfig {
            bits: 4_000_000_000,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BitsTooLarge {
                bits: 4_000_000_000,
                max: MAX_BITS
            })
        ));
    }

    #[test]
    fn test_oversized_bits_rejected_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "bits = 100000\n").unwrap();

        assert!(matches!(
            FileConfig::from_file(&path),
            Err(ConfigError::BitsTooLarge { bits: 100_000, .. })
        ));
    }

    #[test]
    fn test_words_allowed_in_defaults() {
        let config = FileConfig {
            default_alphabets: vec![WORD_LIST_NAME.into()],
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "bits = 128\nalphabet = 71\n").unwrap();

        let config = FileConfig::from_file(&path).unwrap();
        assert_eq!(config.bits, 128);
        assert_eq!(config.min_bits, DEFAULT_MIN_BITS);
        assert_eq!(config.selector(false), Selector::exact(71));
        assert_eq!(config.wordlist, dir.path().join("wordlist.txt.bz2"));
    }

    #[test]
    fn test_absolute_wordlist_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let words = dir.path().join("elsewhere").join("eff.txt.bz2");
        std::fs::write(&path, format!("wordlist = {:?}\n", words.display().to_string())).unwrap();

        let config = FileConfig::from_file(&path).unwrap();
        assert_eq!(config.wordlist, words);
    }

    #[test]
    fn test_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "bits = \"lots\"\n").unwrap();

        assert!(matches!(
            FileConfig::from_file(&path),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            FileConfig::from_file("/nonexistent/entropy-password.toml"),
            Err(ConfigError::FileReadError(_))
        ));
    }
}
