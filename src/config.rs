//! Game configuration
//!
//! Settings resolved from command-line flags and environment, plus the
//! secret source built from them.

use crate::core::{Word, WordError};
use crate::wordlists::{SECRETS, loader, pick_secret};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Pause before the win/lose message appears
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid secret word '{secret}': {source}")]
    InvalidSecret { secret: String, source: WordError },
    #[error("cannot read word list {}: {source}", .path.display())]
    WordList {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("word list {} has no valid 5-letter words", .path.display())]
    EmptyWordList { path: PathBuf },
}

/// Resolved game settings
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed secret for every game, instead of a random one
    pub secret: Option<String>,
    /// Secret candidates file, instead of the embedded list
    pub word_list: Option<PathBuf>,
    /// Seed for reproducible secret selection
    pub seed: Option<u64>,
    pub reveal_delay: Duration,
    /// Start with the debug panel open
    pub show_debug: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            secret: None,
            word_list: None,
            seed: None,
            reveal_delay: DEFAULT_REVEAL_DELAY,
            show_debug: false,
        }
    }
}

impl GameConfig {
    /// Candidate secrets: the configured file, or the embedded list
    ///
    /// # Errors
    /// Fails if the file cannot be read or holds no valid words.
    pub fn secret_pool(&self) -> Result<Vec<Word>, ConfigError> {
        let Some(path) = &self.word_list else {
            return Ok(loader::words_from_slice(SECRETS));
        };

        let words = loader::load_from_file(path).map_err(|source| ConfigError::WordList {
            path: path.clone(),
            source,
        })?;
        if words.is_empty() {
            return Err(ConfigError::EmptyWordList { path: path.clone() });
        }
        Ok(words)
    }

    /// The configured fixed secret, validated
    ///
    /// # Errors
    /// Fails if the secret is not a 5-letter word.
    pub fn fixed_secret(&self) -> Result<Option<Word>, ConfigError> {
        self.secret
            .as_deref()
            .map(|secret| {
                Word::new(secret).map_err(|source| ConfigError::InvalidSecret {
                    secret: secret.to_string(),
                    source,
                })
            })
            .transpose()
    }

    /// Random source for secret selection, seeded when configured
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }

    /// Build the source of secrets for this run
    ///
    /// # Errors
    /// Fails if the fixed secret is invalid or the word list is unusable.
    pub fn secret_source(&self) -> Result<SecretSource, ConfigError> {
        let fixed = self.fixed_secret()?;
        // A fixed secret makes the word list irrelevant
        let pool = if fixed.is_some() {
            Vec::new()
        } else {
            self.secret_pool()?
        };

        Ok(SecretSource {
            fixed,
            pool,
            rng: self.rng(),
        })
    }
}

/// Hands out the secret for each new game
#[derive(Debug, Clone)]
pub struct SecretSource {
    fixed: Option<Word>,
    pool: Vec<Word>,
    rng: StdRng,
}

impl SecretSource {
    /// Secret for the next game
    ///
    /// Always `Some` for sources built by [`GameConfig::secret_source`].
    pub fn next_secret(&mut self) -> Option<Word> {
        if let Some(fixed) = &self.fixed {
            return Some(fixed.clone());
        }
        let secret = pick_secret(&self.pool, &mut self.rng).cloned();
        if let Some(secret) = &secret {
            tracing::debug!(pool = self.pool.len(), "picked secret {secret}");
        }
        secret
    }

    /// Number of candidates a random secret is drawn from
    #[must_use]
    pub fn pool_size(&self) -> usize {
        if self.fixed.is_some() { 1 } else { self.pool.len() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.reveal_delay, Duration::from_millis(500));
        assert!(config.secret.is_none());
        assert!(!config.show_debug);
    }

    #[test]
    fn fixed_secret_is_normalized() {
        let config = GameConfig {
            secret: Some("words".to_string()),
            ..GameConfig::default()
        };
        let mut source = config.secret_source().unwrap();

        assert_eq!(source.pool_size(), 1);
        assert_eq!(source.next_secret().unwrap().text(), "WORDS");
        assert_eq!(source.next_secret().unwrap().text(), "WORDS");
    }

    #[test]
    fn invalid_fixed_secret_is_rejected() {
        let config = GameConfig {
            secret: Some("word".to_string()),
            ..GameConfig::default()
        };
        let err = config.secret_source().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidSecret {
                source: WordError::InvalidLength(4),
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "invalid secret word 'word': Word must be exactly 5 letters, got 4"
        );
    }

    #[test]
    fn seeded_sources_agree() {
        let config = GameConfig {
            seed: Some(2024),
            ..GameConfig::default()
        };
        let mut a = config.secret_source().unwrap();
        let mut b = config.secret_source().unwrap();

        for _ in 0..5 {
            assert_eq!(a.next_secret(), b.next_secret());
        }
        assert_eq!(a.pool_size(), SECRETS.len());
    }

    #[test]
    fn word_list_file_is_used() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "crane").unwrap();

        let config = GameConfig {
            word_list: Some(file.path().to_path_buf()),
            ..GameConfig::default()
        };
        let mut source = config.secret_source().unwrap();
        assert_eq!(source.next_secret().unwrap().text(), "CRANE");
    }

    #[test]
    fn empty_word_list_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# nothing usable\nabc").unwrap();

        let config = GameConfig {
            word_list: Some(file.path().to_path_buf()),
            ..GameConfig::default()
        };
        assert!(matches!(config.secret_pool(), Err(ConfigError::EmptyWordList { .. })));
    }

    #[test]
    fn missing_word_list_is_rejected() {
        let config = GameConfig {
            word_list: Some(PathBuf::from("no/such/list.txt")),
            ..GameConfig::default()
        };
        assert!(matches!(config.secret_pool(), Err(ConfigError::WordList { .. })));
    }
}
