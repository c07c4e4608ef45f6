use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::app_dirs::AppDirs;
use crate::error::{Error, Result};
use crate::highscore::DEFAULT_HIGHSCORE_FILE;
use crate::language::SupportedLanguage;
use crate::word_generator::WordGenConfig;

/// Persisted defaults, overridden by command line flags
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub number_of_words: usize,
    pub number_of_sentences: Option<usize>,
    pub language: SupportedLanguage,
    pub highscore_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            number_of_words: 8,
            number_of_sentences: None,
            language: SupportedLanguage::English,
            highscore_file: PathBuf::from(DEFAULT_HIGHSCORE_FILE),
        }
    }
}

impl Config {
    pub fn word_gen_config(&self, custom_prompt: Option<String>) -> WordGenConfig {
        WordGenConfig {
            number_of_words: self.number_of_words,
            number_of_sentences: self.number_of_sentences,
            custom_prompt,
            language: self.language,
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Result<Config>;
    fn save(&self, cfg: &Config) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        Self {
            path: AppDirs::config_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Result<Config> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_slice(&bytes).map_err(|source| Error::Config {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, cfg: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg).map_err(|source| Error::Config {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let store = FileConfigStore::with_path(dir.path().join("config.json"));

        assert_eq!(store.load().unwrap(), Config::default());
    }

    #[test]
    fn roundtrip_custom_config() {
        let dir = tempdir().unwrap();
        let store = FileConfigStore::with_path(dir.path().join("nested").join("config.json"));
        let cfg = Config {
            number_of_words: 20,
            number_of_sentences: Some(2),
            language: SupportedLanguage::EnglishLong,
            highscore_file: PathBuf::from("/tmp/best.txt"),
        };

        store.save(&cfg).unwrap();

        assert_eq!(store.load().unwrap(), cfg);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "number_of_words": 12 }"#).unwrap();

        let cfg = FileConfigStore::with_path(&path).load().unwrap();

        assert_eq!(cfg.number_of_words, 12);
        assert_eq!(cfg.highscore_file, PathBuf::from("highscore.txt"));
    }

    #[test]
    fn invalid_file_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        assert_matches!(
            FileConfigStore::with_path(&path).load(),
            Err(Error::Config { .. })
        );
    }

    #[test]
    fn word_gen_config_carries_prompt() {
        let gen = Config::default().word_gen_config(Some("hi there".to_string()));

        assert_eq!(gen.custom_prompt.as_deref(), Some("hi there"));
        assert_eq!(gen.number_of_words, 8);
    }
}
