use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;

use crate::duration_fmt::{format_duration, parse_duration};
use crate::error::{Error, Result};

pub const DEFAULT_HIGHSCORE_FILE: &str = "highscore.txt";

/// Durable storage for the best completion time
pub trait HighscoreStore {
    /// `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<Duration>>;
    fn save(&mut self, highscore: Duration) -> Result<()>;
}

/// Plain-text duration (e.g. `1.234s`) in a single file
#[derive(Debug, Clone)]
pub struct FileHighscoreStore {
    path: PathBuf,
}

impl FileHighscoreStore {
    pub fn new() -> Self {
        Self::with_path(DEFAULT_HIGHSCORE_FILE)
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

impl Default for FileHighscoreStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HighscoreStore for FileHighscoreStore {
    fn load(&self) -> Result<Option<Duration>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no highscore file yet");
                return Ok(None);
            }
            Err(source) => {
                return Err(Error::PersistenceRead {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        // zero was written as "no highscore" by older versions
        let highscore = parse_duration(data.trim())?;
        Ok(Some(highscore).filter(|d| !d.is_zero()))
    }

    fn save(&mut self, highscore: Duration) -> Result<()> {
        fs::write(&self.path, format_duration(highscore)).map_err(|source| {
            Error::PersistenceWrite {
                path: self.path.clone(),
                source,
            }
        })
    }
}

/// Keeps the highscore in memory only
#[derive(Debug, Clone, Default)]
pub struct MemoryHighscoreStore {
    highscore: Option<Duration>,
    saves: usize,
}

impl MemoryHighscoreStore {
    pub fn new(highscore: Option<Duration>) -> Self {
        Self {
            highscore,
            saves: 0,
        }
    }

    /// Number of successful `save` calls.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl HighscoreStore for MemoryHighscoreStore {
    fn load(&self) -> Result<Option<Duration>> {
        Ok(self.highscore)
    }

    fn save(&mut self, highscore: Duration) -> Result<()> {
        self.highscore = Some(highscore);
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_no_highscore() {
        let dir = tempdir().unwrap();
        let store = FileHighscoreStore::with_path(dir.path().join("highscore.txt"));

        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("highscore.txt");
        let mut store = FileHighscoreStore::with_path(&path);

        store.save(Duration::from_millis(12_345)).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "12.345s");
        assert_eq!(store.load().unwrap(), Some(Duration::from_millis(12_345)));
    }

    #[test]
    fn test_load_trims_whitespace() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("highscore.txt");
        fs::write(&path, "  1m2.5s\n").unwrap();

        let store = FileHighscoreStore::with_path(&path);
        assert_eq!(store.load().unwrap(), Some(Duration::from_millis(62_500)));
    }

    #[test]
    fn test_stored_zero_is_unset() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("highscore.txt");
        fs::write(&path, "0s").unwrap();

        let store = FileHighscoreStore::with_path(&path);
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_is_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("highscore.txt");
        fs::write(&path, "fast").unwrap();

        let store = FileHighscoreStore::with_path(&path);
        assert_matches!(store.load(), Err(Error::MalformedDuration { .. }));
    }

    #[test]
    fn test_unreadable_path_is_read_error() {
        let dir = tempdir().unwrap();

        // a directory cannot be read as a file
        let store = FileHighscoreStore::with_path(dir.path());
        assert_matches!(store.load(), Err(Error::PersistenceRead { .. }));
    }

    #[test]
    fn test_save_into_missing_dir_is_write_error() {
        let dir = tempdir().unwrap();
        let mut store =
            FileHighscoreStore::with_path(dir.path().join("missing").join("highscore.txt"));

        assert_matches!(
            store.save(Duration::from_secs(1)),
            Err(Error::PersistenceWrite { .. })
        );
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryHighscoreStore::new(None);
        assert_eq!(store.load().unwrap(), None);

        store.save(Duration::from_secs(3)).unwrap();

        assert_eq!(store.load().unwrap(), Some(Duration::from_secs(3)));
        assert_eq!(store.saves(), 1);
    }
}
