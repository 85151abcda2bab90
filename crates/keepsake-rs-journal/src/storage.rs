//! Durable storage adapters for the journal collection.

use crate::error::JournalError;
use crate::model::MemoryRecord;
use directories::BaseDirs;
use log::{debug, info, warn};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Fixed file name the collection is persisted under.
pub const JOURNAL_FILENAME: &str = "memories.json";

/// Storage adapter abstraction used by the store.
///
/// The journal is persisted as a single serialized blob; `save` always
/// overwrites the whole collection.
pub trait JournalStorage: Send + Sync {
    /// Load the persisted collection. Missing or unparsable payloads load as
    /// an empty collection rather than an error.
    fn load(&self) -> Result<Vec<MemoryRecord>, JournalError>;

    /// Overwrite the persisted collection. No partial write may be
    /// observable afterwards.
    fn save(&self, records: &[MemoryRecord]) -> Result<(), JournalError>;
}

/// File-backed storage keeping the collection as one JSON document under a
/// root directory.
#[derive(Debug, Clone)]
pub struct FileJournalStorage {
    /// Root directory for the journal file.
    root: PathBuf,
}

impl FileJournalStorage {
    /// Create a file-backed storage under the given root, creating the
    /// directory if needed.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, JournalError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        info!("initialized file journal storage (root={})", root.display());
        Ok(Self { root })
    }

    /// Path to the journal file.
    fn journal_path(&self) -> PathBuf {
        self.root.join(JOURNAL_FILENAME)
    }

    /// Path to the temporary file used for atomic replacement.
    fn temp_path(&self) -> PathBuf {
        self.root.join(format!("{JOURNAL_FILENAME}.tmp"))
    }
}

impl JournalStorage for FileJournalStorage {
    fn load(&self) -> Result<Vec<MemoryRecord>, JournalError> {
        let path = self.journal_path();
        let payload = match fs::read_to_string(&path) {
            Ok(payload) => payload,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("no journal file yet (path={})", path.display());
                return Ok(Vec::new());
            }
            Err(err) => return Err(JournalError::Io(err)),
        };
        match serde_json::from_str::<Vec<MemoryRecord>>(&payload) {
            Ok(records) => {
                debug!("loaded journal (records={})", records.len());
                Ok(records)
            }
            Err(err) => {
                warn!(
                    "corrupt journal payload ignored, starting empty (path={}): {err}",
                    path.display()
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, records: &[MemoryRecord]) -> Result<(), JournalError> {
        let path = self.journal_path();
        let temp_path = self.temp_path();
        {
            let mut file = OpenOptions::new()
                .create(true)
                .truncate(true)
                .write(true)
                .open(&temp_path)?;
            let payload = serde_json::to_string(records)?;
            file.write_all(payload.as_bytes())?;
        }
        if path.exists() {
            fs::remove_file(&path)?;
        }
        fs::rename(temp_path, path)?;
        debug!("saved journal (records={})", records.len());
        Ok(())
    }
}

/// Default journal directory: `~/.keepsake`, falling back to the current
/// directory when no home directory is available.
pub fn default_journal_dir() -> Result<PathBuf, JournalError> {
    if let Some(dirs) = BaseDirs::new() {
        return Ok(dirs.home_dir().join(".keepsake"));
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(".keepsake"))
}
