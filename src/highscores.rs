//! Best score persistence
//!
//! The record is a single little-endian `i32` in a small binary file. Loading
//! and saving never interrupt play: a missing or unreadable record loads as
//! zero, and a failed write is logged and forgotten.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Size of the on-disk record
pub const RECORD_LEN: usize = 4;

/// Why a high score record could not be read or written
#[derive(Debug, Error)]
pub enum HighScoreError {
    #[error("high score file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("high score record truncated ({0} of {RECORD_LEN} bytes)")]
    Truncated(usize),
    #[error("high score record holds a negative value ({0})")]
    Negative(i32),
    #[error("high score {0} does not fit the record")]
    TooLarge(u32),
}

/// Storage collaborator for the best score
pub trait HighScoreStore {
    /// Stored best score, `0` when there is none or it cannot be read
    fn load_high_score(&mut self) -> u32;

    /// Persist a new best score; failures are logged, never returned
    fn save_high_score(&mut self, score: u32);
}

/// High score kept in a file on disk
#[derive(Debug, Clone)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the record; `Ok(None)` when the file does not exist
    pub fn read(&self) -> Result<Option<u32>, HighScoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        decode_record(&bytes).map(Some)
    }

    /// Write the record through a temp file so a crash never leaves half a record
    pub fn write(&self, score: u32) -> Result<(), HighScoreError> {
        let record = encode_record(score)?;
        let tmp = self.path.with_extension("tmp");
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(&record)?;
            file.sync_all()?;
        }
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load_high_score(&mut self) -> u32 {
        match self.read() {
            Ok(Some(score)) => score,
            Ok(None) => {
                log::info!("No high score file found, starting fresh.");
                0
            }
            Err(e) => {
                log::error!("Failed to read high score from {}: {}; resetting to zero.", self.path.display(), e);
                0
            }
        }
    }

    fn save_high_score(&mut self, score: u32) {
        match self.write(score) {
            Ok(()) => log::debug!("High score {} written to {}", score, self.path.display()),
            Err(e) => log::error!("Failed to write high score to {}: {}", self.path.display(), e),
        }
    }
}

/// Decode the first record in `bytes`; trailing bytes are ignored
pub fn decode_record(bytes: &[u8]) -> Result<u32, HighScoreError> {
    let Some(head) = bytes.get(..RECORD_LEN) else {
        return Err(HighScoreError::Truncated(bytes.len()));
    };
    let mut raw = [0u8; RECORD_LEN];
    raw.copy_from_slice(head);
    let value = i32::from_le_bytes(raw);
    u32::try_from(value).map_err(|_| HighScoreError::Negative(value))
}

/// Encode a score as a record
pub fn encode_record(score: u32) -> Result<[u8; RECORD_LEN], HighScoreError> {
    let value = i32::try_from(score).map_err(|_| HighScoreError::TooLarge(score))?;
    Ok(value.to_le_bytes())
}

/// In-memory store for tests and headless sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScoreStore {
    /// Currently stored value
    pub value: Option<u32>,
    /// Every value passed to `save_high_score`, in order
    pub saves: Vec<u32>,
    /// Simulate a broken backend: saves are recorded but not kept
    pub fail_writes: bool,
}

impl MemoryHighScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: u32) -> Self {
        Self {
            value: Some(value),
            ..Default::default()
        }
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load_high_score(&mut self) -> u32 {
        self.value.unwrap_or(0)
    }

    fn save_high_score(&mut self, score: u32) {
        self.saves.push(score);
        if self.fail_writes {
            log::error!("Failed to write high score to memory store (simulated)");
            return;
        }
        self.value = Some(score);
    }
}
