//! File sink implementation

use crate::core::{LoggerError, Result, Sink};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends text to a file, opening it for every write.
///
/// Reopening per entry means a log file that is deleted or whose directory
/// reappears is picked up again on the next write, and a failed write leaves
/// no broken handle behind.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn append(&mut self, text: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    self.path.display().to_string(),
                    e,
                )
            })?;

        file.write_all(text.as_bytes()).map_err(|e| {
            LoggerError::io_operation("appending to log file", self.path.display().to_string(), e)
        })?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}
