//! File sink implementation

use crate::core::{LoggerError, Result, Sink};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends rendered lines to a file.
///
/// With the `file` feature each write holds an advisory exclusive lock so
/// lines from several processes sharing the file do not interleave.
pub struct FileSink {
    file: File,
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation("opening log file", path.display().to_string(), e)
            })?;
        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[cfg(feature = "file")]
    fn write_locked(&mut self, buf: &[u8]) -> std::io::Result<()> {
        use fs2::FileExt;

        self.file.lock_exclusive()?;
        let written = self.file.write_all(buf);
        let unlocked = FileExt::unlock(&self.file);
        written.and(unlocked)
    }

    #[cfg(not(feature = "file"))]
    fn write_locked(&mut self, buf: &[u8]) -> std::io::Result<()> {
        self.file.write_all(buf)
    }
}

impl Sink for FileSink {
    fn write(&mut self, buf: &[u8]) -> Result<()> {
        self.write_locked(buf).map_err(|e| {
            LoggerError::io_operation("writing log file", self.path.display().to_string(), e)
        })
    }

    fn flush(&mut self) -> Result<()> {
        self.file.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}
