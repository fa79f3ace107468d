//! File output. The file is created (or truncated) once when the logger is built; every line is
//! written and flushed immediately so a crash loses nothing already logged.

use super::Output;
use crate::error::Error;
use crate::internal;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Log file sink.
#[derive(Debug)]
pub struct FileOutput {
    path: PathBuf,
    file: File,
}

impl FileOutput {
    /// Creates `path`, truncating an existing file. Parent directories must already exist.
    ///
    /// # Errors
    /// [`Error::DestinationUnavailable`] if the file cannot be opened for writing.
    pub fn create(path: &Path) -> Result<Self, Error> {
        internal::debug("FILE", &format!("Opening {}", path.display()));
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .map_err(|source| {
                internal::warn(
                    "FILE",
                    &format!("Failed to open {}: {source}", path.display()),
                );
                Error::DestinationUnavailable {
                    path: path.to_path_buf(),
                    source,
                }
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Output for FileOutput {
    fn write(&mut self, msg: &str) -> Result<(), Error> {
        self.file.write_all(msg.as_bytes())?;
        self.file.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.file.flush()?;
        Ok(())
    }
}
