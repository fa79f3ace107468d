//! Standard streams. Nothing to configure and nothing that can fail to open.

use super::Output;
use crate::error::Error;
use std::io::{self, Write};

/// Which standard stream a terminal output writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stream {
    #[default]
    Stdout,
    Stderr,
}

/// Writes lines to stdout or stderr and flushes after each one.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalOutput {
    stream: Stream,
}

impl TerminalOutput {
    #[must_use]
    pub const fn new(stream: Stream) -> Self {
        Self { stream }
    }
}

impl Output for TerminalOutput {
    fn write(&mut self, msg: &str) -> Result<(), Error> {
        match self.stream {
            Stream::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(msg.as_bytes())?;
                out.flush()?;
            }
            Stream::Stderr => {
                let mut err = io::stderr().lock();
                err.write_all(msg.as_bytes())?;
                err.flush()?;
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error> {
        match self.stream {
            Stream::Stdout => io::stdout().flush()?,
            Stream::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }
}
