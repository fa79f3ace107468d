//! The write collaborator. The logger hands each finished line to an `Output`; opening,
//! closing and flushing the underlying stream or file is the output's business.

mod file;
mod memory;
mod terminal;

pub use file::FileOutput;
pub use memory::MemoryOutput;
pub use terminal::{Stream, TerminalOutput};

use crate::error::Error;
use crate::store::Destination;

/// `Send` so a logger can be moved into a `Mutex` and shared across threads by the caller.
pub trait Output: Send {
    /// Writes one rendered line exactly as given (any newline comes from the pattern's `&end`).
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn write(&mut self, msg: &str) -> Result<(), Error>;

    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&mut self) -> Result<(), Error>;
}

/// Opens the sink a [`Destination`] names.
///
/// # Errors
/// [`Error::DestinationUnavailable`] when a log file cannot be created.
pub fn open(destination: &Destination) -> Result<Box<dyn Output>, Error> {
    match destination {
        Destination::Stdout => Ok(Box::new(TerminalOutput::new(Stream::Stdout))),
        Destination::Stderr => Ok(Box::new(TerminalOutput::new(Stream::Stderr))),
        Destination::File(path) => Ok(Box::new(FileOutput::create(path)?)),
    }
}
