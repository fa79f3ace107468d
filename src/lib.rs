//! `patlog` - Pattern-driven line logger.
//!
//! The layout of every line is described by a compact token string such as
//! `&pre&tim&sep&lev&sep&msg&end`, compiled once and re-rendered on each call:
//! - Built-in profiles (none, minimal, default, verbose) or a custom pattern
//! - Numbered user fragments (`&us0`, `&us12`) registered at runtime
//! - Severity filtering with an unconditional `always` level
//! - Label casing, whole-line ANSI color, bounded line length
//! - Stdout, stderr or file destination with fallback to stdout
//!
//! # Example
//!
//! ```
//! use patlog::{Level, Logger, MemoryOutput};
//!
//! let out = MemoryOutput::new();
//! let mut logger = Logger::builder()
//!     .level(Level::Warning)
//!     .substitution(0, "~~")
//!     .pattern("&us0&lev&sep&msg&end")
//!     .output(out.clone())
//!     .build();
//!
//! logger.info("filtered out");
//! logger.warning("disk almost full");
//! patlog::always!(logger, "{} files scanned", 42);
//!
//! assert_eq!(out.lines(), ["~~Warning | disk almost full\n", "~~Always  | 42 files scanned\n"]);
//! ```
//!
//! # Features
//!
//! - `cli` (default): Enables the `patlog` command-line front end

pub mod config;
mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;
pub mod pattern;
pub mod store;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use config::Config;
pub use error::Error;
pub use fmt::{Casing, ColorCode};
pub use level::Level;
pub use logger::{ConfigSlot, Logger, LoggerBuilder};
pub use output::{FileOutput, MemoryOutput, Output, TerminalOutput};
pub use pattern::{CompiledPattern, Instruction, Profile};
pub use store::{Destination, LogConfig};
