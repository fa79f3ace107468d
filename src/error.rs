//! Unified error type for all patlog operations.

use std::path::PathBuf;

/// Error type for patlog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error while writing or flushing a destination.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Pattern text violates the token grammar. Carries the rejected text.
    InvalidPattern(String),
    /// A log file could not be opened for writing.
    DestinationUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A config string did not name a known level, profile, casing or color.
    UnknownValue { kind: &'static str, value: String },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::InvalidPattern(p) => write!(f, "invalid pattern: '{p}'"),
            Self::DestinationUnavailable { path, source } => {
                write!(f, "cannot open {}: {source}", path.display())
            }
            Self::UnknownValue { kind, value } => write!(f, "unknown {kind}: '{value}'"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::DestinationUnavailable { source: e, .. } => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
