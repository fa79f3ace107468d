//! Severity levels that gate which messages reach the destination.

use std::fmt;
use std::str::FromStr;

/// Ordered from most urgent to least urgent so a threshold admits everything numerically at or below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// The system is unusable.
    Emergency = 0,
    /// Action must be taken immediately.
    Alert = 1,
    /// Critical conditions.
    Critical = 2,
    /// Operation failed.
    Error = 3,
    /// Something unexpected that did not stop the operation.
    Warning = 4,
    /// Normal but significant events.
    Notice = 5,
    /// Operational milestones.
    Info = 6,
    /// Developer diagnostics. Also the default threshold, so nothing is hidden out of the box.
    #[default]
    Debug = 7,
    /// Bypasses threshold filtering entirely.
    Always = 8,
}

impl Level {
    /// Lowercase because config files and CLI args use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Emergency => "emergency",
            Self::Alert => "alert",
            Self::Critical => "critical",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Notice => "notice",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Always => "always",
        }
    }

    /// Display name rendered by the `&lev` token before casing is applied.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Emergency => "Emerg",
            Self::Alert => "Alert",
            Self::Critical => "Crit",
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Notice => "Notice",
            Self::Info => "Info",
            Self::Debug => "Debug",
            Self::Always => "Always",
        }
    }

    /// Whether a message at this level gets through a logger configured with `threshold`.
    ///
    /// `Always` skips the check. Emergency takes the same numeric comparison as every other
    /// level; as the lowest value it passes any threshold.
    #[must_use]
    pub const fn passes(self, threshold: Self) -> bool {
        matches!(self, Self::Always) || self as u8 <= threshold as u8
    }

    /// Every level in severity order, for iteration.
    #[must_use]
    pub const fn all() -> [Self; 9] {
        [
            Self::Emergency,
            Self::Alert,
            Self::Critical,
            Self::Error,
            Self::Warning,
            Self::Notice,
            Self::Info,
            Self::Debug,
            Self::Always,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "emergency" | "emerg" => Ok(Self::Emergency),
            "alert" => Ok(Self::Alert),
            "critical" | "crit" => Ok(Self::Critical),
            "error" | "err" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            "notice" => Ok(Self::Notice),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "always" => Ok(Self::Always),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
