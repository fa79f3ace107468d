//! Level labels are the only token whose text changes with configuration: casing and a fixed
//! column width keep them readable while the rest of the line stays verbatim.

use crate::error::Error;
use crate::level::Level;
use std::fmt;
use std::str::FromStr;

/// Column width of the rendered `&lev` token. Wide enough for the longest label (`Warning`).
pub const LABEL_WIDTH: usize = 7;

/// Casing rule for the severity label. Profiles pick one; users may override it afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Casing {
    /// Label as defined by the level (`Warning`).
    #[default]
    Default,
    /// All lowercase (`warning`).
    Lower,
    /// All uppercase (`WARNING`).
    Upper,
}

impl Casing {
    #[must_use]
    pub fn apply(self, s: &str) -> String {
        match self {
            Self::Default => s.to_string(),
            Self::Lower => s.to_lowercase(),
            Self::Upper => s.to_uppercase(),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Lower => "lower",
            Self::Upper => "upper",
        }
    }
}

impl fmt::Display for Casing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Casing {
    type Err = Error;

    /// Accepts multiple aliases ("uppercase"/"upper") for user convenience.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" | "none" => Ok(Self::Default),
            "lower" | "lowercase" => Ok(Self::Lower),
            "upper" | "uppercase" => Ok(Self::Upper),
            _ => Err(Error::UnknownValue {
                kind: "casing",
                value: s.to_string(),
            }),
        }
    }
}

/// Cased level label, left-justified and space-padded to [`LABEL_WIDTH`].
#[must_use]
pub fn format_label(level: Level, casing: Casing) -> String {
    let label = casing.apply(level.label());
    format!("{label:<LABEL_WIDTH$}")
}
