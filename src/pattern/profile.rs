//! Named presets bundling a pattern with a label casing. Selecting one replaces both at once.

use crate::error::Error;
use crate::fmt::Casing;
use std::fmt;
use std::str::FromStr;

/// Built-in layouts plus `User`, which keeps whatever pattern text is currently held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Profile {
    /// Just the message.
    #[default]
    None,
    /// Prefix, level and message.
    Minimal,
    /// Time, level and message.
    Default,
    /// Process id, time, level and message.
    Verbose,
    /// Caller-supplied pattern.
    User,
}

impl Profile {
    /// Token text for the built-in profiles; `None` for `User`.
    #[must_use]
    pub const fn pattern(self) -> Option<&'static str> {
        match self {
            Self::None => Some("&msg&end"),
            Self::Minimal => Some("&pre&lev&sep&msg&end"),
            Self::Default => Some("&tim&sep&lev&sep&msg&end"),
            Self::Verbose => Some("&pid&sep&tim&sep&lev&sep&msg&end"),
            Self::User => None,
        }
    }

    /// Casing forced by the built-in profiles; `None` for `User`, which leaves casing alone.
    #[must_use]
    pub const fn casing(self) -> Option<Casing> {
        match self {
            Self::None | Self::Minimal => Some(Casing::Lower),
            Self::Default => Some(Casing::Default),
            Self::Verbose => Some(Casing::Upper),
            Self::User => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Minimal => "minimal",
            Self::Default => "default",
            Self::Verbose => "verbose",
            Self::User => "user",
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::None,
            Self::Minimal,
            Self::Default,
            Self::Verbose,
            Self::User,
        ]
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "plain" => Ok(Self::None),
            "minimal" | "min" => Ok(Self::Minimal),
            "default" => Ok(Self::Default),
            "verbose" => Ok(Self::Verbose),
            "user" | "custom" => Ok(Self::User),
            _ => Err(Error::UnknownValue {
                kind: "profile",
                value: s.to_string(),
            }),
        }
    }
}
