//! The configuration store: every option the pattern renderer reads, plus the substitution table.
//!
//! Pure data. The logger either owns one of these or borrows one from its caller; nothing here
//! knows which.

mod substitution;

pub use substitution::{MAX_FRAGMENT_LEN, SubstitutionTable};

use crate::fmt::{Casing, ColorCode, truncate_to};
use crate::level::Level;
use crate::pattern::Profile;
use std::fmt;
use std::path::PathBuf;

/// Longest prefix or postfix kept, in bytes.
pub const MAX_PREFIX_LEN: usize = 9;
/// Longest separator kept, in bytes.
pub const MAX_SEPARATOR_LEN: usize = 4;
/// Default ceiling for one rendered line, in bytes.
pub const DEFAULT_MAX_MESSAGE_LEN: usize = 1024;

/// Where finished lines go.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Destination {
    #[default]
    Stdout,
    Stderr,
    /// Opened (and truncated) once when the logger is built.
    File(PathBuf),
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("stdout"),
            Self::Stderr => f.write_str("stderr"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Rendering options and the named substitution table.
#[derive(Debug, Clone)]
pub struct LogConfig {
    level: Level,
    profile: Profile,
    pattern: String,
    casing: Casing,
    prefix: String,
    postfix: String,
    separator: String,
    destination: Destination,
    color: Option<ColorCode>,
    max_message_len: usize,
    substitutions: SubstitutionTable,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::Debug,
            profile: Profile::None,
            pattern: String::new(),
            casing: Casing::Default,
            prefix: String::new(),
            postfix: "\n".to_string(),
            separator: " | ".to_string(),
            destination: Destination::Stdout,
            color: None,
            max_message_len: DEFAULT_MAX_MESSAGE_LEN,
            substitutions: SubstitutionTable::new(),
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    pub const fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    #[must_use]
    pub const fn profile(&self) -> Profile {
        self.profile
    }

    /// Records the profile only. The logger is what turns a profile into pattern text and casing.
    pub const fn set_profile(&mut self, profile: Profile) {
        self.profile = profile;
    }

    /// Pattern text as last set. Empty until a profile or explicit pattern fills it in.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn set_pattern(&mut self, pattern: impl Into<String>) {
        self.pattern = pattern.into();
    }

    #[must_use]
    pub const fn casing(&self) -> Casing {
        self.casing
    }

    pub const fn set_casing(&mut self, casing: Casing) {
        self.casing = casing;
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn set_prefix(&mut self, prefix: &str) {
        self.prefix = truncate_to(prefix, MAX_PREFIX_LEN);
    }

    /// Text emitted by `&end`. Carries the newline, so a pattern without `&end` writes none.
    #[must_use]
    pub fn postfix(&self) -> &str {
        &self.postfix
    }

    pub fn set_postfix(&mut self, postfix: &str) {
        self.postfix = truncate_to(postfix, MAX_PREFIX_LEN);
    }

    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn set_separator(&mut self, separator: &str) {
        self.separator = truncate_to(separator, MAX_SEPARATOR_LEN);
    }

    #[must_use]
    pub const fn destination(&self) -> &Destination {
        &self.destination
    }

    pub fn set_destination(&mut self, destination: Destination) {
        self.destination = destination;
    }

    /// `None` when coloring is off.
    #[must_use]
    pub const fn color(&self) -> Option<ColorCode> {
        self.color
    }

    pub const fn set_color(&mut self, color: Option<ColorCode>) {
        self.color = color;
    }

    #[must_use]
    pub const fn max_message_len(&self) -> usize {
        self.max_message_len
    }

    pub const fn set_max_message_len(&mut self, len: usize) {
        self.max_message_len = len;
    }

    /// See [`SubstitutionTable::add`].
    pub fn add_substitution(&mut self, id: u32, text: &str) -> bool {
        self.substitutions.add(id, text)
    }

    #[must_use]
    pub fn substitution(&self, id: u32) -> Option<&str> {
        self.substitutions.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_layout() {
        let cfg = LogConfig::default();
        assert_eq!(cfg.level(), Level::Debug);
        assert_eq!(cfg.profile(), Profile::None);
        assert_eq!(cfg.separator(), " | ");
        assert_eq!(cfg.postfix(), "\n");
        assert_eq!(cfg.prefix(), "");
        assert_eq!(cfg.destination(), &Destination::Stdout);
        assert!(cfg.color().is_none());
    }

    #[test]
    fn fragment_setters_truncate() {
        let mut cfg = LogConfig::default();
        cfg.set_separator(" ::: ");
        cfg.set_prefix("[my-service] ");
        assert_eq!(cfg.separator(), " :::");
        assert_eq!(cfg.prefix(), "[my-servi");
    }
}
