//! TOML configuration file: schema, loading, and conversion into a [`LogConfig`] store.
//!
//! Separated from struct definitions so that the loading logic stays independent of the serde
//! schema.

mod structs;

pub use structs::{FormatConfig, GeneralConfig, InternalConfig, OutputConfig, SubstitutionConfig};

use crate::error::Error;
use crate::fmt::{Casing, ColorCode};
use crate::internal;
use crate::level::Level;
use crate::pattern::Profile;
use crate::store::{Destination, LogConfig};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// An empty file still yields a working logger: every section is `#[serde(default)]`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub format: FormatConfig,
    pub output: OutputConfig,
    /// Kept as a list so duplicate ids resolve in file order (first one wins).
    pub substitutions: Vec<SubstitutionConfig>,
    pub internal: InternalConfig,
}

impl Config {
    /// Loads `<config_dir>/patlog/patlog.toml`. A missing file yields the defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, Error> {
        internal::debug("CONFIG", "Loading config from default location");
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path instead of the default location.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        internal::info(
            "CONFIG",
            &format!("Config loaded from {}", path.display()),
        );
        Ok(config)
    }

    /// Parses config text directly.
    ///
    /// # Errors
    /// TOML syntax or type errors.
    pub fn parse(content: &str) -> Result<Self, Error> {
        Ok(toml::from_str(content)?)
    }

    /// XDG-style path: `~/.config/patlog/patlog.toml` on Linux.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("patlog").join("patlog.toml"))
            .ok_or(Error::ConfigDirNotFound)
    }

    /// Threshold from `[general] level`. Unknown names fall back to `Debug`.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.general.level.parse().unwrap_or_else(|e| {
            internal::warn("CONFIG", &format!("{e}, using debug"));
            Level::Debug
        })
    }

    #[must_use]
    pub fn parse_profile(&self) -> Profile {
        self.general.profile.parse().unwrap_or_else(|e| {
            internal::warn("CONFIG", &format!("{e}, using none"));
            Profile::None
        })
    }

    /// `None` when the file leaves casing to the profile (or names an unknown casing).
    #[must_use]
    pub fn parse_casing(&self) -> Option<Casing> {
        let casing = self.general.casing.as_deref()?;
        casing
            .parse()
            .inspect_err(|e| internal::warn("CONFIG", &format!("{e}, keeping profile casing")))
            .ok()
    }

    /// `None` when coloring is disabled.
    #[must_use]
    pub fn parse_color(&self) -> Option<ColorCode> {
        if !self.output.color {
            return None;
        }
        Some(self.output.color_code.parse().unwrap_or_else(|e| {
            internal::warn("CONFIG", &format!("{e}, using white"));
            ColorCode::White
        }))
    }

    /// A configured file wins over the stream setting.
    #[must_use]
    pub fn destination(&self) -> Destination {
        if let Some(file) = &self.output.file {
            let expanded = shellexpand::tilde(file);
            return Destination::File(PathBuf::from(expanded.as_ref()));
        }
        match self.output.stream.to_lowercase().as_str() {
            "stderr" => Destination::Stderr,
            "stdout" => Destination::Stdout,
            other => {
                internal::warn("CONFIG", &format!("unknown stream '{other}', using stdout"));
                Destination::Stdout
            }
        }
    }

    /// Builds the store this file describes. Casing is left out. It is applied after the
    /// profile by [`Logger::from_config_with`](crate::Logger::from_config_with).
    #[must_use]
    pub fn to_log_config(&self) -> LogConfig {
        let mut store = LogConfig::new();
        store.set_level(self.parse_level());
        store.set_profile(self.parse_profile());
        if let Some(pattern) = &self.general.pattern {
            store.set_pattern(pattern.as_str());
            if store.profile() != Profile::User {
                internal::warn(
                    "CONFIG",
                    &format!("pattern set, using the user profile instead of {}", store.profile()),
                );
                store.set_profile(Profile::User);
            }
        }
        store.set_prefix(&self.format.prefix);
        store.set_postfix(&self.format.postfix);
        store.set_separator(&self.format.separator);
        store.set_max_message_len(self.format.max_message_len);
        store.set_destination(self.destination());
        store.set_color(self.parse_color());

        for sub in &self.substitutions {
            if !store.add_substitution(sub.id, &sub.text) {
                internal::warn(
                    "CONFIG",
                    &format!("Duplicate substitution id {}, keeping the first", sub.id),
                );
            }
        }

        store
    }
}
