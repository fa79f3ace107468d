//! Logger configuration from patlog config files.

use super::Logger;
use crate::config::Config;
use crate::error::Error;
use crate::internal;

impl Logger<'static> {
    /// Creates a logger from the default config file, falling back to defaults if it is
    /// missing or unreadable.
    #[must_use]
    pub fn from_config() -> Self {
        internal::debug("LOGGER", "Building logger from config");
        let config = Config::load().unwrap_or_else(|e| {
            internal::warn("LOGGER", &format!("{e}, using defaults"));
            Config::default()
        });
        Self::from_config_with(&config)
    }

    /// Creates a logger from an already loaded config.
    #[must_use]
    pub fn from_config_with(config: &Config) -> Self {
        Self::configure(config, Self::owning(config.to_log_config()))
    }

    /// Like [`from_config_with`](Self::from_config_with), but a `[general] pattern` that does
    /// not compile is an error instead of a silent switch to the default profile.
    ///
    /// # Errors
    /// [`Error::InvalidPattern`] when the configured pattern text does not compile.
    pub fn try_from_config_with(config: &Config) -> Result<Self, Error> {
        Self::try_owning(config.to_log_config()).map(|logger| Self::configure(config, logger))
    }

    fn configure(config: &Config, mut logger: Self) -> Self {
        if let Some(casing) = config.parse_casing() {
            logger.set_casing(casing);
        }
        internal::debug(
            "LOGGER",
            &format!(
                "Logger ready: level={}, profile={}, destination={}",
                logger.level(),
                logger.profile(),
                logger.config().destination()
            ),
        );
        logger
    }
}
