//! Stepwise construction for callers who would rather not fill in a `LogConfig` by hand.

use super::{ConfigSlot, Logger};
use crate::error::Error;
use crate::fmt::{Casing, ColorCode};
use crate::level::Level;
use crate::output::Output;
use crate::pattern::Profile;
use crate::store::{Destination, LogConfig};
use std::path::PathBuf;

/// Builds an owning [`Logger`].
#[derive(Default)]
pub struct LoggerBuilder {
    config: LogConfig,
    casing: Option<Casing>,
    output: Option<Box<dyn Output>>,
    fallback: Option<Box<dyn Output>>,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages less urgent than `level` are dropped.
    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.config.set_level(level);
        self
    }

    #[must_use]
    pub const fn profile(mut self, profile: Profile) -> Self {
        self.config.set_profile(profile);
        self
    }

    /// Custom pattern; selects the `User` profile. Text that does not compile leaves the built
    /// logger on the `Default` profile, or fails [`try_build`](Self::try_build).
    #[must_use]
    pub fn pattern(mut self, text: &str) -> Self {
        self.config.set_pattern(text);
        self.config.set_profile(Profile::User);
        self
    }

    /// Applied after the profile, so it wins over the profile's own casing.
    #[must_use]
    pub const fn casing(mut self, casing: Casing) -> Self {
        self.casing = Some(casing);
        self
    }

    #[must_use]
    pub fn prefix(mut self, prefix: &str) -> Self {
        self.config.set_prefix(prefix);
        self
    }

    #[must_use]
    pub fn postfix(mut self, postfix: &str) -> Self {
        self.config.set_postfix(postfix);
        self
    }

    #[must_use]
    pub fn separator(mut self, separator: &str) -> Self {
        self.config.set_separator(separator);
        self
    }

    #[must_use]
    pub fn destination(mut self, destination: Destination) -> Self {
        self.config.set_destination(destination);
        self
    }

    /// Shorthand for `destination(Destination::File(path))`.
    #[must_use]
    pub fn file(self, path: impl Into<PathBuf>) -> Self {
        self.destination(Destination::File(path.into()))
    }

    /// Wraps every line in `color`.
    #[must_use]
    pub const fn color(mut self, color: ColorCode) -> Self {
        self.config.set_color(Some(color));
        self
    }

    #[must_use]
    pub const fn max_message_len(mut self, len: usize) -> Self {
        self.config.set_max_message_len(len);
        self
    }

    /// Registers a fragment for `&us<id>`. The first registration of an id wins.
    #[must_use]
    pub fn substitution(mut self, id: u32, text: &str) -> Self {
        self.config.add_substitution(id, text);
        self
    }

    /// Writes to `output` instead of opening the configured destination.
    #[must_use]
    pub fn output(mut self, output: impl Output + 'static) -> Self {
        self.output = Some(Box::new(output));
        self
    }

    /// Takes stdout's place when the configured file cannot be opened.
    #[must_use]
    pub fn fallback_output(mut self, output: impl Output + 'static) -> Self {
        self.fallback = Some(Box::new(output));
        self
    }

    #[must_use]
    pub fn build(self) -> Logger<'static> {
        self.assemble().0
    }

    /// Like [`build`](Self::build), but a rejected pattern is returned instead of replaced.
    ///
    /// # Errors
    /// [`Error::InvalidPattern`] when the `User` profile's pattern text does not compile.
    pub fn try_build(self) -> Result<Logger<'static>, Error> {
        Logger::checked(self.assemble())
    }

    fn assemble(self) -> (Logger<'static>, Option<Error>) {
        let (mut logger, rejected) = Logger::assemble(
            ConfigSlot::Owned(Box::new(self.config)),
            self.output,
            self.fallback,
        );
        if let Some(casing) = self.casing {
            logger.set_casing(casing);
        }
        (logger, rejected)
    }
}
