//! The logger ties the pieces together: it holds (or borrows) the configuration store, keeps the
//! compiled pattern in sync with it, filters by severity, and hands finished lines to its output.

mod builder;
mod from_config;
mod macros;

pub use builder::LoggerBuilder;

use crate::error::Error;
use crate::fmt::Casing;
use crate::internal;
use crate::level::Level;
use crate::output::{self, Output, Stream, TerminalOutput};
use crate::pattern::{CompiledPattern, Profile};
use crate::store::{Destination, LogConfig};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;

/// The configuration store is either the logger's own or a caller's, lent for the logger's lifetime.
#[derive(Debug)]
pub enum ConfigSlot<'cfg> {
    Owned(Box<LogConfig>),
    Borrowed(&'cfg mut LogConfig),
}

impl ConfigSlot<'_> {
    #[must_use]
    pub const fn is_owned(&self) -> bool {
        matches!(self, Self::Owned(_))
    }
}

impl Deref for ConfigSlot<'_> {
    type Target = LogConfig;

    fn deref(&self) -> &LogConfig {
        match self {
            Self::Owned(config) => config,
            Self::Borrowed(config) => config,
        }
    }
}

impl DerefMut for ConfigSlot<'_> {
    fn deref_mut(&mut self) -> &mut LogConfig {
        match self {
            Self::Owned(config) => config,
            Self::Borrowed(config) => config,
        }
    }
}

/// Pattern-driven logger.
///
/// Single writer: configuration calls and log calls take `&mut self`. Wrap the logger in a
/// `Mutex` to share it between threads.
pub struct Logger<'cfg> {
    config: ConfigSlot<'cfg>,
    pattern: CompiledPattern,
    output: Box<dyn Output>,
}

impl Logger<'static> {
    /// Stdout, level `Debug`, profile `None`.
    #[must_use]
    pub fn new() -> Self {
        Self::owning(LogConfig::default())
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Logs to `path`. If the file cannot be created, logs to stdout instead and says so.
    #[must_use]
    pub fn to_file(path: impl Into<PathBuf>, level: Level, profile: Profile) -> Self {
        let mut config = LogConfig::default();
        config.set_level(level);
        config.set_profile(profile);
        config.set_destination(Destination::File(path.into()));
        Self::owning(config)
    }

    /// Takes ownership of `config`; it is dropped with the logger.
    ///
    /// A `User` profile whose pattern does not compile leaves the logger on the `Default`
    /// profile; use [`try_owning`](Self::try_owning) to be told about it.
    #[must_use]
    pub fn owning(config: LogConfig) -> Self {
        Self::assemble(ConfigSlot::Owned(Box::new(config)), None, None).0
    }

    /// Like [`owning`](Self::owning), but a pattern the logger could not install is an error.
    ///
    /// # Errors
    /// [`Error::InvalidPattern`] when the `User` profile's pattern text does not compile.
    pub fn try_owning(config: LogConfig) -> Result<Self, Error> {
        Self::checked(Self::assemble(ConfigSlot::Owned(Box::new(config)), None, None))
    }

    /// Writes to a caller-provided output instead of the configured destination.
    #[must_use]
    pub fn with_output(config: LogConfig, output: impl Output + 'static) -> Self {
        Self::assemble(
            ConfigSlot::Owned(Box::new(config)),
            Some(Box::new(output)),
            None,
        )
        .0
    }
}

impl Default for Logger<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'cfg> Logger<'cfg> {
    /// Works on the caller's `config` in place. Level, profile and pattern changes made through
    /// the logger are visible to the caller afterwards.
    #[must_use]
    pub fn borrowing(config: &'cfg mut LogConfig) -> Self {
        Self::assemble(ConfigSlot::Borrowed(config), None, None).0
    }

    /// Opens the output (or takes `output`), installs the profile, and reports a destination
    /// failure through the logger itself. `fallback` replaces stdout when the destination
    /// cannot be opened. The second value is the pattern error, if the profile was rejected.
    pub(crate) fn assemble(
        config: ConfigSlot<'cfg>,
        output: Option<Box<dyn Output>>,
        fallback: Option<Box<dyn Output>>,
    ) -> (Self, Option<Error>) {
        let (output, failure) = match output {
            Some(output) => (output, None),
            None => match output::open(config.destination()) {
                Ok(output) => (output, None),
                Err(e) => {
                    let fallback: Box<dyn Output> = match fallback {
                        Some(fallback) => fallback,
                        None => Box::new(TerminalOutput::new(Stream::Stdout)),
                    };
                    (fallback, Some(e))
                }
            },
        };

        let mut logger = Self {
            config,
            pattern: CompiledPattern::default(),
            output,
        };

        let profile = logger.config.profile();
        let rejected = logger.set_profile(profile).err();
        if let Some(e) = &rejected {
            internal::warn("LOGGER", &format!("{e}, using the default profile"));
        }

        if let Some(Error::DestinationUnavailable { path, source }) = failure {
            logger.config.set_destination(Destination::Stdout);
            logger.error(&format!(
                "Failed to reroute logging to file @ {}: {source}",
                path.display()
            ));
            logger.notice("Routing all logging to stdout");
        }

        (logger, rejected)
    }

    /// Status of an [`assemble`](Self::assemble) call for the fallible constructors.
    pub(crate) fn checked((logger, rejected): (Self, Option<Error>)) -> Result<Self, Error> {
        match rejected {
            None => Ok(logger),
            Some(e) => Err(e),
        }
    }

    /// Drops `msg` if `level` is below the threshold, otherwise renders and writes it.
    pub fn log(&mut self, level: Level, msg: &str) {
        if !level.passes(self.config.level()) {
            return;
        }

        let Some(line) = self.render(level, msg) else {
            internal::debug("LOGGER", "Nothing rendered, message dropped");
            return;
        };

        let _ = self.output.write(&line);
    }

    /// Formatting happens only after the threshold check, so filtered calls cost nothing.
    pub fn log_fmt(&mut self, level: Level, args: fmt::Arguments<'_>) {
        if !level.passes(self.config.level()) {
            return;
        }
        match args.as_str() {
            Some(msg) => self.log(level, msg),
            None => self.log(level, &args.to_string()),
        }
    }

    /// The finished line for `msg` at `level`, without writing it or checking the threshold.
    #[must_use]
    pub fn render(&self, level: Level, msg: &str) -> Option<String> {
        self.pattern.render(&self.config, level, msg)
    }

    pub fn emergency(&mut self, msg: &str) {
        self.log(Level::Emergency, msg);
    }

    pub fn alert(&mut self, msg: &str) {
        self.log(Level::Alert, msg);
    }

    pub fn critical(&mut self, msg: &str) {
        self.log(Level::Critical, msg);
    }

    pub fn error(&mut self, msg: &str) {
        self.log(Level::Error, msg);
    }

    pub fn warning(&mut self, msg: &str) {
        self.log(Level::Warning, msg);
    }

    pub fn notice(&mut self, msg: &str) {
        self.log(Level::Notice, msg);
    }

    pub fn info(&mut self, msg: &str) {
        self.log(Level::Info, msg);
    }

    pub fn debug(&mut self, msg: &str) {
        self.log(Level::Debug, msg);
    }

    /// Written regardless of the threshold.
    pub fn always(&mut self, msg: &str) {
        self.log(Level::Always, msg);
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.config.level()
    }

    pub fn set_level(&mut self, level: Level) {
        self.config.set_level(level);
    }

    #[must_use]
    pub fn profile(&self) -> Profile {
        self.config.profile()
    }

    /// Switches profile. A built-in profile replaces pattern text and casing together.
    /// `User` recompiles the pattern text currently held.
    ///
    /// # Errors
    /// [`Error::InvalidPattern`] when `User` is selected and the held text does not compile.
    /// The logger has then been switched to [`Profile::Default`].
    pub fn set_profile(&mut self, profile: Profile) -> Result<(), Error> {
        match (profile.pattern(), profile.casing()) {
            (Some(text), Some(casing)) => self.apply_builtin(profile, text, casing),
            _ => match CompiledPattern::compile(self.config.pattern()) {
                Ok(pattern) => {
                    self.config.set_profile(Profile::User);
                    self.pattern = pattern;
                    Ok(())
                }
                Err(e) => {
                    internal::warn("PATTERN", &format!("User profile rejected: {e}"));
                    self.set_profile(Profile::Default)?;
                    Err(e)
                }
            },
        }
    }

    fn apply_builtin(&mut self, profile: Profile, text: &str, casing: Casing) -> Result<(), Error> {
        let pattern = CompiledPattern::compile(text)?;
        self.config.set_profile(profile);
        self.config.set_pattern(text);
        self.config.set_casing(casing);
        self.pattern = pattern;
        internal::debug("PATTERN", &format!("Profile {profile}: {text}"));
        Ok(())
    }

    /// Pattern text currently in effect.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.config.pattern()
    }

    /// Installs a custom pattern and switches to the `User` profile.
    ///
    /// # Errors
    /// [`Error::InvalidPattern`] if `text` does not compile. Nothing is changed in that case.
    pub fn set_pattern(&mut self, text: &str) -> Result<(), Error> {
        let pattern = CompiledPattern::compile(text).inspect_err(|e| {
            internal::debug("PATTERN", &format!("{e}"));
        })?;
        self.config.set_pattern(text);
        self.config.set_profile(Profile::User);
        self.pattern = pattern;
        Ok(())
    }

    #[must_use]
    pub fn casing(&self) -> Casing {
        self.config.casing()
    }

    /// Overrides the casing picked by the current profile until the next profile change.
    pub fn set_casing(&mut self, casing: Casing) {
        self.config.set_casing(casing);
    }

    #[must_use]
    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Direct access to the store. Call [`reload`](Self::reload) after touching profile or pattern.
    pub fn config_mut(&mut self) -> &mut LogConfig {
        &mut self.config
    }

    /// Recompiles from the store's current profile and pattern text.
    ///
    /// # Errors
    /// See [`set_profile`](Self::set_profile).
    pub fn reload(&mut self) -> Result<(), Error> {
        let profile = self.config.profile();
        self.set_profile(profile)
    }

    /// Whether the configuration store is dropped with this logger.
    #[must_use]
    pub const fn owns_config(&self) -> bool {
        self.config.is_owned()
    }

    /// # Errors
    /// I/O errors from the output.
    pub fn flush(&mut self) -> Result<(), Error> {
        self.output.flush()
    }
}

impl Drop for Logger<'_> {
    fn drop(&mut self) {
        let _ = self.output.flush();
    }
}

impl fmt::Debug for Logger<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}
