//! CLI module for patlog.
//!
//! This module provides the command-line interface using Clap: load the config file, apply
//! command-line overrides, log one message.

use crate::config::Config;
use crate::error::Error;
use crate::fmt::{Casing, ColorCode};
use crate::internal;
use crate::level::Level;
use crate::logger::Logger;
use crate::pattern::Profile;
use crate::store::Destination;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevel {
    Emergency,
    Alert,
    Critical,
    Error,
    Warning,
    Notice,
    Info,
    Debug,
    Always,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Emergency => Self::Emergency,
            LogLevel::Alert => Self::Alert,
            LogLevel::Critical => Self::Critical,
            LogLevel::Error => Self::Error,
            LogLevel::Warning => Self::Warning,
            LogLevel::Notice => Self::Notice,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Always => Self::Always,
        }
    }
}

/// Profile for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ProfileArg {
    None,
    Minimal,
    Default,
    Verbose,
    User,
}

impl From<ProfileArg> for Profile {
    fn from(profile: ProfileArg) -> Self {
        match profile {
            ProfileArg::None => Self::None,
            ProfileArg::Minimal => Self::Minimal,
            ProfileArg::Default => Self::Default,
            ProfileArg::Verbose => Self::Verbose,
            ProfileArg::User => Self::User,
        }
    }
}

/// patlog - Log one message through a pattern.
#[derive(Parser, Debug)]
#[command(name = "patlog", version, about = "Log a message through a layout pattern")]
pub struct Cli {
    /// Config file (defaults to ~/.config/patlog/patlog.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Threshold level
    #[arg(long, value_enum)]
    pub threshold: Option<LogLevel>,

    /// Layout profile
    #[arg(long, value_enum)]
    pub profile: Option<ProfileArg>,

    /// Custom pattern, e.g. '&tim&sep&lev&sep&msg&end' (selects the user profile)
    #[arg(long)]
    pub pattern: Option<String>,

    /// Label casing: default, lower or upper
    #[arg(long)]
    pub casing: Option<Casing>,

    /// Write to this file instead of stdout
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Color the line: name or SGR code 30-37
    #[arg(long)]
    pub color: Option<ColorCode>,

    /// Register a user fragment, ID=TEXT (repeatable)
    #[arg(long = "sub", value_parser = parse_substitution)]
    pub substitutions: Vec<(u32, String)>,

    /// Print patlog's own diagnostics to stderr
    #[arg(long)]
    pub verbose: bool,

    /// Message level
    #[arg(value_enum)]
    pub level: LogLevel,

    /// Message text
    #[arg(required = true)]
    pub message: Vec<String>,
}

/// Parses `ID=TEXT` for `--sub`.
///
/// # Errors
/// Missing `=` or a non-numeric id.
pub fn parse_substitution(s: &str) -> Result<(u32, String), String> {
    let (id, text) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=TEXT, got '{s}'"))?;
    let id = id
        .trim()
        .parse()
        .map_err(|_| format!("substitution id must be a number, got '{id}'"))?;
    Ok((id, text.to_string()))
}

/// Runs the CLI with parsed arguments.
#[must_use]
pub fn run(cli: Cli) -> ExitCode {
    if cli.verbose {
        internal::init(Level::Debug);
    }

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Loads the config, applies command-line overrides and logs the message.
///
/// # Errors
/// Config loading errors, [`Error::InvalidPattern`] for a pattern (from the file or
/// `--pattern`) that does not compile, and I/O errors from the final flush.
pub fn execute(cli: &Cli) -> Result<(), Error> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    internal::init_with_config(&config);

    let mut store = config.to_log_config();
    if let Some(threshold) = cli.threshold {
        store.set_level(threshold.into());
    }
    if let Some(profile) = cli.profile {
        store.set_profile(profile.into());
    }
    if let Some(file) = &cli.file {
        store.set_destination(Destination::File(file.clone()));
    }
    if cli.color.is_some() {
        store.set_color(cli.color);
    }
    for (id, text) in &cli.substitutions {
        store.add_substitution(*id, text);
    }

    let mut logger = Logger::try_owning(store)?;
    if let Some(casing) = config.parse_casing() {
        logger.set_casing(casing);
    }
    if let Some(pattern) = &cli.pattern {
        logger.set_pattern(pattern)?;
    }
    if let Some(casing) = cli.casing {
        logger.set_casing(casing);
    }

    logger.log(cli.level.into(), &cli.message.join(" "));
    logger.flush()
}
