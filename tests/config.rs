//! Tests for config file parsing and conversion into a logger.

use patlog::{Casing, ColorCode, Config, Destination, Level, Logger, MemoryOutput, Profile};
use std::fs;
use tempfile::TempDir;

#[test]
fn empty_file_gives_defaults() {
    let config = Config::parse("").unwrap();
    let store = config.to_log_config();

    assert_eq!(store.level(), Level::Debug);
    assert_eq!(store.profile(), Profile::None);
    assert_eq!(store.separator(), " | ");
    assert_eq!(store.postfix(), "\n");
    assert_eq!(store.destination(), &Destination::Stdout);
    assert_eq!(store.color(), None);
    assert!(!config.internal.enabled);
}

#[test]
fn full_file_fills_the_store() {
    let config = Config::parse(
        r#"
[general]
level = "warning"
profile = "user"
pattern = "&us0&lev&sep&msg&end"

[format]
prefix = "[app] "
separator = " :: "
max_message_len = 256

[output]
stream = "stderr"
color = true
color_code = "cyan"

[[substitutions]]
id = 0
text = ">> "
"#,
    )
    .unwrap();
    let store = config.to_log_config();

    assert_eq!(store.level(), Level::Warning);
    assert_eq!(store.profile(), Profile::User);
    assert_eq!(store.pattern(), "&us0&lev&sep&msg&end");
    assert_eq!(store.prefix(), "[app] ");
    // Separator is capped at four bytes.
    assert_eq!(store.separator(), " :: ");
    assert_eq!(store.max_message_len(), 256);
    assert_eq!(store.destination(), &Destination::Stderr);
    assert_eq!(store.color(), Some(ColorCode::Cyan));
    assert_eq!(store.substitution(0), Some(">> "));
}

#[test]
fn duplicate_substitution_ids_keep_the_first() {
    let config = Config::parse(
        r#"
[[substitutions]]
id = 4
text = "first"

[[substitutions]]
id = 4
text = "second"
"#,
    )
    .unwrap();
    assert_eq!(config.to_log_config().substitution(4), Some("first"));
}

#[test]
fn unknown_names_fall_back() {
    let config = Config::parse(
        r#"
[general]
level = "loud"
profile = "fancy"
casing = "wavy"

[output]
stream = "printer"
color = true
color_code = "mauve"
"#,
    )
    .unwrap();

    assert_eq!(config.parse_level(), Level::Debug);
    assert_eq!(config.parse_profile(), Profile::None);
    assert_eq!(config.parse_casing(), None);
    assert_eq!(config.destination(), Destination::Stdout);
    assert_eq!(config.parse_color(), Some(ColorCode::White));
}

#[test]
fn color_code_ignored_unless_enabled() {
    let config = Config::parse("[output]\ncolor_code = \"red\"\n").unwrap();
    assert_eq!(config.parse_color(), None);
}

#[test]
fn file_wins_over_stream_and_expands_tilde() {
    let config = Config::parse(
        r#"
[output]
stream = "stderr"
file = "~/logs/app.log"
"#,
    )
    .unwrap();

    let Destination::File(path) = config.destination() else {
        panic!("expected a file destination");
    };
    assert!(path.ends_with("logs/app.log"));
    if let Some(home) = std::env::var_os("HOME") {
        assert!(path.starts_with(home));
    }
}

#[test]
fn casing_overrides_the_profile() {
    let config = Config::parse(
        r#"
[general]
profile = "verbose"
casing = "lower"

[output]
stream = "stderr"
"#,
    )
    .unwrap();

    let logger = Logger::from_config_with(&config);
    assert_eq!(logger.profile(), Profile::Verbose);
    assert_eq!(logger.casing(), Casing::Lower);
}

#[test]
fn configured_logger_renders_with_file_settings() {
    let config = Config::parse(
        r#"
[general]
level = "notice"
profile = "user"
pattern = "&us1&lev&sep&msg&end"

[[substitutions]]
id = 1
text = "* "
"#,
    )
    .unwrap();

    let out = MemoryOutput::new();
    let mut logger = Logger::with_output(config.to_log_config(), out.clone());
    logger.info("skipped");
    logger.notice("ready");
    assert_eq!(out.lines(), ["* Notice  | ready\n"]);
}

#[test]
fn syntax_error_is_reported() {
    assert!(Config::parse("[general\nlevel = ").is_err());
}

#[test]
fn load_from_missing_file_gives_defaults() {
    let tmp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&tmp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.general.level, "debug");
    assert_eq!(config.general.profile, "none");
}

#[test]
fn load_from_reads_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("patlog.toml");
    fs::write(&path, "[general]\nlevel = \"error\"\nprofile = \"minimal\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.parse_level(), Level::Error);
    assert_eq!(config.parse_profile(), Profile::Minimal);
}

#[test]
fn config_path_ends_in_patlog_toml() {
    if let Ok(path) = Config::get_config_path() {
        assert!(path.ends_with("patlog/patlog.toml"));
    }
}

#[test]
fn pattern_selects_the_user_profile() {
    let config = Config::parse(
        r#"
[general]
profile = "verbose"
pattern = "&lev&sep&msg&end"
"#,
    )
    .unwrap();
    let store = config.to_log_config();
    assert_eq!(store.profile(), Profile::User);
    assert_eq!(store.pattern(), "&lev&sep&msg&end");
}

#[test]
fn rejected_pattern_is_reported_by_try_from_config_with() {
    let config = Config::parse(
        r#"
[general]
profile = "user"
pattern = "garbage"

[output]
stream = "stderr"
"#,
    )
    .unwrap();

    assert!(matches!(
        Logger::try_from_config_with(&config),
        Err(patlog::Error::InvalidPattern(_))
    ));
    // The lenient constructor keeps going on the default profile.
    assert_eq!(Logger::from_config_with(&config).profile(), Profile::Default);
}
