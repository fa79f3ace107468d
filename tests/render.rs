//! Tests for rendering compiled patterns against a configuration store.

use chrono::NaiveTime;
use patlog::{Casing, ColorCode, CompiledPattern, Level, LogConfig, Profile};
use regex::Regex;

fn at(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).unwrap()
}

fn compile(text: &str) -> CompiledPattern {
    CompiledPattern::compile(text).unwrap()
}

#[test]
fn default_profile_orders_time_level_message() {
    let pattern = compile(Profile::Default.pattern().unwrap());
    let config = LogConfig::default();

    let line = pattern.render(&config, Level::Error, "boom").unwrap();

    let re = Regex::new(r"^(\d{2}:\d{2}:\d{2}) \| (Error  ) \| (boom)\n$").unwrap();
    assert!(re.is_match(&line), "{line:?}");
}

#[test]
fn explicit_clock_reading_is_zero_padded() {
    let pattern = compile("&tim&sep&lev&sep&msg&end");
    let line = pattern
        .render_at(&LogConfig::default(), Level::Info, "up", at(7, 5, 9))
        .unwrap();
    assert_eq!(line, "07:05:09 | Info    | up\n");
}

#[test]
fn named_substitutions_surround_payload() {
    let mut config = LogConfig::default();
    config.add_substitution(0, "~~");
    config.add_substitution(1, " ** ");

    let line = compile("&us0&msg&us1")
        .render(&config, Level::Info, "x")
        .unwrap();
    assert_eq!(line, "~~x ** ");
}

#[test]
fn missing_substitution_renders_nothing_in_its_place() {
    let config = LogConfig::default();
    let line = compile("&us9&msg")
        .render(&config, Level::Info, "x")
        .unwrap();
    assert_eq!(line, "x");
}

#[test]
fn first_registered_fragment_wins() {
    let mut config = LogConfig::default();
    config.add_substitution(2, "a");
    config.add_substitution(2, "b");
    let line = compile("&us2&msg").render(&config, Level::Info, "!").unwrap();
    assert_eq!(line, "a!");
}

#[test]
fn label_casing_and_padding() {
    let pattern = compile("&lev");
    let mut config = LogConfig::default();

    config.set_casing(Casing::Upper);
    assert_eq!(
        pattern.render(&config, Level::Warning, "").as_deref(),
        Some("WARNING")
    );

    config.set_casing(Casing::Lower);
    assert_eq!(
        pattern.render(&config, Level::Warning, "").as_deref(),
        Some("warning")
    );

    config.set_casing(Casing::Upper);
    assert_eq!(
        pattern.render(&config, Level::Info, "").as_deref(),
        Some("INFO   ")
    );
}

#[test]
fn prefix_postfix_and_separator_come_from_the_store() {
    let mut config = LogConfig::default();
    config.set_prefix("> ");
    config.set_postfix(" -\n");
    config.set_separator(" : ");

    let line = compile("&pre&lev&sep&msg&end")
        .render(&config, Level::Notice, "hi")
        .unwrap();
    assert_eq!(line, "> Notice  : hi -\n");
}

#[test]
fn process_id_is_decimal() {
    let line = compile("&pid&sep&msg")
        .render(&LogConfig::default(), Level::Info, "m")
        .unwrap();
    assert_eq!(line, format!("{} | m", std::process::id()));
}

#[test]
fn ceiling_truncates_instead_of_overflowing() {
    let mut config = LogConfig::default();
    config.set_max_message_len(10);
    config.add_substitution(0, "123456789");

    let line = compile("&msg&us0&us0")
        .render(&config, Level::Info, "ab")
        .unwrap();
    assert_eq!(line, "ab12345678");
    assert_eq!(line.len(), 10);
}

#[test]
fn line_shorter_than_payload_is_not_emitted() {
    let config = LogConfig::default();
    assert_eq!(
        compile("&tim").render_at(&config, Level::Info, "longer than a time", at(1, 2, 3)),
        None
    );
}

#[test]
fn color_wraps_whole_line() {
    let mut config = LogConfig::default();
    config.set_color(Some(ColorCode::Yellow));
    let line = compile("&msg&end")
        .render(&config, Level::Info, "x")
        .unwrap();
    assert_eq!(line, "\x1b[33mx\n\x1b[0m");
}
