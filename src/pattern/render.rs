//! Walks a compiled pattern and assembles one line. Runs on every admitted log call.

use super::{CompiledPattern, Instruction};
use crate::fmt::{MessageBuf, format_label};
use crate::level::Level;
use crate::store::LogConfig;
use chrono::{Local, NaiveTime};

impl CompiledPattern {
    /// Renders one line using the current local time.
    ///
    /// Returns `None` when there is nothing to emit: the pattern is empty, or the rendered line
    /// came out shorter than `payload` (it was cut by the ceiling, or the pattern has no `&msg`
    /// and little else).
    #[must_use]
    pub fn render(&self, config: &LogConfig, level: Level, payload: &str) -> Option<String> {
        self.render_at(config, level, payload, Local::now().time())
    }

    /// Same as [`render`](Self::render) with an explicit clock reading for `&tim`.
    #[must_use]
    pub fn render_at(
        &self,
        config: &LogConfig,
        level: Level,
        payload: &str,
        time: NaiveTime,
    ) -> Option<String> {
        if self.instructions.is_empty() {
            return None;
        }

        let mut buf = MessageBuf::with_limit(config.max_message_len());

        for instruction in &self.instructions {
            let fitted = match instruction {
                Instruction::Separator => buf.push_str(config.separator()),
                Instruction::Prefix => buf.push_str(config.prefix()),
                Instruction::Postfix => buf.push_str(config.postfix()),
                Instruction::ProcessId => buf.push_str(&std::process::id().to_string()),
                Instruction::Timestamp => buf.push_str(&time.format("%H:%M:%S").to_string()),
                Instruction::Level => buf.push_str(&format_label(level, config.casing())),
                Instruction::Payload => buf.push_str(payload),
                Instruction::Substitution(id) => match config.substitution(*id) {
                    Some(fragment) => buf.push_str(fragment),
                    None => true,
                },
            };
            if !fitted {
                break;
            }
        }

        if !buf.covers(payload) {
            return None;
        }

        let line = buf.into_string();
        Some(match config.color() {
            Some(color) => color.wrap(&line),
            None => line,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noon() -> NaiveTime {
        NaiveTime::from_hms_opt(12, 3, 4).unwrap()
    }

    #[test]
    fn empty_pattern_renders_nothing() {
        let pattern = CompiledPattern::default();
        assert_eq!(
            pattern.render_at(&LogConfig::default(), Level::Info, "x", noon()),
            None
        );
    }

    #[test]
    fn cut_line_is_dropped_when_payload_no_longer_fits() {
        let mut config = LogConfig::default();
        config.set_max_message_len(12);
        let pattern = CompiledPattern::compile("&tim&sep&msg").unwrap();

        assert_eq!(
            pattern.render_at(&config, Level::Info, "ok", noon()).as_deref(),
            Some("12:03:04 | o")
        );
        // Only "12:03:04 | " plus one byte fits, which is shorter than this payload.
        assert_eq!(
            pattern.render_at(&config, Level::Info, "a much longer payload", noon()),
            None
        );
    }

    #[test]
    fn color_wraps_after_ceiling() {
        let mut config = LogConfig::default();
        config.set_max_message_len(4);
        config.set_color(Some(crate::fmt::ColorCode::Green));
        let pattern = CompiledPattern::compile("&msg").unwrap();

        assert_eq!(
            pattern.render_at(&config, Level::Info, "four", noon()).as_deref(),
            Some("\x1b[32mfour\x1b[0m")
        );
    }
}
