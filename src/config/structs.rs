//! Configuration struct definitions.

use serde::Deserialize;

/// Filtering and layout selection.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Threshold level name.
    pub level: String,
    /// Profile name (none, minimal, default, verbose, user).
    pub profile: String,
    /// Pattern text. Setting it selects the `user` profile.
    pub pattern: Option<String>,
    /// Label casing (default, lower, upper). Overrides the profile's casing when set.
    pub casing: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
            profile: "none".to_string(),
            pattern: None,
            casing: None,
        }
    }
}

/// Literal fragments placed by `&pre`, `&end` and `&sep`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub prefix: String,
    pub postfix: String,
    pub separator: String,
    /// Ceiling for one rendered line, in bytes.
    pub max_message_len: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            postfix: "\n".to_string(),
            separator: " | ".to_string(),
            max_message_len: crate::store::DEFAULT_MAX_MESSAGE_LEN,
        }
    }
}

/// Destination and coloring.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// `stdout` or `stderr`; ignored when `file` is set.
    pub stream: String,
    /// Log file path. `~` is expanded.
    pub file: Option<String>,
    /// Wrap each line in `color_code`.
    pub color: bool,
    /// Color name or SGR number (30-37).
    pub color_code: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            stream: "stdout".to_string(),
            file: None,
            color: false,
            color_code: "white".to_string(),
        }
    }
}

/// One `[[substitutions]]` entry, placed by `&us<id>`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SubstitutionConfig {
    pub id: u32,
    pub text: String,
}

/// patlog's own diagnostics.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InternalConfig {
    pub enabled: bool,
    pub level: String,
}

impl Default for InternalConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "warning".to_string(),
        }
    }
}
