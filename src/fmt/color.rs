//! Whole-line coloring with the eight classic ANSI foreground codes. Applied after the pattern is
//! rendered, so escape bytes never count against the message ceiling.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// SGR foreground code. The discriminant is the number written into the escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorCode {
    Black = 30,
    Red = 31,
    Green = 32,
    Yellow = 33,
    Blue = 34,
    Magenta = 35,
    Cyan = 36,
    #[default]
    White = 37,
}

impl ColorCode {
    /// Terminates any active SGR styling so subsequent text returns to the terminal default.
    pub const RESET: &'static str = "\x1b[0m";

    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Terminals need the raw `\x1b[3Xm` escape sequence for this color.
    #[must_use]
    pub fn fg_ansi(self) -> String {
        format!("\x1b[{}m", self.code())
    }

    /// Wraps a finished line in this color and a reset.
    #[must_use]
    pub fn wrap(self, text: &str) -> String {
        let fg = self.fg_ansi();
        let reset = Self::RESET;
        format!("{fg}{text}{reset}")
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        }
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorCode {
    type Err = Error;

    /// Accepts either the color name or the numeric SGR code (`"31"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let color = match s.trim().to_lowercase().as_str() {
            "black" | "30" => Self::Black,
            "red" | "31" => Self::Red,
            "green" | "32" => Self::Green,
            "yellow" | "33" => Self::Yellow,
            "blue" | "34" => Self::Blue,
            "magenta" | "purple" | "35" => Self::Magenta,
            "cyan" | "36" => Self::Cyan,
            "white" | "37" => Self::White,
            _ => {
                return Err(Error::UnknownValue {
                    kind: "color",
                    value: s.to_string(),
                });
            }
        };
        Ok(color)
    }
}
