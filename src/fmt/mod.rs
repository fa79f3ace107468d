//! Text-level helpers the pattern renderer leans on: label casing, the bounded line buffer,
//! and whole-line ANSI coloring.

mod buffer;
mod casing;
mod color;

pub use buffer::{MessageBuf, truncate_to};
pub use casing::{Casing, LABEL_WIDTH, format_label};
pub use color::ColorCode;
