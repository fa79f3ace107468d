//! The layout language. A pattern such as `&pre&tim&sep&lev&sep&msg&end` is compiled once into
//! a short instruction list, then rendered for every log call without re-scanning the text.
//!
//! Tokens are framed by position: `&` plus a three-letter identifier. `&us<N>` names a
//! caller-registered fragment and may carry one or two digits. There is no literal text:
//! every character has to belong to a token.

mod profile;
mod render;

pub use profile::Profile;

use crate::error::Error;
use std::fmt;

/// Width of a keyword token: `&` plus three identifier characters.
pub const TOKEN_LEN: usize = 4;
/// Widest token accepted (`&us` plus two digits).
pub const MAX_TOKEN_LEN: usize = 5;
/// Instructions kept per pattern. Tokens past this are dropped.
pub const MAX_INSTRUCTIONS: usize = 10;

/// One step of a compiled pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// `&sep`
    Separator,
    /// `&pre`
    Prefix,
    /// `&end`
    Postfix,
    /// `&pid`
    ProcessId,
    /// `&tim`, local wall-clock `HH:MM:SS`.
    Timestamp,
    /// `&lev`
    Level,
    /// `&msg`
    Payload,
    /// `&us<N>`
    Substitution(u32),
}

impl Instruction {
    /// Keyword tokens by identifier. `&us<N>` is handled separately because of its digits.
    const KEYWORDS: &'static [(&'static [u8; 3], Self)] = &[
        (b"tim", Self::Timestamp),
        (b"lev", Self::Level),
        (b"sep", Self::Separator),
        (b"pid", Self::ProcessId),
        (b"msg", Self::Payload),
        (b"pre", Self::Prefix),
        (b"end", Self::Postfix),
    ];

    /// Decodes the token at the start of `input` (which begins with `&` and holds at least
    /// [`TOKEN_LEN`] bytes). Returns the instruction and the bytes consumed.
    fn decode(input: &[u8]) -> Option<(Self, usize)> {
        let ident = &input[1..TOKEN_LEN];

        if let Some((_, instruction)) = Self::KEYWORDS.iter().find(|(kw, _)| kw[..] == *ident) {
            return Some((*instruction, TOKEN_LEN));
        }

        if ident.starts_with(b"us") && ident[2].is_ascii_digit() {
            let field = &input[..input.len().min(MAX_TOKEN_LEN)];
            let digits = field[3..].iter().take_while(|b| b.is_ascii_digit()).count();
            let id = field[3..3 + digits]
                .iter()
                .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));
            return Some((Self::Substitution(id), 3 + digits));
        }

        None
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Separator => f.write_str("&sep"),
            Self::Prefix => f.write_str("&pre"),
            Self::Postfix => f.write_str("&end"),
            Self::ProcessId => f.write_str("&pid"),
            Self::Timestamp => f.write_str("&tim"),
            Self::Level => f.write_str("&lev"),
            Self::Payload => f.write_str("&msg"),
            Self::Substitution(id) => write!(f, "&us{id}"),
        }
    }
}

/// Ordered, bounded instruction list. An empty list renders nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledPattern {
    instructions: Vec<Instruction>,
}

impl CompiledPattern {
    /// Compiles pattern text.
    ///
    /// A tail shorter than one token is ignored, as are tokens past [`MAX_INSTRUCTIONS`].
    ///
    /// # Errors
    /// [`Error::InvalidPattern`] when the text is empty, has no `&`, or has a character that
    /// does not start a recognized token.
    pub fn compile(text: &str) -> Result<Self, Error> {
        if !text.contains('&') {
            return Err(Error::InvalidPattern(text.to_string()));
        }

        let bytes = text.as_bytes();
        let mut instructions = Vec::with_capacity(MAX_INSTRUCTIONS);
        let mut pos = 0;

        while instructions.len() < MAX_INSTRUCTIONS && bytes.len() - pos >= TOKEN_LEN {
            if bytes[pos] != b'&' {
                return Err(Error::InvalidPattern(text.to_string()));
            }
            let Some((instruction, width)) = Instruction::decode(&bytes[pos..]) else {
                return Err(Error::InvalidPattern(text.to_string()));
            };
            instructions.push(instruction);
            pos += width;
        }

        Ok(Self { instructions })
    }

    #[must_use]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Whether the pattern places the caller's message anywhere.
    #[must_use]
    pub fn has_payload(&self) -> bool {
        self.instructions.contains(&Instruction::Payload)
    }
}

impl fmt::Display for CompiledPattern {
    /// Canonical token text; compiling it again yields the same instructions.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for instruction in &self.instructions {
            write!(f, "{instruction}")?;
        }
        Ok(())
    }
}
