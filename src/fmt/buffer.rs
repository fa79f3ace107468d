//! Rendering appends into a buffer with a hard byte ceiling. Running out of room truncates the
//! line; it never grows past the ceiling and never fails.

/// Append-only message buffer with an explicit capacity ceiling.
#[derive(Debug, Clone)]
pub struct MessageBuf {
    buf: String,
    limit: usize,
    truncated: bool,
}

impl MessageBuf {
    /// Empty buffer that will hold at most `limit` bytes.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            buf: String::with_capacity(limit.min(256)),
            limit,
            truncated: false,
        }
    }

    /// Appends as much of `s` as fits, cutting on a char boundary. Returns `false` once anything was cut.
    pub fn push_str(&mut self, s: &str) -> bool {
        let room = self.remaining();
        if s.len() <= room {
            self.buf.push_str(s);
            return true;
        }

        let mut cut = room;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        self.buf.push_str(&s[..cut]);
        self.truncated = true;
        false
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.buf.len())
    }

    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        self.truncated
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Post-render sanity check: a finished line is never shorter than the raw payload it carries.
    #[must_use]
    pub fn covers(&self, payload: &str) -> bool {
        self.buf.len() >= payload.len()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Truncates `s` to at most `max` bytes without splitting a character.
#[must_use]
pub fn truncate_to(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    s[..cut].to_string()
}
