//! Caller-registered text fragments addressed by number from `&us<N>` tokens.

use crate::fmt::truncate_to;
use std::collections::BTreeMap;

/// Longest fragment kept, in bytes. Longer text is cut on a char boundary.
pub const MAX_FRAGMENT_LEN: usize = 9;

/// Id → fragment mapping. Re-registering an id keeps the first fragment; there is no removal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionTable {
    entries: BTreeMap<u32, String>,
}

impl SubstitutionTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `text` under `id`. Returns `false` when `id` was already taken (the earlier text stays).
    pub fn add(&mut self, id: u32, text: &str) -> bool {
        if self.entries.contains_key(&id) {
            return false;
        }
        self.entries.insert(id, truncate_to(text, MAX_FRAGMENT_LEN));
        true
    }

    /// Fragment for `id`, or `None`. Rendering treats a miss as "append nothing".
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&str> {
        self.entries.get(&id).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
