// Receive groups and the contact indices they hold

use serde::Serialize;
use std::fmt;

/// Position of a contact in [`crate::Plug::contacts`] (0-based).
///
/// Only the assembler creates these, after bounds checking against the
/// decoded contact list. Serialize-only: there is no unchecked way back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ContactIndex(usize);

impl ContactIndex {
    /// Validate a 1-based on-disk position against a list of `len` contacts
    pub fn from_position(position: u16, len: usize) -> Option<Self> {
        let position = position as usize;
        if position == 0 || position > len {
            return None;
        }
        Some(Self(position - 1))
    }

    /// Index into the contact list
    pub fn index(self) -> usize {
        self.0
    }

    /// 1-based position as stored in the file
    pub fn position(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for ContactIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.position())
    }
}

/// A named set of contacts a channel listens to
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ReceiveGroup {
    pub name: String,

    /// Members in on-disk order; duplicates are preserved
    pub members: Vec<ContactIndex>,
}

impl ReceiveGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }
}
