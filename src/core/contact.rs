// DMR contact: an ID, how it is called, and a display name

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a contact is dialled. Stored in the low nibble of the type byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallType {
    Group = 1,
    Private = 2,
    All = 3,
}

impl CallType {
    /// Nibble value written to the type byte
    pub fn nibble(self) -> u8 {
        self as u8
    }

    /// Map a type nibble to a call type. `Ok(None)` is the blank call type.
    /// Any nibble above 3 is returned as the error value.
    pub fn from_nibble(nibble: u8) -> Result<Option<Self>, u8> {
        match nibble {
            0 => Ok(None),
            1 => Ok(Some(CallType::Group)),
            2 => Ok(Some(CallType::Private)),
            3 => Ok(Some(CallType::All)),
            other => Err(other),
        }
    }
}

impl fmt::Display for CallType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CallType::Group => "Group",
            CallType::Private => "Private",
            CallType::All => "All",
        };
        write!(f, "{}", s)
    }
}

/// A single entry of the contact list.
///
/// Contacts are identified by their position in [`crate::Plug::contacts`];
/// the DMR `id` is not unique within a codeplug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// DMR ID, at most 24 bits
    pub id: u32,

    pub call_type: CallType,

    /// Call receive tone
    pub tone: bool,

    /// Display name, up to 16 UTF-16 code units
    pub name: String,
}

impl Contact {
    pub fn new(id: u32, name: impl Into<String>, call_type: CallType, tone: bool) -> Self {
        Self {
            id,
            call_type,
            tone,
            name: name.into(),
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" id={} type={} tone={}",
            self.name,
            self.id,
            self.call_type,
            if self.tone { "on" } else { "off" }
        )
    }
}
