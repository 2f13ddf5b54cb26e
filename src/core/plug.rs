// Decoded codeplug document

use super::contact::Contact;
use super::rx_group::{ContactIndex, ReceiveGroup};
use crate::drivers::md380;
use crate::drivers::{PlugError, PlugResult, ShortRead};
use serde::Serialize;

/// Normalized view of a codeplug.
///
/// `contacts` is the arena that receive group members index into.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Plug {
    pub contacts: Vec<Contact>,
    pub rx_groups: Vec<ReceiveGroup>,
}

impl Plug {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every collection back to empty
    pub fn reset(&mut self) {
        self.contacts.clear();
        self.rx_groups.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty() && self.rx_groups.is_empty()
    }

    pub fn contact(&self, index: ContactIndex) -> Option<&Contact> {
        self.contacts.get(index.index())
    }

    /// Contacts of `group`, in member order.
    ///
    /// Fails on the first member that no longer points into `contacts`.
    pub fn members<'a>(&'a self, group: &ReceiveGroup) -> PlugResult<Vec<&'a Contact>> {
        group
            .members
            .iter()
            .map(|&member| {
                self.contact(member).ok_or_else(|| PlugError::UnresolvedReference {
                    group: group.name.clone(),
                    position: u16::try_from(member.position()).unwrap_or(u16::MAX),
                    contacts: self.contacts.len(),
                })
            })
            .collect()
    }

    /// Replace the contents of this plug with a decoded RDT image.
    ///
    /// On error the plug is left empty. A truncated file that still holds
    /// every decoded array returns the short read as `Ok(Some(_))`.
    pub fn unmarshal_binary(&mut self, data: &[u8]) -> PlugResult<Option<ShortRead>> {
        self.reset();
        let decoded = md380::decode(data)?;
        *self = decoded.plug;
        Ok(decoded.short_read)
    }

    /// Write this plug into a copy of `template` (a full RDT image)
    pub fn marshal_binary(&self, template: &[u8]) -> PlugResult<Vec<u8>> {
        md380::encode(self, template)
    }
}
