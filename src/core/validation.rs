// Range checks applied before anything is written to a codeplug

use super::constants::*;
use super::contact::Contact;
use super::plug::Plug;
use super::rx_group::ReceiveGroup;
use crate::bitwise::label::encoded_len;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Contact ID {0} exceeds the 24-bit maximum {max}", max = MAX_CONTACT_ID)]
    IdOutOfRange(u32),

    #[error("Name \"{name}\" is {len} UTF-16 units long, maximum is {max}", max = MAX_NAME_LEN)]
    NameTooLong { name: String, len: usize },

    #[error("{0} contacts do not fit in {max} slots", max = MAX_CONTACTS)]
    TooManyContacts(usize),

    #[error("{0} receive groups do not fit in {max} slots", max = MAX_RX_GROUPS)]
    TooManyRxGroups(usize),

    #[error("Name \"{0}\" contains a NUL character")]
    NameHasNul(String),

    #[error(
        "Receive group \"{group}\" has {count} members, maximum is {max}",
        max = MAX_GROUP_MEMBERS
    )]
    TooManyMembers { group: String, count: usize },

    #[error("Receive group \"{group}\" refers to contact {position}, but only {contacts} exist")]
    DanglingMember {
        group: String,
        position: usize,
        contacts: usize,
    },
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let len = encoded_len(name) / 2;
    if len > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong {
            name: name.to_string(),
            len,
        });
    }
    if name.contains('\0') {
        return Err(ValidationError::NameHasNul(name.to_string()));
    }
    Ok(())
}

pub fn validate_contact(contact: &Contact) -> Result<(), ValidationError> {
    if contact.id > MAX_CONTACT_ID {
        return Err(ValidationError::IdOutOfRange(contact.id));
    }
    validate_name(&contact.name)
}

/// Check a group against a contact list of `contacts` entries
pub fn validate_rx_group(group: &ReceiveGroup, contacts: usize) -> Result<(), ValidationError> {
    validate_name(&group.name)?;
    if group.members.len() > MAX_GROUP_MEMBERS {
        return Err(ValidationError::TooManyMembers {
            group: group.name.clone(),
            count: group.members.len(),
        });
    }
    if let Some(member) = group.members.iter().find(|m| m.index() >= contacts) {
        return Err(ValidationError::DanglingMember {
            group: group.name.clone(),
            position: member.position(),
            contacts,
        });
    }
    Ok(())
}

/// Check that a whole plug can be written back to the fixed layout
pub fn validate_plug(plug: &Plug) -> Result<(), ValidationError> {
    if plug.contacts.len() > MAX_CONTACTS {
        return Err(ValidationError::TooManyContacts(plug.contacts.len()));
    }
    if plug.rx_groups.len() > MAX_RX_GROUPS {
        return Err(ValidationError::TooManyRxGroups(plug.rx_groups.len()));
    }
    for contact in &plug.contacts {
        validate_contact(contact)?;
    }
    for group in &plug.rx_groups {
        validate_rx_group(group, plug.contacts.len())?;
    }
    Ok(())
}
