//! Byte geometry of the MD-380 family RDT file.
//!
//! Every region sits at a fixed offset; only the contact and receive group
//! arrays have codecs; the remaining regions are listed so the full file
//! length is known.

use crate::core::constants::{MAX_CONTACTS, MAX_GROUP_MEMBERS, MAX_RX_GROUPS};
use crate::drivers::traits::RecordLayout;

/// Header and settings preceding the contact list
pub const HEADER_SIZE: usize = 0x61A5;

/// Contact: 3-byte ID, type byte, 32-byte name
pub const CONTACT_SIZE: usize = 36;

/// Receive group: 32-byte name, 32 little-endian member positions
pub const RX_GROUP_SIZE: usize = 32 + MAX_GROUP_MEMBERS * 2;

pub const CONTACTS: RecordLayout = RecordLayout {
    name: "contacts",
    offset: HEADER_SIZE,
    size: CONTACT_SIZE,
    count: MAX_CONTACTS,
};

pub const RX_GROUPS: RecordLayout = RecordLayout {
    name: "receive groups",
    offset: CONTACTS.end(),
    size: RX_GROUP_SIZE,
    count: MAX_RX_GROUPS,
};

pub const ZONES: RecordLayout = RecordLayout {
    name: "zones",
    offset: RX_GROUPS.end(),
    size: 64,
    count: 250,
};

pub const SCAN_LISTS: RecordLayout = RecordLayout {
    name: "scan lists",
    offset: ZONES.end(),
    size: 104,
    count: 250,
};

const PADDING_1: usize = 16;

pub const CHANNELS: RecordLayout = RecordLayout {
    name: "channels",
    offset: SCAN_LISTS.end() + PADDING_1,
    size: 64,
    count: 1000,
};

const PADDING_2: usize = 0x11810;

/// Length of a complete RDT file
pub const RDT_FILE_SIZE: usize = CHANNELS.end() + PADDING_2;

/// End of the last region this crate decodes
pub const DECODED_END: usize = RX_GROUPS.end();
