// Capacity limits of the MD-380 family codeplug

use crate::bitwise::{label::LABEL_MAX_UNITS, U24_MAX};

/// Largest DMR ID a contact can carry (three raw bytes)
pub const MAX_CONTACT_ID: u32 = U24_MAX;

/// Contact slots in a codeplug
pub const MAX_CONTACTS: usize = 1000;

/// Receive group slots in a codeplug
pub const MAX_RX_GROUPS: usize = 250;

/// Member slots in a single receive group
pub const MAX_GROUP_MEMBERS: usize = 32;

/// Longest contact or group name, in UTF-16 code units
pub const MAX_NAME_LEN: usize = LABEL_MAX_UNITS;
