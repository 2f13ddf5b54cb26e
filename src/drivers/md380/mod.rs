//! TYT MD-380 family (MD-380, MD-390, RT-3, RT-8) RDT codeplug.
//!
//! Decoding runs the contact array to completion first, then the receive
//! group array, then resolves every group member against the finished
//! contact list. Nothing is returned unless all three steps succeed.

pub mod contact;
pub mod layout;
pub mod rx_group;

pub use contact::{decode_contact, encode_contact, ContactCodec};
pub use layout::{DECODED_END, RDT_FILE_SIZE};
pub use rx_group::{decode_rx_group, encode_rx_group, RxGroupCodec, UnresolvedRxGroup};

use super::array::{decode_array, encode_array};
use super::traits::{PlugError, PlugResult, RecordEncoder, ShortRead};
use crate::core::validation::validate_plug;
use crate::core::{ContactIndex, Plug, ReceiveGroup};
use crate::memmap::MemoryMap;

/// Result of a successful decode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPlug {
    pub plug: Plug,

    /// Set when the input stopped after the decoded arrays but before the
    /// end of a full RDT file
    pub short_read: Option<ShortRead>,
}

/// Decode an RDT image held in memory
pub fn decode(data: &[u8]) -> PlugResult<DecodedPlug> {
    decode_mmap(&MemoryMap::from(data))
}

pub fn decode_mmap(mmap: &MemoryMap) -> PlugResult<DecodedPlug> {
    let mut plug = Plug::new();

    plug.contacts = decode_array::<ContactCodec>(mmap)?;

    let raw_groups = decode_array::<RxGroupCodec>(mmap)?;
    plug.rx_groups = raw_groups
        .into_iter()
        .map(|group| resolve_members(group, plug.contacts.len()))
        .collect::<PlugResult<Vec<_>>>()?;

    let short_read = if mmap.len() < RDT_FILE_SIZE {
        let short = ShortRead {
            expected: RDT_FILE_SIZE,
            actual: mmap.len(),
        };
        tracing::warn!("Truncated RDT image: {}", short);
        Some(short)
    } else {
        None
    };

    Ok(DecodedPlug { plug, short_read })
}

/// Turn on-disk member positions into indices into a list of `contacts`.
///
/// Positions count from 1 over the decoded (blank-free) contact list.
pub fn resolve_members(group: UnresolvedRxGroup, contacts: usize) -> PlugResult<ReceiveGroup> {
    let members = group
        .positions
        .iter()
        .map(|&position| {
            ContactIndex::from_position(position, contacts).ok_or_else(|| {
                PlugError::UnresolvedReference {
                    group: group.name.clone(),
                    position,
                    contacts,
                }
            })
        })
        .collect::<PlugResult<Vec<_>>>()?;

    Ok(ReceiveGroup {
        name: group.name,
        members,
    })
}

/// Write `plug` over the contact and receive group arrays of `template`.
///
/// Everything outside those arrays is copied from the template unchanged.
pub fn encode(plug: &Plug, template: &[u8]) -> PlugResult<Vec<u8>> {
    validate_plug(plug)?;

    let mut mmap = MemoryMap::from(template);
    encode_array::<ContactCodec>(&mut mmap, &plug.contacts)?;
    encode_array::<RxGroupCodec>(&mut mmap, &plug.rx_groups)?;
    Ok(mmap.to_vec())
}

/// A full-size image with every contact and receive group slot blank
pub fn blank_image() -> Vec<u8> {
    let mut image = vec![0u8; RDT_FILE_SIZE];
    let blank = ContactCodec::blank();
    image[layout::CONTACTS.offset..layout::CONTACTS.end()]
        .chunks_exact_mut(layout::CONTACT_SIZE)
        .for_each(|slot| slot.copy_from_slice(&blank));
    image
}
