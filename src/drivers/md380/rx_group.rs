// Receive group record codec

use super::layout::{RX_GROUPS, RX_GROUP_SIZE};
use crate::bitwise::{
    decode_label, encode_label, label, parse_array, parse_u16_le, write_u16_le, LABEL_SIZE,
};
use crate::core::constants::{MAX_CONTACTS, MAX_GROUP_MEMBERS};
use crate::core::validation::{validate_name, ValidationError};
use crate::core::ReceiveGroup;
use crate::drivers::traits::{PlugError, PlugResult, RecordCodec, RecordEncoder, RecordLayout, Slot};

/// A decoded receive group whose members are still on-disk positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedRxGroup {
    pub name: String,

    /// Nonzero 1-based contact positions, in slot order
    pub positions: Vec<u16>,
}

/// Decode a 96-byte receive group record
pub fn decode_rx_group(data: &[u8]) -> PlugResult<Slot<UnresolvedRxGroup>> {
    if data.len() != RX_GROUP_SIZE {
        return Err(PlugError::ShortRead {
            offset: 0,
            expected: RX_GROUP_SIZE,
            actual: data.len(),
        });
    }

    let (name_bytes, member_bytes) = data.split_at(LABEL_SIZE);
    if label::is_blank(name_bytes) {
        return Ok(Slot::Blank);
    }

    let name = decode_label(name_bytes)?;
    let (_, members) = parse_array(MAX_GROUP_MEMBERS, parse_u16_le)(member_bytes).map_err(|_| {
        PlugError::ShortRead {
            offset: LABEL_SIZE,
            expected: MAX_GROUP_MEMBERS * 2,
            actual: member_bytes.len(),
        }
    })?;

    // Unused member slots are zero and may sit between used ones
    let positions = members.into_iter().filter(|&p| p != 0).collect();

    Ok(Slot::Value(UnresolvedRxGroup { name, positions }))
}

/// Encode a receive group, writing each member as its 1-based position
pub fn encode_rx_group(group: &ReceiveGroup) -> PlugResult<[u8; RX_GROUP_SIZE]> {
    validate_name(&group.name)?;
    if group.members.len() > MAX_GROUP_MEMBERS {
        return Err(PlugError::ValueOutOfRange(ValidationError::TooManyMembers {
            group: group.name.clone(),
            count: group.members.len(),
        }));
    }

    let mut bytes = [0u8; RX_GROUP_SIZE];
    bytes[..LABEL_SIZE].copy_from_slice(&encode_label(&group.name)?);

    for (slot, member) in group.members.iter().enumerate() {
        let position = member.position();
        if position > MAX_CONTACTS {
            return Err(PlugError::ValueOutOfRange(ValidationError::DanglingMember {
                group: group.name.clone(),
                position,
                contacts: MAX_CONTACTS,
            }));
        }
        let offset = LABEL_SIZE + slot * 2;
        // MAX_CONTACTS fits in a u16
        bytes[offset..offset + 2].copy_from_slice(&write_u16_le(position as u16));
    }

    Ok(bytes)
}

pub struct RxGroupCodec;

impl RecordCodec for RxGroupCodec {
    type Output = UnresolvedRxGroup;

    const LAYOUT: RecordLayout = RX_GROUPS;

    fn decode(raw: &[u8]) -> PlugResult<Slot<UnresolvedRxGroup>> {
        decode_rx_group(raw)
    }
}

impl RecordEncoder for RxGroupCodec {
    type Input = ReceiveGroup;

    fn encode(value: &ReceiveGroup) -> PlugResult<Vec<u8>> {
        encode_rx_group(value).map(|bytes| bytes.to_vec())
    }

    fn blank() -> Vec<u8> {
        vec![0u8; RX_GROUP_SIZE]
    }

    fn overflow(count: usize) -> ValidationError {
        ValidationError::TooManyRxGroups(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ContactIndex;

    fn record(name: &str, members: &[u16]) -> Vec<u8> {
        let mut bytes = encode_label(name).unwrap().to_vec();
        for slot in 0..MAX_GROUP_MEMBERS {
            let value = members.get(slot).copied().unwrap_or(0);
            bytes.extend_from_slice(&value.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn test_decode_members() {
        let raw = record("Local", &[1, 3]);
        assert_eq!(
            decode_rx_group(&raw).unwrap(),
            Slot::Value(UnresolvedRxGroup {
                name: "Local".to_string(),
                positions: vec![1, 3],
            })
        );
    }

    #[test]
    fn test_zero_members_are_not_terminators() {
        let raw = record("Gaps", &[0, 5, 0, 0, 2]);
        match decode_rx_group(&raw).unwrap() {
            Slot::Value(group) => assert_eq!(group.positions, vec![5, 2]),
            Slot::Blank => panic!("group should not be blank"),
        }
    }

    #[test]
    fn test_blank_name_is_blank_slot() {
        let mut raw = vec![0u8; RX_GROUP_SIZE];
        // Leftover members do not make the slot used
        raw[LABEL_SIZE] = 4;
        assert_eq!(decode_rx_group(&raw).unwrap(), Slot::Blank);
    }

    #[test]
    fn test_group_without_members() {
        let raw = record("Empty", &[]);
        assert_eq!(
            decode_rx_group(&raw).unwrap(),
            Slot::Value(UnresolvedRxGroup {
                name: "Empty".to_string(),
                positions: vec![],
            })
        );
    }

    #[test]
    fn test_encode_positions() {
        let mut group = ReceiveGroup::new("Local");
        group.members = vec![
            ContactIndex::from_position(1, 3).unwrap(),
            ContactIndex::from_position(3, 3).unwrap(),
        ];
        let raw = encode_rx_group(&group).unwrap();
        assert_eq!(raw.to_vec(), record("Local", &[1, 3]));
    }

    #[test]
    fn test_encode_too_many_members() {
        let mut group = ReceiveGroup::new("Big");
        group.members = vec![ContactIndex::from_position(1, 1).unwrap(); MAX_GROUP_MEMBERS + 1];
        assert!(matches!(
            encode_rx_group(&group),
            Err(PlugError::ValueOutOfRange(ValidationError::TooManyMembers { count: 33, .. }))
        ));
    }

    #[test]
    fn test_wrong_record_size() {
        assert!(matches!(
            decode_rx_group(&[1u8; 40]),
            Err(PlugError::ShortRead { expected: 96, actual: 40, .. })
        ));
    }
}
