// Contact record codec

use super::layout::{CONTACTS, CONTACT_SIZE};
use crate::bitwise::{decode_label, encode_label, read_u24_le, write_u24_le, LABEL_SIZE};
use crate::core::validation::{validate_contact, ValidationError};
use crate::core::{CallType, Contact};
use crate::drivers::traits::{PlugError, PlugResult, RecordCodec, RecordEncoder, RecordLayout, Slot};

/// Type byte high nibble with the call receive tone off
const TONE_OFF: u8 = 0xC0;

/// Type byte high nibble with the call receive tone on
const TONE_ON: u8 = 0xE0;

/// ID bytes of an unused slot
const BLANK_ID: [u8; 3] = [0xFF, 0xFF, 0xFF];

/// Raw contact structure (36 bytes)
///
/// Byte layout:
/// - Bytes 0-2:  DMR ID (u24 little-endian)
/// - Byte 3:     Type byte: tone flag in the high nibble (0xC0 off, 0xE0 on),
///               call type in the low nibble (0 blank, 1 group, 2 private, 3 all)
/// - Bytes 4-35: Name (UTF-16LE, NUL padded)
#[derive(Debug, Clone, PartialEq, Eq)]
struct RawContact {
    id: [u8; 3],
    type_byte: u8,
    name: [u8; LABEL_SIZE],
}

impl RawContact {
    fn from_bytes(data: &[u8]) -> PlugResult<Self> {
        if data.len() != CONTACT_SIZE {
            return Err(PlugError::ShortRead {
                offset: 0,
                expected: CONTACT_SIZE,
                actual: data.len(),
            });
        }

        let mut id = [0u8; 3];
        id.copy_from_slice(&data[0..3]);
        let mut name = [0u8; LABEL_SIZE];
        name.copy_from_slice(&data[4..CONTACT_SIZE]);

        Ok(Self {
            id,
            type_byte: data[3],
            name,
        })
    }

    fn to_bytes(&self) -> [u8; CONTACT_SIZE] {
        let mut bytes = [0u8; CONTACT_SIZE];
        bytes[0..3].copy_from_slice(&self.id);
        bytes[3] = self.type_byte;
        bytes[4..].copy_from_slice(&self.name);
        bytes
    }

    /// Unused slot: ID all ones and the type byte all ones or without a call type
    fn is_blank(&self) -> bool {
        self.id == BLANK_ID && (self.type_byte == 0xFF || self.type_byte & 0x0F == 0)
    }

    fn tone(&self) -> PlugResult<bool> {
        match self.type_byte & 0xF0 {
            TONE_OFF => Ok(false),
            TONE_ON => Ok(true),
            _ => Err(PlugError::InvalidToneNibble(self.type_byte)),
        }
    }

    /// `None` is the blank call type
    fn call_type(&self) -> PlugResult<Option<CallType>> {
        CallType::from_nibble(self.type_byte & 0x0F)
            .map_err(|_| PlugError::InvalidTypeNibble(self.type_byte))
    }
}

/// Decode a 36-byte contact record
pub fn decode_contact(data: &[u8]) -> PlugResult<Slot<Contact>> {
    let raw = RawContact::from_bytes(data)?;
    if raw.is_blank() {
        return Ok(Slot::Blank);
    }

    let id = read_u24_le(&raw.id)?;
    let tone = raw.tone()?;
    let call_type = match raw.call_type()? {
        Some(call_type) => call_type,
        None => {
            tracing::debug!("Dropping contact {} with blank call type", id);
            return Ok(Slot::Blank);
        }
    };
    let name = decode_label(&raw.name)?;

    Ok(Slot::Value(Contact {
        id,
        call_type,
        tone,
        name,
    }))
}

/// Encode a contact into its 36-byte record
pub fn encode_contact(contact: &Contact) -> PlugResult<[u8; CONTACT_SIZE]> {
    validate_contact(contact)?;

    let raw = RawContact {
        id: write_u24_le(contact.id)?,
        type_byte: (if contact.tone { TONE_ON } else { TONE_OFF }) | contact.call_type.nibble(),
        name: encode_label(&contact.name)?,
    };
    Ok(raw.to_bytes())
}

pub struct ContactCodec;

impl RecordCodec for ContactCodec {
    type Output = Contact;

    const LAYOUT: RecordLayout = CONTACTS;

    fn decode(raw: &[u8]) -> PlugResult<Slot<Contact>> {
        decode_contact(raw)
    }
}

impl RecordEncoder for ContactCodec {
    type Input = Contact;

    fn encode(value: &Contact) -> PlugResult<Vec<u8>> {
        encode_contact(value).map(|bytes| bytes.to_vec())
    }

    fn blank() -> Vec<u8> {
        let mut bytes = vec![0u8; CONTACT_SIZE];
        bytes[0..4].copy_from_slice(&[0xFF; 4]);
        bytes
    }

    fn overflow(count: usize) -> ValidationError {
        ValidationError::TooManyContacts(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// (contact, raw record) pairs
    fn vectors() -> Vec<(Contact, Vec<u8>)> {
        let raw = |head: [u8; 4], digit: u8| {
            let mut bytes = head.to_vec();
            bytes.extend_from_slice(&[
                0x56, 0x00, 0x61, 0x00, 0x6C, 0x00, 0x69, 0x00, 0x64, 0x00, 0x20, 0x00, digit,
                0x00,
            ]);
            bytes.resize(CONTACT_SIZE, 0);
            bytes
        };
        vec![
            (
                Contact::new(1, "Valid 1", CallType::Group, false),
                raw([0x01, 0x00, 0x00, 0xC1], 0x31),
            ),
            (
                Contact::new(2, "Valid 2", CallType::Group, true),
                raw([0x02, 0x00, 0x00, 0xE1], 0x32),
            ),
            (
                Contact::new(3, "Valid 3", CallType::Private, false),
                raw([0x03, 0x00, 0x00, 0xC2], 0x33),
            ),
            (
                Contact::new(4, "Valid 4", CallType::Private, true),
                raw([0x04, 0x00, 0x00, 0xE2], 0x34),
            ),
            (
                Contact::new(16_777_215, "Valid 5", CallType::All, false),
                raw([0xFF, 0xFF, 0xFF, 0xC3], 0x35),
            ),
        ]
    }

    #[test]
    fn test_encode_vectors() {
        for (contact, raw) in vectors() {
            assert_eq!(encode_contact(&contact).unwrap().to_vec(), raw, "{}", contact);
        }
    }

    #[test]
    fn test_decode_vectors() {
        for (contact, raw) in vectors() {
            assert_eq!(decode_contact(&raw).unwrap(), Slot::Value(contact));
        }
    }

    #[test]
    fn test_roundtrip_non_ascii() {
        let contact = Contact::new(0x123456, "Zürich Süd", CallType::Private, true);
        let raw = encode_contact(&contact).unwrap();
        assert_eq!(decode_contact(&raw).unwrap(), Slot::Value(contact));
    }

    #[test]
    fn test_encode_rejects_large_id() {
        let contact = Contact::new(16_777_216, "Too big", CallType::Group, false);
        assert_eq!(
            encode_contact(&contact),
            Err(PlugError::ValueOutOfRange(ValidationError::IdOutOfRange(
                16_777_216
            )))
        );
    }

    #[test]
    fn test_encode_rejects_long_name() {
        let contact = Contact::new(1, "Seventeen chars!!", CallType::Group, false);
        assert!(matches!(
            encode_contact(&contact),
            Err(PlugError::ValueOutOfRange(ValidationError::NameTooLong { len: 17, .. }))
        ));
    }

    #[test]
    fn test_blank_sentinels() {
        let mut raw = vec![0u8; CONTACT_SIZE];
        raw[0..4].copy_from_slice(&[0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(decode_contact(&raw).unwrap(), Slot::Blank);

        raw[3] = 0xC0;
        assert_eq!(decode_contact(&raw).unwrap(), Slot::Blank);

        raw[3] = 0x10;
        assert_eq!(decode_contact(&raw).unwrap(), Slot::Blank);

        assert_eq!(decode_contact(&ContactCodec::blank()).unwrap(), Slot::Blank);
    }

    #[test]
    fn test_blank_call_type_dropped() {
        let mut raw = encode_contact(&Contact::new(7, "Seven", CallType::Group, true)).unwrap();
        raw[3] = 0xE0;
        assert_eq!(decode_contact(&raw).unwrap(), Slot::Blank);
    }

    #[test]
    fn test_invalid_tone_nibble() {
        let mut raw = encode_contact(&Contact::new(7, "Seven", CallType::Group, false)).unwrap();
        for byte in [0x01, 0x81, 0xD1, 0xF1] {
            raw[3] = byte;
            assert_eq!(decode_contact(&raw), Err(PlugError::InvalidToneNibble(byte)));
        }
    }

    #[test]
    fn test_all_ones_type_byte_with_real_id() {
        let mut raw = encode_contact(&Contact::new(7, "Seven", CallType::Group, false)).unwrap();
        raw[3] = 0xFF;
        assert_eq!(decode_contact(&raw), Err(PlugError::InvalidToneNibble(0xFF)));
    }

    #[test]
    fn test_encode_rejects_nul_in_name() {
        assert_eq!(
            encode_contact(&Contact::new(5, "A\0B", CallType::Group, false)),
            Err(PlugError::ValueOutOfRange(ValidationError::NameHasNul(
                "A\0B".to_string()
            )))
        );
    }

    #[test]
    fn test_invalid_type_nibble() {
        let mut raw = encode_contact(&Contact::new(7, "Seven", CallType::Group, false)).unwrap();
        raw[3] = 0xC4;
        assert_eq!(decode_contact(&raw), Err(PlugError::InvalidTypeNibble(0xC4)));
    }

    #[test]
    fn test_malformed_name() {
        let mut raw = encode_contact(&Contact::new(7, "Seven", CallType::Group, false)).unwrap();
        raw[4..6].copy_from_slice(&0xDC00u16.to_le_bytes());
        assert!(matches!(decode_contact(&raw), Err(PlugError::MalformedText(_))));
    }

    #[test]
    fn test_wrong_record_size() {
        assert!(matches!(
            decode_contact(&[0u8; 20]),
            Err(PlugError::ShortRead { expected: 36, actual: 20, .. })
        ));
    }
}
