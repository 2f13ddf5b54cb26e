// Fixed-width UTF-16LE labels (contact and group names)

use thiserror::Error;

/// Size of an encoded label in bytes
pub const LABEL_SIZE: usize = 32;

/// Maximum number of UTF-16 code units in a label
pub const LABEL_MAX_UNITS: usize = LABEL_SIZE / 2;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    #[error("Label must be {size} bytes, got {0}", size = LABEL_SIZE)]
    WrongSize(usize),

    #[error("Malformed UTF-16 in label: unpaired surrogate {0:#06x}")]
    MalformedText(u16),

    #[error("Label \"{text}\" encodes to {len} bytes, maximum is {max}", max = LABEL_SIZE)]
    TooLong { text: String, len: usize },

    #[error("Label \"{0}\" contains a NUL character")]
    EmbeddedNul(String),
}

pub type Result<T> = std::result::Result<T, LabelError>;

/// A label is blank when every byte is zero; no text decoding happens.
pub fn is_blank(data: &[u8]) -> bool {
    data.iter().all(|&b| b == 0)
}

/// Decode a 32-byte UTF-16LE block.
///
/// NUL code points are removed wherever they appear. A byte order mark is
/// not interpreted: the block is always little-endian.
pub fn decode_label(data: &[u8]) -> Result<String> {
    if data.len() != LABEL_SIZE {
        return Err(LabelError::WrongSize(data.len()));
    }

    let units = data
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));

    char::decode_utf16(units)
        .filter(|r| !matches!(r, Ok('\0')))
        .collect::<std::result::Result<String, _>>()
        .map_err(|e| LabelError::MalformedText(e.unpaired_surrogate()))
}

/// Number of bytes `text` occupies once encoded
pub fn encoded_len(text: &str) -> usize {
    text.encode_utf16().count() * 2
}

/// Encode `text` as UTF-16LE, zero-padded to exactly 32 bytes
pub fn encode_label(text: &str) -> Result<[u8; LABEL_SIZE]> {
    let len = encoded_len(text);
    if len > LABEL_SIZE {
        return Err(LabelError::TooLong {
            text: text.to_string(),
            len,
        });
    }
    // NUL is padding on disk and would be lost on decode
    if text.contains('\0') {
        return Err(LabelError::EmbeddedNul(text.to_string()));
    }

    let mut out = [0u8; LABEL_SIZE];
    for (i, unit) in text.encode_utf16().enumerate() {
        out[i * 2..i * 2 + 2].copy_from_slice(&unit.to_le_bytes());
    }
    Ok(out)
}
