// Record codec traits and the codeplug error type

use crate::bitwise::{ElementError, LabelError};
use crate::core::validation::ValidationError;
use crate::memmap::MemoryMapError;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlugError {
    #[error("Short read at {offset:#07x}: expected {expected} bytes, got {actual}")]
    ShortRead {
        offset: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid call type nibble in type byte {0:#04x}")]
    InvalidTypeNibble(u8),

    #[error("Invalid tone nibble in type byte {0:#04x}")]
    InvalidToneNibble(u8),

    #[error("Value out of range: {0}")]
    ValueOutOfRange(#[from] ValidationError),

    #[error(
        "Receive group \"{group}\" member {position} does not match any of {contacts} contacts"
    )]
    UnresolvedReference {
        group: String,
        position: u16,
        contacts: usize,
    },

    #[error("Malformed text: {0}")]
    MalformedText(String),
}

impl From<LabelError> for PlugError {
    fn from(err: LabelError) -> Self {
        match err {
            LabelError::WrongSize(actual) => PlugError::ShortRead {
                offset: 0,
                expected: crate::bitwise::LABEL_SIZE,
                actual,
            },
            LabelError::MalformedText(_) => PlugError::MalformedText(err.to_string()),
            LabelError::TooLong { text, len } => {
                PlugError::ValueOutOfRange(ValidationError::NameTooLong {
                    name: text,
                    len: len / 2,
                })
            }
            LabelError::EmbeddedNul(text) => {
                PlugError::ValueOutOfRange(ValidationError::NameHasNul(text))
            }
        }
    }
}

impl From<ElementError> for PlugError {
    fn from(err: ElementError) -> Self {
        match err {
            ElementError::InsufficientData { expected, actual } => PlugError::ShortRead {
                offset: 0,
                expected,
                actual,
            },
            ElementError::Overflow { value, .. } => PlugError::ValueOutOfRange(
                ValidationError::IdOutOfRange(u32::try_from(value).unwrap_or(u32::MAX)),
            ),
        }
    }
}

impl From<MemoryMapError> for PlugError {
    fn from(err: MemoryMapError) -> Self {
        match err {
            MemoryMapError::OutOfBounds { start, end, len } => PlugError::ShortRead {
                offset: start,
                expected: end - start,
                actual: len.saturating_sub(start),
            },
        }
    }
}

pub type PlugResult<T> = std::result::Result<T, PlugError>;

/// Outcome of decoding one slot of a record array
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<T> {
    Value(T),
    /// Unused slot; never becomes an entry of the plug
    Blank,
}

/// Geometry of a fixed record array inside the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordLayout {
    pub name: &'static str,
    pub offset: usize,
    pub size: usize,
    pub count: usize,
}

impl RecordLayout {
    /// Total bytes occupied by the array
    pub const fn len(&self) -> usize {
        self.size * self.count
    }

    /// First byte after the array
    pub const fn end(&self) -> usize {
        self.offset + self.len()
    }

    /// File offset of slot `index`
    pub const fn slot_offset(&self, index: usize) -> usize {
        self.offset + index * self.size
    }
}

/// Decoding half of a record kind
pub trait RecordCodec {
    type Output;

    const LAYOUT: RecordLayout;

    /// Decode one `LAYOUT.size`-byte record
    fn decode(raw: &[u8]) -> PlugResult<Slot<Self::Output>>;
}

/// Encoding half of a record kind
pub trait RecordEncoder: RecordCodec {
    type Input;

    fn encode(value: &Self::Input) -> PlugResult<Vec<u8>>;

    /// Bytes written to slots with no entry
    fn blank() -> Vec<u8>;

    /// Error for more entries than the array has slots
    fn overflow(count: usize) -> ValidationError;
}

/// Input ended after the decoded arrays but before the end of the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortRead {
    pub expected: usize,
    pub actual: usize,
}

impl fmt::Display for ShortRead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "file is {} bytes, {} expected ({} missing)",
            self.actual,
            self.expected,
            self.expected.saturating_sub(self.actual)
        )
    }
}
