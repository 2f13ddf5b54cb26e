// Little-endian integer elements used by RDT records

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElementError {
    #[error("Insufficient data: expected {expected} bytes, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    #[error("Value {value} does not fit in {bits} bits")]
    Overflow { value: u64, bits: u32 },
}

pub type Result<T> = std::result::Result<T, ElementError>;

/// Largest value a 24-bit field can hold
pub const U24_MAX: u32 = 0x00FF_FFFF;

fn require(data: &[u8], expected: usize) -> Result<()> {
    if data.len() < expected {
        return Err(ElementError::InsufficientData {
            expected,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a u16 in little-endian format
pub fn read_u16_le(data: &[u8]) -> Result<u16> {
    require(data, 2)?;
    Ok(u16::from_le_bytes([data[0], data[1]]))
}

/// Read a u24 (3 bytes) in little-endian format; the missing high byte is zero
pub fn read_u24_le(data: &[u8]) -> Result<u32> {
    require(data, 3)?;
    Ok(u32::from_le_bytes([data[0], data[1], data[2], 0]))
}

/// Write a u16 in little-endian format
pub fn write_u16_le(value: u16) -> [u8; 2] {
    value.to_le_bytes()
}

/// Write a u24 in little-endian format.
///
/// The value is laid out as a little-endian u32 and the most significant
/// byte is dropped, so anything above [`U24_MAX`] is rejected first.
pub fn write_u24_le(value: u32) -> Result<[u8; 3]> {
    if value > U24_MAX {
        return Err(ElementError::Overflow {
            value: value as u64,
            bits: 24,
        });
    }
    let bytes = value.to_le_bytes();
    Ok([bytes[0], bytes[1], bytes[2]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u16_read_write() {
        let data_le = [0x34, 0x12];
        assert_eq!(read_u16_le(&data_le).unwrap(), 0x1234);
        assert_eq!(write_u16_le(0x1234), data_le);
    }

    #[test]
    fn test_u24_read_write() {
        let data_le = [0x56, 0x34, 0x12];
        assert_eq!(read_u24_le(&data_le).unwrap(), 0x123456);
        assert_eq!(write_u24_le(0x123456).unwrap(), data_le);
    }

    #[test]
    fn test_u24_keeps_all_bits() {
        assert_eq!(write_u24_le(U24_MAX).unwrap(), [0xFF, 0xFF, 0xFF]);
        assert_eq!(read_u24_le(&[0xFF, 0xFF, 0xFF]).unwrap(), U24_MAX);
    }

    #[test]
    fn test_u24_overflow() {
        assert_eq!(
            write_u24_le(U24_MAX + 1),
            Err(ElementError::Overflow {
                value: 0x0100_0000,
                bits: 24
            })
        );
    }

    #[test]
    fn test_insufficient_data() {
        let data = [0x12];
        assert!(read_u16_le(&data).is_err());
        assert_eq!(
            read_u24_le(&data),
            Err(ElementError::InsufficientData {
                expected: 3,
                actual: 1
            })
        );
    }
}
