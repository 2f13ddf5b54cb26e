// In-memory codeplug image

use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryMapError {
    #[error("Range {start:#07x}..{end:#07x} is outside the {len}-byte image")]
    OutOfBounds { start: usize, end: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, MemoryMapError>;

/// Byte buffer holding a complete (or truncated) codeplug file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryMap {
    data: Vec<u8>,
}

impl MemoryMap {
    /// Create a new memory map from bytes
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Create a memory map of `size` bytes, each set to `fill`
    pub fn new_filled(size: usize, fill: u8) -> Self {
        Self {
            data: vec![fill; size],
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn check(&self, start: usize, length: usize) -> Result<std::ops::Range<usize>> {
        let end = start.saturating_add(length);
        if end > self.data.len() {
            return Err(MemoryMapError::OutOfBounds {
                start,
                end,
                len: self.data.len(),
            });
        }
        Ok(start..end)
    }

    /// Borrow `length` bytes starting at `start`
    pub fn get(&self, start: usize, length: usize) -> Result<&[u8]> {
        let range = self.check(start, length)?;
        Ok(&self.data[range])
    }

    /// Overwrite bytes starting at `pos`
    pub fn set_bytes(&mut self, pos: usize, bytes: &[u8]) -> Result<()> {
        let range = self.check(pos, bytes.len())?;
        self.data[range].copy_from_slice(bytes);
        Ok(())
    }

    /// Get the entire memory map as raw bytes
    pub fn get_packed(&self) -> &[u8] {
        &self.data
    }

    /// Get the entire memory map as owned Vec<u8>
    pub fn to_vec(&self) -> Vec<u8> {
        self.data.clone()
    }

    /// Hex dump of `length` bytes at `start`, offsets relative to the file
    pub fn printable(&self, start: usize, length: usize) -> Result<String> {
        let slice = self.get(start, length)?;
        Ok(hexdump(slice, start))
    }
}

impl From<Vec<u8>> for MemoryMap {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&[u8]> for MemoryMap {
    fn from(data: &[u8]) -> Self {
        Self::new(data.to_vec())
    }
}

impl AsRef<[u8]> for MemoryMap {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Display for MemoryMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MemoryMap({} bytes)", self.data.len())
    }
}

/// Create a hex dump of bytes (similar to hexdump -C)
fn hexdump(data: &[u8], base: usize) -> String {
    let mut output = String::new();

    for (i, chunk) in data.chunks(16).enumerate() {
        output.push_str(&format!("{:08x}  ", base + i * 16));

        for j in 0..16 {
            if j == 8 {
                output.push(' ');
            }
            match chunk.get(j) {
                Some(byte) => output.push_str(&format!("{:02x} ", byte)),
                None => output.push_str("   "),
            }
        }

        output.push_str(" |");
        for &byte in chunk {
            if (0x20..=0x7e).contains(&byte) {
                output.push(byte as char);
            } else {
                output.push('.');
            }
        }
        output.push_str("|\n");
    }

    output
}
