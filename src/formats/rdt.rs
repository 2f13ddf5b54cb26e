// RDT codeplug files on disk

use crate::core::Plug;
use crate::drivers::md380::{self, DecodedPlug};
use crate::drivers::PlugError;
use crate::memmap::MemoryMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RdtFileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Codeplug error: {0}")]
    Plug(#[from] PlugError),
}

pub type Result<T> = std::result::Result<T, RdtFileError>;

/// Read an RDT file into memory
pub fn load_rdt(filename: impl AsRef<Path>) -> Result<MemoryMap> {
    let data = fs::read(filename.as_ref())?;
    tracing::debug!("Read {} bytes from {}", data.len(), filename.as_ref().display());
    Ok(MemoryMap::new(data))
}

/// Read and decode an RDT file
pub fn open_rdt(filename: impl AsRef<Path>) -> Result<DecodedPlug> {
    let mmap = load_rdt(filename)?;
    Ok(md380::decode_mmap(&mmap)?)
}

/// Write `plug` into `template` and save the result to `filename`
pub fn save_rdt(filename: impl AsRef<Path>, plug: &Plug, template: &MemoryMap) -> Result<()> {
    let image = md380::encode(plug, template.get_packed())?;
    fs::write(filename, image)?;
    Ok(())
}
