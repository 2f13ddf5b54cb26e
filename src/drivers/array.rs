// Fixed record arrays <-> variable-length entry lists

use super::traits::{PlugError, PlugResult, RecordCodec, RecordEncoder, Slot};
use crate::bitwise::parse_records;
use crate::memmap::MemoryMap;

/// Decode every slot of `C::LAYOUT` from the image.
///
/// Blank slots are skipped wherever they occur; the first hard error aborts
/// the whole array. Entries keep their relative slot order.
pub fn decode_array<C: RecordCodec>(mmap: &MemoryMap) -> PlugResult<Vec<C::Output>> {
    let layout = C::LAYOUT;
    let region = mmap.get(layout.offset, layout.len())?;
    decode_records::<C>(region)
}

/// Decode a raw array region (exactly `C::LAYOUT.len()` bytes)
pub fn decode_records<C: RecordCodec>(region: &[u8]) -> PlugResult<Vec<C::Output>> {
    let layout = C::LAYOUT;
    let (_, records) =
        parse_records(layout.count, layout.size)(region).map_err(|_| PlugError::ShortRead {
            offset: layout.offset,
            expected: layout.len(),
            actual: region.len(),
        })?;

    let mut entries = Vec::with_capacity(layout.count);
    let mut blanks = 0usize;

    for (slot, raw) in records.into_iter().enumerate() {
        match C::decode(raw) {
            Ok(Slot::Value(entry)) => entries.push(entry),
            Ok(Slot::Blank) => blanks += 1,
            Err(e) => {
                tracing::debug!(
                    "{} slot {} at {:#07x} failed to decode: {}",
                    layout.name,
                    slot,
                    layout.slot_offset(slot),
                    e
                );
                return Err(e);
            }
        }
    }

    tracing::info!(
        "Decoded {} {} ({} blank slots out of {})",
        entries.len(),
        layout.name,
        blanks,
        layout.count
    );
    Ok(entries)
}

/// Write `entries` into the leading slots of `C::LAYOUT`, blanking the rest
pub fn encode_array<C: RecordEncoder>(
    mmap: &mut MemoryMap,
    entries: &[C::Input],
) -> PlugResult<()> {
    let layout = C::LAYOUT;
    if entries.len() > layout.count {
        return Err(PlugError::ValueOutOfRange(C::overflow(entries.len())));
    }
    // Fail on a truncated image before touching it
    mmap.get(layout.offset, layout.len())?;

    let blank = C::blank();
    for slot in 0..layout.count {
        let bytes = match entries.get(slot) {
            Some(entry) => C::encode(entry)?,
            None => blank.clone(),
        };
        mmap.set_bytes(layout.slot_offset(slot), &bytes)?;
    }

    tracing::debug!("Encoded {} {} into {} slots", entries.len(), layout.name, layout.count);
    Ok(())
}
