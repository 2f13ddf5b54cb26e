// Codeplug drivers: record codec traits, generic array decoding, radio layouts
pub mod array;
pub mod traits;

// Radio families
pub mod md380;

pub use array::{decode_array, encode_array};
pub use md380::{decode, encode, encode_contact, DecodedPlug};
pub use traits::{PlugError, PlugResult, RecordCodec, RecordEncoder, RecordLayout, ShortRead, Slot};
