// PLUGGER-RS: codeplug tools for the TYT MD-380 radio family

pub mod bitwise;
pub mod core;
pub mod drivers;
pub mod formats;
pub mod memmap;

// Re-export commonly used types
pub use self::core::{
    constants::*, validation, CallType, Contact, ContactIndex, Plug, ReceiveGroup,
    ValidationError,
};
pub use drivers::{decode, encode, encode_contact, DecodedPlug, PlugError, PlugResult, ShortRead};
pub use formats::{load_rdt, open_rdt, save_rdt};
pub use memmap::MemoryMap;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
