// Codeplug data model: contacts, receive groups and the plug holding them
pub mod constants;
pub mod contact;
pub mod plug;
pub mod rx_group;
pub mod validation;

pub use constants::*;
pub use contact::{CallType, Contact};
pub use plug::Plug;
pub use rx_group::{ContactIndex, ReceiveGroup};
pub use validation::ValidationError;
