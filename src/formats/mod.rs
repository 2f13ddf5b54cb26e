// File format handlers
pub mod csv;
pub mod rdt;

pub use csv::{export_contacts_csv, write_contacts_csv};
pub use rdt::{load_rdt, open_rdt, save_rdt, RdtFileError};
