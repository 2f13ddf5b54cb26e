// Binary primitives for RDT records: integers, labels and record slicing

pub mod elements;
pub mod label;
pub mod parser;

pub use elements::{read_u16_le, read_u24_le, write_u16_le, write_u24_le, ElementError, U24_MAX};
pub use label::{decode_label, encode_label, LabelError, LABEL_SIZE};
pub use parser::{parse_array, parse_records, parse_u16_le};
