//! CSV export of the contact list

use crate::core::Contact;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Column names written as the first line
pub const CONTACT_CSV_HEADER: [&str; 5] = ["Number", "Name", "ID", "Type", "Tone"];

impl Contact {
    /// Fields for one CSV row; `number` is the 1-based list position
    pub fn to_csv(&self, number: usize) -> Vec<String> {
        vec![
            number.to_string(),
            quote(&self.name),
            self.id.to_string(),
            self.call_type.to_string(),
            (if self.tone { "On" } else { "Off" }).to_string(),
        ]
    }
}

/// Quote a field when it holds a separator, quote or line break
fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Write contacts as CSV
pub fn write_contacts_csv<W: Write>(mut out: W, contacts: &[Contact]) -> std::io::Result<()> {
    writeln!(out, "{}", CONTACT_CSV_HEADER.join(","))?;
    for (i, contact) in contacts.iter().enumerate() {
        writeln!(out, "{}", contact.to_csv(i + 1).join(","))?;
    }
    Ok(())
}

/// Export contacts to a CSV file
pub fn export_contacts_csv(
    filename: impl AsRef<Path>,
    contacts: &[Contact],
) -> std::io::Result<()> {
    let file = BufWriter::new(File::create(filename)?);
    write_contacts_csv(file, contacts)
}
