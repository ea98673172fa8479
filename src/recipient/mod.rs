use crate::recipient::error::RecipientError;
use crate::recipient::error::RecipientError::{CantOpenRecipientList, MalformedRecipient};
use derive_getters::Getters;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub mod error;

type Result<T, E = RecipientError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Deserialize, Getters)]
pub struct Recipient {
    display_name: String,
    email_address: String,
}

#[cfg(test)]
impl Recipient {
    pub fn new(display_name: String, email_address: String) -> Self {
        Self {
            display_name,
            email_address,
        }
    }
}

pub fn load_recipients(path: &Path) -> Result<Vec<Recipient>> {
    let file = File::open(path).map_err(|source| CantOpenRecipientList {
        path: path.to_path_buf(),
        source,
    })?;
    read_recipients(file)
}

/// Read every `name,email` row, in order. Addresses are not validated here.
pub fn read_recipients<R: Read>(reader: R) -> Result<Vec<Recipient>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);
    reader
        .deserialize()
        .map(|result| {
            result.map_err(|source: csv::Error| MalformedRecipient {
                line: source.position().map(|position| position.line()).unwrap_or_default(),
                source,
            })
        })
        .collect()
}
