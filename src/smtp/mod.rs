use crate::smtp::error::SmtpConfigError;
use crate::smtp::error::SmtpConfigError::{
    CantOpenConfigFile, MalformedConfig, MissingCredentials, MultipleCredentials,
};
use derive_getters::Getters;
use serde::Deserialize;
use std::fmt::{Debug, Formatter};
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub mod error;

type Result<T, E = SmtpConfigError> = std::result::Result<T, E>;

/// Credentials and address of the SMTP server every email goes through.
#[derive(Clone, PartialEq, Deserialize, Getters)]
pub struct SmtpCredentials {
    username: String,
    password: String,
    hostname: String,
    port: u16,
}

#[cfg(test)]
impl SmtpCredentials {
    pub fn new(username: String, password: String, hostname: String, port: u16) -> Self {
        Self {
            username,
            password,
            hostname,
            port,
        }
    }
}

impl Debug for SmtpCredentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpCredentials")
            .field("username", &self.username)
            .field("password", &"********")
            .field("hostname", &self.hostname)
            .field("port", &self.port)
            .finish()
    }
}

pub fn load_smtp_credentials(path: &Path) -> Result<SmtpCredentials> {
    let file = File::open(path).map_err(|source| CantOpenConfigFile {
        path: path.to_path_buf(),
        source,
    })?;
    read_smtp_credentials(file)
}

/// Read the single `username,password,hostname,port` row of an SMTP config.
pub fn read_smtp_credentials<R: Read>(reader: R) -> Result<SmtpCredentials> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = reader
        .deserialize()
        .collect::<std::result::Result<Vec<SmtpCredentials>, _>>()
        .map_err(MalformedConfig)?;

    match rows.len() {
        0 => Err(MissingCredentials),
        1 => Ok(rows.remove(0)),
        count => Err(MultipleCredentials(count)),
    }
}
