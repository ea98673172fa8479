use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SmtpConfigError {
    #[error("Couldn't open the SMTP config file [path: {path}]")]
    CantOpenConfigFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("The SMTP config is malformed, expected `username,password,hostname,port`")]
    MalformedConfig(#[source] csv::Error),
    #[error("The SMTP config contains no credentials")]
    MissingCredentials,
    #[error("The SMTP config should contain exactly one set of credentials, found {0}")]
    MultipleCredentials(usize),
}
