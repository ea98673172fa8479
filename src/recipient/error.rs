use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecipientError {
    #[error("Couldn't open the recipient list [path: {path}]")]
    CantOpenRecipientList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed recipient, expected `name,email` [line: {line}]")]
    MalformedRecipient {
        line: u64,
        #[source]
        source: csv::Error,
    },
}
