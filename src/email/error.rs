use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum ValidationError {
    #[error("Email address is not valid [address: {0}]")]
    InvalidFormat(String),
}
