use crate::email::error::ValidationError;
use crate::email::error::ValidationError::InvalidFormat;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_ADDRESS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("Email address regex should be valid")
});

/// Check the syntax of an email address.
/// Neither the domain nor the mailbox existence is checked.
pub fn validate(address: &str) -> Result<(), ValidationError> {
    if EMAIL_ADDRESS_REGEX.is_match(address) {
        Ok(())
    } else {
        Err(InvalidFormat(address.to_owned()))
    }
}
