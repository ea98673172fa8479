use crate::mailing::error::ConfigError;
use crate::recipient::error::RecipientError;
use crate::smtp::error::SmtpConfigError;
use crate::template::error::TemplateError;
use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

/// Errors preventing a mailing from starting.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Invalid command line.")]
    Config(#[from] ConfigError),
    #[error("Can't load SMTP credentials.")]
    SmtpConfig(#[from] SmtpConfigError),
    #[error("Can't load recipients.")]
    Recipient(#[from] RecipientError),
    #[error("Can't load the email template.")]
    Template(#[from] TemplateError),
}
