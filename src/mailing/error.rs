use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("Missing template file, use `--template=TEMPLATE.html`")]
    MissingTemplatePath,
    #[error("Missing recipient list file, use `--recipient=RECIPIENTS.csv`")]
    MissingRecipientListPath,
    #[error("Missing SMTP config file, use `--config=SMTP.csv`")]
    MissingSmtpConfigPath,
    #[error("Invalid value for `{arg}` [value: {value}]")]
    InvalidArgValue { arg: &'static str, value: String },
}
