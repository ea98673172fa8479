use crate::delivery::retry::{
    Backoff, DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY, MAX_EXPONENTIAL_DELAY, RetryPolicy,
};
use crate::mailing::error::ConfigError;
use crate::mailing::error::ConfigError::{
    InvalidArgValue, MissingRecipientListPath, MissingSmtpConfigPath, MissingTemplatePath,
};
use crate::tools::env_args::{retrieve_arg_value, retrieve_expected_arg_value};
use crate::tools::log_message_and_return;
use derive_getters::Getters;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

type Result<T, E = ConfigError> = std::result::Result<T, E>;

const TEMPLATE_ARG: [&str; 2] = ["-t", "--template"];
const RECIPIENT_ARG: [&str; 2] = ["-r", "--recipient"];
const CONFIG_ARG: [&str; 2] = ["-c", "--config"];
const SUBJECT_ARG: [&str; 2] = ["-s", "--subject"];
const FROM_ARG: [&str; 2] = ["-f", "--from"];
const MAX_ATTEMPTS_ARG: &str = "--max-attempts";
const RETRY_DELAY_ARG: &str = "--retry-delay";
const BACKOFF_ARG: &str = "--backoff";
const DEFAULT_SUBJECT: &str = "Test Mail";
const DEFAULT_FROM: &str = "mail@example.com";

/// Everything a mailing run needs, as given on the command line.
#[derive(Debug, PartialEq, Getters)]
pub struct MailingConfig {
    template_path: PathBuf,
    recipient_list_path: PathBuf,
    smtp_config_path: PathBuf,
    subject: String,
    sender: String,
    retry_policy: RetryPolicy,
}

impl MailingConfig {
    pub fn from_args() -> Result<Self> {
        Ok(Self {
            template_path: retrieve_expected_arg_value(&TEMPLATE_ARG, MissingTemplatePath)?
                .into(),
            recipient_list_path: retrieve_expected_arg_value(
                &RECIPIENT_ARG,
                MissingRecipientListPath,
            )?
            .into(),
            smtp_config_path: retrieve_expected_arg_value(&CONFIG_ARG, MissingSmtpConfigPath)?
                .into(),
            subject: retrieve_arg_value(&SUBJECT_ARG).unwrap_or(DEFAULT_SUBJECT.to_owned()),
            sender: retrieve_arg_value(&FROM_ARG).unwrap_or(DEFAULT_FROM.to_owned()),
            retry_policy: retrieve_retry_policy()?,
        })
    }
}

fn retrieve_retry_policy() -> Result<RetryPolicy> {
    let max_attempts = retrieve_parsed_arg_value(MAX_ATTEMPTS_ARG)?.unwrap_or(DEFAULT_MAX_ATTEMPTS);
    if max_attempts == 0 {
        return Err(InvalidArgValue {
            arg: MAX_ATTEMPTS_ARG,
            value: max_attempts.to_string(),
        });
    }
    let retry_delay = retrieve_parsed_arg_value(RETRY_DELAY_ARG)?
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_RETRY_DELAY);
    let backoff = match retrieve_arg_value(BACKOFF_ARG).as_deref() {
        None | Some("fixed") => Backoff::Fixed(retry_delay),
        Some("exponential") => Backoff::Exponential {
            initial: retry_delay,
            max: MAX_EXPONENTIAL_DELAY.max(retry_delay),
        },
        Some(value) => {
            return Err(InvalidArgValue {
                arg: BACKOFF_ARG,
                value: value.to_owned(),
            });
        }
    };

    Ok(RetryPolicy::new(max_attempts, backoff))
}

fn retrieve_parsed_arg_value<T: FromStr>(arg: &'static str) -> Result<Option<T>>
where
    T::Err: std::fmt::Debug,
{
    retrieve_arg_value(arg)
        .map(|value| {
            value.parse::<T>().map_err(log_message_and_return(
                "Can't parse arg value",
                InvalidArgValue { arg, value },
            ))
        })
        .transpose()
}
