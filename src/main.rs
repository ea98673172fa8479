mod delivery;
mod email;
mod error;
mod mailing;
mod recipient;
mod smtp;
mod template;
mod tools;

#[macro_use]
extern crate log;

use crate::delivery::DeliveryAgent;
use crate::delivery::transport::{SmtpTransport, Transport};
use crate::error::{ApplicationError, Result};
use crate::mailing::{Mailing, RecipientOutcome};
use crate::mailing::config::MailingConfig;
use crate::recipient::load_recipients;
use crate::smtp::load_smtp_credentials;
use crate::template::TemplateRenderer;
use env_logger::{Env, Target};
use std::error::Error;
use std::process::ExitCode;

const USAGE: &str =
    "Usage: bmail --template=TEMPLATE.html --recipient=RECIPIENTS.csv --config=SMTP.csv \
    [--subject=SUBJECT] [--from=ADDRESS] [--max-attempts=N] [--retry-delay=SECONDS] \
    [--backoff=fixed|exponential]";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .init();

    match run(SmtpTransport).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format_fatal_error(&e));
            ExitCode::FAILURE
        }
    }
}

/// Load every input, then send to each recipient. Only loading errors are returned.
async fn run<T: Transport>(transport: T) -> Result<Vec<RecipientOutcome>> {
    let config = MailingConfig::from_args()?;
    let credentials = load_smtp_credentials(config.smtp_config_path())?;
    let recipients = load_recipients(config.recipient_list_path())?;
    let renderer = TemplateRenderer::from_file(config.template_path())?;

    let mailing = Mailing::new(
        credentials,
        renderer,
        config.sender().clone(),
        config.subject().clone(),
        DeliveryAgent::new(transport, *config.retry_policy()),
    );

    Ok(mailing.run(&recipients).await)
}

fn format_fatal_error(error: &ApplicationError) -> String {
    let mut report = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        report.push_str(&format!("\n  Caused by: {cause}"));
        source = cause.source();
    }
    if matches!(error, ApplicationError::Config(_)) {
        report.push('\n');
        report.push_str(USAGE);
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::tests::FakeTransport;
    use crate::mailing::SkipReason;
    use crate::mailing::error::ConfigError::MissingSmtpConfigPath;
    use crate::recipient::error::RecipientError;
    use crate::smtp::error::SmtpConfigError;
    use crate::template::error::TemplateError;
    use crate::tools::env_args::with_env_args_async;
    use crate::tools::test::tests::temp_dir;
    use std::fs;
    use std::path::Path;

    const SMTP_CONFIG: &str = "u,p,smtp.example.com,587\n";
    const RECIPIENTS: &str = "Ann,ann@example.com\nBad,not-an-email\n";
    const TEMPLATE: &str = "Hello {{Name}}";

    fn write_inputs(dir: &Path, smtp_config: &str, recipients: &str, template: &str) {
        fs::write(dir.join("smtp.csv"), smtp_config).unwrap();
        fs::write(dir.join("recipients.csv"), recipients).unwrap();
        fs::write(dir.join("template.html"), template).unwrap();
    }

    fn args(dir: &Path) -> Vec<String> {
        vec![
            format!("--template={}", dir.join("template.html").display()),
            format!("--recipient={}", dir.join("recipients.csv").display()),
            format!("--config={}", dir.join("smtp.csv").display()),
        ]
    }

    fn run_with(args: Vec<String>, transport: &FakeTransport) -> Result<Vec<RecipientOutcome>> {
        with_env_args_async(args, async || run(transport).await)
    }

    mod run {
        use super::*;

        #[test]
        fn success() {
            let dir = temp_dir();
            write_inputs(&dir, SMTP_CONFIG, RECIPIENTS, TEMPLATE);
            let transport = FakeTransport::succeeding();

            let outcomes = run_with(args(&dir), &transport).unwrap();

            assert_eq!(
                vec![
                    RecipientOutcome::Sent { attempts: 1 },
                    RecipientOutcome::Skipped(SkipReason::InvalidAddress)
                ],
                outcomes
            );
            let messages = transport.attempted_messages();
            assert_eq!(1, messages.len());
            assert_eq!("ann@example.com", messages[0].to());
            assert_eq!("Hello Ann", messages[0].body());
        }

        #[test]
        fn success_when_every_delivery_fails() {
            let dir = temp_dir();
            write_inputs(&dir, SMTP_CONFIG, RECIPIENTS, TEMPLATE);
            let transport = FakeTransport::always_failing();

            let outcomes = run_with(args(&dir), &transport).unwrap();

            assert_eq!(RecipientOutcome::Failed { attempts: 11 }, outcomes[0]);
        }

        #[test]
        fn fail_when_arg_is_missing() {
            let dir = temp_dir();
            write_inputs(&dir, SMTP_CONFIG, RECIPIENTS, TEMPLATE);
            let transport = FakeTransport::succeeding();
            let mut args = args(&dir);
            args.pop();

            let error = run_with(args, &transport).unwrap_err();

            assert!(matches!(error, ApplicationError::Config(MissingSmtpConfigPath)));
            assert_eq!(0, transport.attempt_count());
        }

        #[test]
        fn fail_when_smtp_config_is_missing() {
            let dir = temp_dir();
            write_inputs(&dir, SMTP_CONFIG, RECIPIENTS, TEMPLATE);
            fs::remove_file(dir.join("smtp.csv")).unwrap();
            let transport = FakeTransport::succeeding();

            let error = run_with(args(&dir), &transport).unwrap_err();

            assert!(matches!(
                error,
                ApplicationError::SmtpConfig(SmtpConfigError::CantOpenConfigFile { .. })
            ));
            assert_eq!(0, transport.attempt_count());
        }

        #[test]
        fn fail_when_smtp_config_has_multiple_rows() {
            let dir = temp_dir();
            let smtp_config = format!("{SMTP_CONFIG}v,q,smtp.example.org,465\n");
            write_inputs(&dir, &smtp_config, RECIPIENTS, TEMPLATE);
            let transport = FakeTransport::succeeding();

            let error = run_with(args(&dir), &transport).unwrap_err();

            assert!(matches!(
                error,
                ApplicationError::SmtpConfig(SmtpConfigError::MultipleCredentials(2))
            ));
            assert_eq!(0, transport.attempt_count());
        }

        #[test]
        fn fail_when_recipient_list_is_missing() {
            let dir = temp_dir();
            write_inputs(&dir, SMTP_CONFIG, RECIPIENTS, TEMPLATE);
            fs::remove_file(dir.join("recipients.csv")).unwrap();
            let transport = FakeTransport::succeeding();

            let error = run_with(args(&dir), &transport).unwrap_err();

            assert!(matches!(
                error,
                ApplicationError::Recipient(RecipientError::CantOpenRecipientList { .. })
            ));
            assert_eq!(0, transport.attempt_count());
        }

        #[test]
        fn fail_when_recipient_list_is_malformed() {
            let dir = temp_dir();
            write_inputs(&dir, SMTP_CONFIG, "Ann,ann@example.com\nBob\n", TEMPLATE);
            let transport = FakeTransport::succeeding();

            let error = run_with(args(&dir), &transport).unwrap_err();

            assert!(matches!(
                error,
                ApplicationError::Recipient(RecipientError::MalformedRecipient { .. })
            ));
            assert_eq!(0, transport.attempt_count());
        }

        #[test]
        fn fail_when_template_is_missing() {
            let dir = temp_dir();
            write_inputs(&dir, SMTP_CONFIG, RECIPIENTS, TEMPLATE);
            fs::remove_file(dir.join("template.html")).unwrap();
            let transport = FakeTransport::succeeding();

            let error = run_with(args(&dir), &transport).unwrap_err();

            assert!(matches!(
                error,
                ApplicationError::Template(TemplateError::CantReadTemplate { .. })
            ));
            assert_eq!(0, transport.attempt_count());
        }

        #[test]
        fn fail_when_template_is_malformed() {
            let dir = temp_dir();
            write_inputs(&dir, SMTP_CONFIG, RECIPIENTS, "Hello {{Name");
            let transport = FakeTransport::succeeding();

            let error = run_with(args(&dir), &transport).unwrap_err();

            assert!(matches!(
                error,
                ApplicationError::Template(TemplateError::MalformedTemplate(_))
            ));
            assert_eq!(0, transport.attempt_count());
        }
    }

    mod format_fatal_error {
        use super::*;

        #[test]
        fn should_include_causes() {
            let dir = temp_dir();
            let error = ApplicationError::from(SmtpConfigError::CantOpenConfigFile {
                path: dir.join("smtp.csv"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
            });

            let report = format_fatal_error(&error);

            assert!(report.starts_with("Can't load SMTP credentials."));
            assert!(report.contains("Caused by: Couldn't open the SMTP config file"));
            assert!(report.contains("Caused by: file not found"));
            assert!(!report.contains(USAGE));
        }

        #[test]
        fn should_show_usage_when_command_line_is_invalid() {
            let error = ApplicationError::from(MissingSmtpConfigPath);

            let report = format_fatal_error(&error);

            assert!(report.contains("Missing SMTP config file"));
            assert!(report.ends_with(USAGE));
        }
    }
}
