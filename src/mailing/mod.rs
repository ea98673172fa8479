use crate::delivery::DeliveryAgent;
use crate::delivery::transport::Transport;
use crate::email::message::Message;
use crate::email::validation::validate;
use crate::recipient::Recipient;
use crate::smtp::SmtpCredentials;
use crate::template::TemplateRenderer;
use derive_getters::Getters;

pub mod config;
pub mod error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecipientOutcome {
    Sent { attempts: u32 },
    Skipped(SkipReason),
    Failed { attempts: u32 },
}

/// Why no email has been sent to a recipient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkipReason {
    InvalidAddress,
    RenderingFailed,
}

/// Sends the same template to every recipient, one after the other.
#[derive(Getters)]
pub struct Mailing<T: Transport> {
    credentials: SmtpCredentials,
    renderer: TemplateRenderer,
    sender: String,
    subject: String,
    delivery_agent: DeliveryAgent<T>,
}

impl<T: Transport> Mailing<T> {
    pub fn new(
        credentials: SmtpCredentials,
        renderer: TemplateRenderer,
        sender: String,
        subject: String,
        delivery_agent: DeliveryAgent<T>,
    ) -> Self {
        Self {
            credentials,
            renderer,
            sender,
            subject,
            delivery_agent,
        }
    }

    /// Process recipients in order. A recipient's failure never stops the others.
    pub async fn run(&self, recipients: &[Recipient]) -> Vec<RecipientOutcome> {
        let mut outcomes = Vec::with_capacity(recipients.len());
        for recipient in recipients {
            outcomes.push(self.process_recipient(recipient).await);
        }
        outcomes
    }

    async fn process_recipient(&self, recipient: &Recipient) -> RecipientOutcome {
        let address = recipient.email_address();
        if validate(address).is_err() {
            warn!("Email address ({address}) is not valid - Skipping...");
            return RecipientOutcome::Skipped(SkipReason::InvalidAddress);
        }

        let body = match self.renderer.render(recipient.display_name()) {
            Ok(body) => body,
            Err(e) => {
                error!("Couldn't render the email for {address} - Skipping...\n{e:#?}");
                return RecipientOutcome::Skipped(SkipReason::RenderingFailed);
            }
        };
        let message = Message::build(
            address.clone(),
            self.sender.clone(),
            self.subject.clone(),
            body,
        );

        match self.delivery_agent.send(&message, &self.credentials).await {
            Ok(1) => {
                info!("Email sent to {address}");
                RecipientOutcome::Sent { attempts: 1 }
            }
            Ok(attempts) => {
                info!("Email sent to {address} after {attempts} attempts");
                RecipientOutcome::Sent { attempts }
            }
            Err(e) => {
                error!("{e}");
                RecipientOutcome::Failed {
                    attempts: e.attempts(),
                }
            }
        }
    }
}
