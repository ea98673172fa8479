use crate::delivery::error::TransportError;
use crate::delivery::error::TransportError::{CantConnectToSmtpServer, CantSendMessage};
use crate::email::message::Message;
use crate::smtp::SmtpCredentials;
use crate::tools::log_message;
use mail_send::SmtpClientBuilder;
use mail_send::smtp::message::Message as RawMessage;

const IMPLICIT_TLS_PORT: u16 = 465;

/// Hands a single message over to a mail server, once.
pub trait Transport {
    async fn send(
        &self,
        message: &Message,
        credentials: &SmtpCredentials,
    ) -> Result<(), TransportError>;
}

impl<T: Transport> Transport for &T {
    async fn send(
        &self,
        message: &Message,
        credentials: &SmtpCredentials,
    ) -> Result<(), TransportError> {
        (**self).send(message, credentials).await
    }
}

/// Opens a new authenticated SMTP session for each message.
#[derive(Debug, Default)]
pub struct SmtpTransport;

impl Transport for SmtpTransport {
    async fn send(
        &self,
        message: &Message,
        credentials: &SmtpCredentials,
    ) -> Result<(), TransportError> {
        let port = *credentials.port();
        let mut smtp_client = SmtpClientBuilder::new(credentials.hostname().as_str(), port)
            .implicit_tls(port == IMPLICIT_TLS_PORT)
            .credentials((
                credentials.username().as_str(),
                credentials.password().as_str(),
            ))
            .connect()
            .await
            .inspect_err(|e| log_message("Couldn't connect to SMTP server")(e))
            .map_err(|e| CantConnectToSmtpServer(e.to_string()))?;

        let envelope = RawMessage::empty()
            .from(credentials.username().as_str())
            .to(message.to().as_str())
            .body(message.to_bytes());
        smtp_client
            .send(envelope)
            .await
            .inspect_err(|e| log_message("Couldn't send message")(e))
            .map_err(|e| CantSendMessage(e.to_string()))
    }
}
