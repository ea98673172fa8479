use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    #[error("Can't connect to SMTP server: {0}")]
    CantConnectToSmtpServer(String),
    #[error("Can't send message: {0}")]
    CantSendMessage(String),
}

#[derive(Debug, PartialEq, Error)]
#[error("Failed sending to {recipient} after {attempts} attempt(s): {last_error}")]
pub struct DeliveryError {
    recipient: String,
    attempts: u32,
    #[source]
    last_error: TransportError,
}

impl DeliveryError {
    pub fn new(recipient: String, attempts: u32, last_error: TransportError) -> Self {
        Self {
            recipient,
            attempts,
            last_error,
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    #[cfg(test)]
    pub fn last_error(&self) -> &TransportError {
        &self.last_error
    }
}
