use crate::delivery::error::DeliveryError;
use crate::delivery::retry::RetryPolicy;
use crate::delivery::transport::Transport;
use crate::email::message::Message;
use crate::smtp::SmtpCredentials;
use derive_getters::Getters;
use tokio::time::sleep;

pub mod error;
pub mod retry;
pub mod transport;

/// Sends messages through a [Transport], retrying failed attempts as the policy allows.
#[derive(Getters)]
pub struct DeliveryAgent<T: Transport> {
    transport: T,
    retry_policy: RetryPolicy,
}

impl<T: Transport> DeliveryAgent<T> {
    pub fn new(transport: T, retry_policy: RetryPolicy) -> Self {
        Self {
            transport,
            retry_policy,
        }
    }

    /// Return how many attempts were needed, or the last error once every attempt has failed.
    pub async fn send(
        &self,
        message: &Message,
        credentials: &SmtpCredentials,
    ) -> Result<u32, DeliveryError> {
        let max_attempts = self.retry_policy.max_attempts();
        let mut attempt = 1;
        loop {
            match self.transport.send(message, credentials).await {
                Ok(()) => return Ok(attempt),
                Err(error) if attempt >= max_attempts => {
                    return Err(DeliveryError::new(message.to().clone(), attempt, error));
                }
                Err(error) => {
                    let delay = self.retry_policy.backoff().delay_after(attempt);
                    debug!(
                        "Attempt {attempt}/{max_attempts} to {} failed, retrying in {delay:?}: {error}",
                        message.to()
                    );
                    sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}
