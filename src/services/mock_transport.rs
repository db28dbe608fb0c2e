use async_trait::async_trait;
use reqwest::StatusCode;

use crate::domain::{Envelope, HttpResponse, MailTransport, OutboundMessage, SendError};

/// Transport that accepts everything without touching the network. Useful
/// when exercising a mail-dispatch layer in tests.
#[derive(Default, Clone)]
pub struct MockTransport;

#[async_trait]
impl MailTransport for MockTransport {
    #[tracing::instrument(name = "Sending mock email", skip(self, message))]
    async fn send(
        &self,
        message: &mut OutboundMessage,
        envelope: &Envelope,
    ) -> Result<HttpResponse, SendError> {
        tracing::debug!(
            sender = %envelope.sender(),
            recipients = envelope.recipients().len(),
            "Sending mock email"
        );
        Ok(HttpResponse::new(StatusCode::OK, b"[]".to_vec()))
    }
}
