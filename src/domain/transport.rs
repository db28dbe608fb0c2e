use async_trait::async_trait;

use super::envelope::Envelope;
use super::error::SendError;
use super::http_client::HttpResponse;
use super::message::OutboundMessage;

/// The seam between the mail-dispatch layer and a concrete transport.
///
/// A successful send returns the provider's response and writes the assigned
/// message-ID back onto `message`. Retry, logging, and event dispatch are the
/// caller's concern.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(
        &self,
        message: &mut OutboundMessage,
        envelope: &Envelope,
    ) -> Result<HttpResponse, SendError>;
}
