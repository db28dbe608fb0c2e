/// A fully serialized outbound email: the raw MIME text plus the
/// provider-assigned message-ID, which the transport writes back after a
/// successful send.
///
/// Composition and MIME encoding happen upstream; this type only carries the
/// finished text.
#[derive(Debug, Clone)]
pub struct OutboundMessage {
    raw: String,
    message_id: Option<String>,
}

impl OutboundMessage {
    pub fn new(raw: String) -> Self {
        Self {
            raw,
            message_id: None,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn message_id(&self) -> Option<&str> {
        self.message_id.as_deref()
    }

    pub fn set_message_id(&mut self, id: String) {
        self.message_id = Some(id);
    }
}
