use super::email::EmailAddress;

/// Transport-level routing information: the sender and recipients used for
/// actual delivery, independent of whatever the message headers claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    sender: EmailAddress,
    recipients: Vec<EmailAddress>,
}

impl Envelope {
    /// Recipient order is preserved all the way to the wire.
    pub fn new(sender: EmailAddress, recipients: Vec<EmailAddress>) -> Result<Envelope, String> {
        if recipients.is_empty() {
            return Err("An envelope must have at least one recipient".to_string());
        }
        Ok(Envelope { sender, recipients })
    }

    pub fn sender(&self) -> &EmailAddress {
        &self.sender
    }

    pub fn recipients(&self) -> &[EmailAddress] {
        &self.recipients
    }
}
