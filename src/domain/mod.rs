pub mod email;
pub mod envelope;
pub mod error;
pub mod http_client;
pub mod message;
pub mod transport;

pub use email::EmailAddress;
pub use envelope::Envelope;
pub use error::SendError;
pub use http_client::{HttpClient, HttpResponse};
pub use message::OutboundMessage;
pub use transport::MailTransport;
