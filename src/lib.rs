pub mod domain;
pub mod services;
pub mod utils;

// Re-export important types at the crate root
pub use domain::{
    EmailAddress, Envelope, HttpClient, HttpResponse, MailTransport, OutboundMessage, SendError,
};
pub use services::{Credentials, MandrillTransport, MockTransport, ReqwestHttpClient};
