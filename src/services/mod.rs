pub mod mandrill_transport;
pub mod mock_transport;
pub mod reqwest_http_client;

pub use mandrill_transport::{Credentials, MandrillTransport};
pub use mock_transport::MockTransport;
pub use reqwest_http_client::ReqwestHttpClient;
