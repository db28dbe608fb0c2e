use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use super::error::SendError;

/// The HTTP collaborator the transport sends through.
///
/// Implementations own connection handling, TLS, and timeouts. The default
/// implementation is [`ReqwestHttpClient`](crate::services::ReqwestHttpClient);
/// tests substitute a recording stub.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse, SendError>;
}

/// An owned capture of one HTTP response: status code plus the full body.
///
/// Returned to the caller on success and embedded in [`SendError`] variants
/// so failures can be inspected after the fact.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    status: StatusCode,
    body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Best-effort JSON decode of the body. Malformed or empty bodies come
    /// back as `Value::Null` rather than an error, so field lookups on the
    /// result simply find nothing.
    pub fn json_lenient(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or(Value::Null)
    }
}
