use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::domain::{HttpClient, HttpResponse, SendError};
use crate::utils::constants::DEFAULT_TIMEOUT;

/// Default [`HttpClient`] backed by `reqwest`, with a request timeout so a
/// hung provider cannot stall the dispatch layer indefinitely.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Result<Self, SendError> {
        let client = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse, SendError> {
        let response = self.client.post(url).json(body).send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();
        Ok(HttpResponse::new(status, body))
    }
}
