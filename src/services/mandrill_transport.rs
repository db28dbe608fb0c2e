use std::fmt;

use async_trait::async_trait;
use color_eyre::eyre::{eyre, Result};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use serde_json::json;

use crate::domain::{
    Envelope, HttpClient, HttpResponse, MailTransport, OutboundMessage, SendError,
};
use crate::services::reqwest_http_client::ReqwestHttpClient;
use crate::utils::constants::{env, DEFAULT_HOST, SEND_RAW_PATH};

/// Mandrill API credentials plus an optional host/port override for the
/// API server. Immutable once the transport is built.
pub struct Credentials {
    api_key: Secret<String>,
    host: Option<String>,
    port: Option<u16>,
}

impl Credentials {
    pub fn new(api_key: Secret<String>) -> Self {
        Self {
            api_key,
            host: None,
            port: None,
        }
    }

    pub fn with_host(mut self, host: String) -> Self {
        self.host = Some(host);
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Read credentials from the environment (`MANDRILL_API_KEY`, plus the
    /// optional `MANDRILL_HOST` and `MANDRILL_PORT` overrides). `.env` files
    /// are honored.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var(env::MANDRILL_API_KEY_ENV_VAR)
            .map_err(|_| eyre!("{} must be set.", env::MANDRILL_API_KEY_ENV_VAR))?;
        if api_key.is_empty() {
            return Err(eyre!("{} must not be empty.", env::MANDRILL_API_KEY_ENV_VAR));
        }

        let mut credentials = Credentials::new(Secret::new(api_key));

        if let Ok(host) = std::env::var(env::MANDRILL_HOST_ENV_VAR) {
            if !host.is_empty() {
                credentials = credentials.with_host(host);
            }
        }

        if let Ok(port) = std::env::var(env::MANDRILL_PORT_ENV_VAR) {
            if !port.is_empty() {
                let port = port
                    .parse()
                    .map_err(|_| eyre!("{} must be a port number.", env::MANDRILL_PORT_ENV_VAR))?;
                credentials = credentials.with_port(port);
            }
        }

        Ok(credentials)
    }

    /// The `host[:port]` pair to contact, falling back to the public
    /// Mandrill host with no explicit port.
    pub fn endpoint(&self) -> String {
        let host = self.host.as_deref().unwrap_or(DEFAULT_HOST);
        match self.port {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        }
    }
}

/// Sends raw messages through Mandrill's `messages/send-raw.json` endpoint.
///
/// One send issues exactly one HTTP POST; there is no retry or backoff here.
/// Generic over the [`HttpClient`] collaborator so tests can substitute a
/// stub for the default reqwest-backed client.
pub struct MandrillTransport<C = ReqwestHttpClient> {
    credentials: Credentials,
    http_client: C,
}

impl MandrillTransport<ReqwestHttpClient> {
    pub fn new(credentials: Credentials) -> Result<Self, SendError> {
        Ok(Self::with_http_client(credentials, ReqwestHttpClient::new()?))
    }
}

impl<C> MandrillTransport<C> {
    pub fn with_http_client(credentials: Credentials, http_client: C) -> Self {
        Self {
            credentials,
            http_client,
        }
    }

    fn url(&self) -> String {
        format!("https://{}{}", self.credentials.endpoint(), SEND_RAW_PATH)
    }
}

impl<C> fmt::Display for MandrillTransport<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "mandrill+https://{}", self.credentials.endpoint())
    }
}

/// One element of the success response array.
#[derive(Debug, Deserialize)]
struct SendRawResult {
    #[serde(rename = "_id")]
    id: Option<String>,
}

/// Error body shape: `{"status": "error", "message": ..., "code": ...}`.
/// Every field is optional so a lenient parse of partial bodies still works.
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    status: Option<String>,
    message: Option<String>,
    code: Option<i64>,
}

#[async_trait]
impl<C: HttpClient> MailTransport for MandrillTransport<C> {
    #[tracing::instrument(
        name = "Sending email via Mandrill",
        skip_all,
        fields(transport = %self, recipients = envelope.recipients().len())
    )]
    async fn send(
        &self,
        message: &mut OutboundMessage,
        envelope: &Envelope,
    ) -> Result<HttpResponse, SendError> {
        let recipients: Vec<&str> = envelope.recipients().iter().map(AsRef::as_ref).collect();
        let body = json!({
            "key": self.credentials.api_key.expose_secret(),
            "to": recipients,
            "from_email": envelope.sender().as_ref(),
            "raw_message": message.raw(),
        });

        let response = self.http_client.post_json(&self.url(), &body).await?;

        if response.status().as_u16() != 200 {
            let error_body: ApiErrorBody =
                serde_json::from_slice(response.body()).unwrap_or_default();

            if error_body.status.as_deref() == Some("error") {
                tracing::warn!(code = ?error_body.code, "Mandrill reported a send failure");
                return Err(SendError::Api {
                    message: error_body.message.unwrap_or_default(),
                    code: error_body.code,
                    response,
                });
            }

            return Err(SendError::Unknown {
                code: error_body.code,
                response,
            });
        }

        let results: Vec<SendRawResult> =
            serde_json::from_slice(response.body()).unwrap_or_default();
        match results.into_iter().next().and_then(|result| result.id) {
            Some(id) => {
                tracing::debug!(message_id = %id, "Email accepted by Mandrill");
                message.set_message_id(id);
            }
            None => tracing::warn!("Mandrill accepted the email but returned no message id"),
        }

        Ok(response)
    }
}
