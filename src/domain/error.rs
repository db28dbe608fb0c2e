use thiserror::Error;

use super::http_client::HttpResponse;

fn code_or_unknown(code: &Option<i64>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "unknown".to_string(),
    }
}

#[derive(Debug, Error)]
pub enum SendError {
    /// The provider answered non-200 with a recognizable error body
    /// (`status: "error"` plus a message and code).
    #[error("Unable to send an email: {message} (code {rendered}).", rendered = code_or_unknown(.code))]
    Api {
        message: String,
        code: Option<i64>,
        response: HttpResponse,
    },

    /// The provider answered non-200 but the body was missing, malformed,
    /// or not a recognizable error shape.
    #[error("Unable to send an email (code {rendered}).", rendered = code_or_unknown(.code))]
    Unknown {
        code: Option<i64>,
        response: HttpResponse,
    },

    /// A failure below the HTTP exchange (DNS, TLS, connection), passed
    /// through from the HTTP client untouched.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl SendError {
    /// The response that produced this error, when one was received at all.
    pub fn response(&self) -> Option<&HttpResponse> {
        match self {
            SendError::Api { response, .. } | SendError::Unknown { response, .. } => Some(response),
            SendError::Transport(_) => None,
        }
    }
}
