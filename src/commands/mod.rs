//! Robot Command Wrappers
//!
//! Frontend binding to the `send_command` endpoint, over an injectable transport.

mod http;

pub use http::HttpTransport;

use crate::error::DispatchError;
use crate::models::{CommandRequest, CommandResponse};

/// Status and body of an HTTP exchange
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

pub trait Transport {
    /// POST `body` as `application/json` to `path`
    async fn post_json(&self, path: &str, body: String) -> Result<RawResponse, DispatchError>;
}

// ========================
// Commands
// ========================

/// Send one command and decode the reply.
///
/// The body is decoded whatever the status: the server reports
/// failures as `{"error": ..}` with a 4xx/5xx code.
pub async fn send_command<T: Transport>(
    transport: &T,
    endpoint: &str,
    request: &CommandRequest,
) -> Result<CommandResponse, DispatchError> {
    let body = serde_json::to_string(request).map_err(|e| DispatchError::Decode(e.to_string()))?;
    let raw = transport.post_json(endpoint, body).await?;
    if !(200..300).contains(&raw.status) {
        log::debug!("[COMMAND] {} answered {}", endpoint, raw.status);
    }
    serde_json::from_str(&raw.body).map_err(|e| DispatchError::Decode(e.to_string()))
}
