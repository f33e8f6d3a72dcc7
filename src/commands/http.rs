//! Fetch Transport
//!
//! `Transport` backed by the browser's fetch API.

use gloo_net::http::Request;

use super::{RawResponse, Transport};
use crate::error::DispatchError;

#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

impl Transport for HttpTransport {
    async fn post_json(&self, path: &str, body: String) -> Result<RawResponse, DispatchError> {
        let request = Request::post(path)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| DispatchError::Transport(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| DispatchError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DispatchError::Transport(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
}
