//! HTTP-based command bridge adapter.
//!
//! The production implementation of [`CommandBridge`]: each command is a
//! POST to `{base}/v1/invoke/{command}` with the argument payload as the
//! JSON body. The backend replies with the command result (200) or a plain
//! error message (non-2xx).

use async_trait::async_trait;
use serde_json::Value;

use crate::traits::{CommandBridge, InvokeError};

/// Default backend address when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:7420";

/// Command bridge implementation using reqwest.
#[derive(Debug, Clone)]
pub struct HttpBridge {
    /// Base URL of the backend daemon
    pub base_url: String,
    /// Reusable HTTP client
    client: reqwest::Client,
}

impl HttpBridge {
    /// Create a new bridge pointing at the default local backend.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Create a new bridge with a custom base URL.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Convert a reqwest error to an [`InvokeError`].
    fn convert_error(err: reqwest::Error) -> InvokeError {
        if err.is_timeout() {
            InvokeError::Timeout(err.to_string())
        } else if err.is_connect() {
            InvokeError::ConnectionFailed(err.to_string())
        } else {
            InvokeError::Other(err.to_string())
        }
    }
}

impl Default for HttpBridge {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandBridge for HttpBridge {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value, InvokeError> {
        let url = format!("{}/v1/invoke/{}", self.base_url, command);

        tracing::debug!(command, "invoking backend command");

        let response = self
            .client
            .post(&url)
            .json(&args)
            .send()
            .await
            .map_err(Self::convert_error)?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(command, status, "backend rejected command");
            return Err(InvokeError::Backend { status, message });
        }

        // Delete-style commands return an empty body; treat it as null.
        let body = response.bytes().await.map_err(Self::convert_error)?;
        if body.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&body).map_err(|e| InvokeError::Decode {
            command: command.to_string(),
            message: e.to_string(),
        })
    }
}
