//! Command bridge trait abstraction.
//!
//! Every backend interaction in folio is a named command with a JSON
//! argument payload and a JSON result. This module defines the trait for
//! issuing those commands, enabling dependency injection and mocking in
//! tests.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Transport-level errors for command invocation.
///
/// The backend contract is all-or-nothing: a command either returns its
/// result or fails with one of these. There is no retry or backoff; callers
/// surface [`InvokeError`]'s `Display` output to the user.
#[derive(Debug, Clone, Error)]
pub enum InvokeError {
    /// Could not reach the backend process
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Backend rejected the command
    #[error("Backend error ({status}): {message}")]
    Backend { status: u16, message: String },

    /// Result payload did not match the expected shape
    #[error("Malformed result for '{command}': {message}")]
    Decode { command: String, message: String },

    /// Other transport error
    #[error("Invoke error: {0}")]
    Other(String),
}

/// Trait for issuing named commands to the backend.
///
/// This is the single seam between the client and the backend of record.
/// Implementations include the production HTTP bridge and a recording mock
/// for tests.
///
/// # Example
///
/// ```ignore
/// use folio::traits::{CommandBridge, InvokeError};
/// use serde_json::json;
///
/// async fn ping<B: CommandBridge>(bridge: &B) -> Result<(), InvokeError> {
///     bridge.invoke("ping", json!({})).await.map(|_| ())
/// }
/// ```
#[async_trait]
pub trait CommandBridge: Send + Sync {
    /// Invoke a named command with a JSON argument payload.
    ///
    /// # Arguments
    /// * `command` - The backend command name (e.g. `"list_books"`)
    /// * `args` - Argument payload; `Value::Null` for argument-less commands
    ///
    /// # Returns
    /// The raw JSON result or a transport error
    async fn invoke(&self, command: &str, args: Value) -> Result<Value, InvokeError>;
}

/// Invoke a command and deserialize its result into a typed value.
///
/// All `api` wrappers go through this helper so decode failures carry the
/// command name they came from.
pub async fn invoke_typed<B, T>(bridge: &B, command: &str, args: Value) -> Result<T, InvokeError>
where
    B: CommandBridge + ?Sized,
    T: DeserializeOwned,
{
    let value = bridge.invoke(command, args).await?;
    serde_json::from_value(value).map_err(|e| InvokeError::Decode {
        command: command.to_string(),
        message: e.to_string(),
    })
}
