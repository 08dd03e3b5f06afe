//! Unified error handling for folio.
//!
//! Remote-call failures are caught at the state-store boundary, converted
//! to a human-readable string, and kept in store-local state; nothing
//! propagates across screens. [`FolioError`] is the typed form the `api`
//! layer returns before that conversion happens.

use thiserror::Error;

use crate::traits::InvokeError;

/// Result alias used throughout the library crate.
pub type FolioResult<T> = Result<T, FolioError>;

/// Unified error type for the folio client.
#[derive(Debug, Error)]
pub enum FolioError {
    /// A backend command failed at the transport or contract level.
    #[error(transparent)]
    Invoke(#[from] InvokeError),

    /// A local payload could not be serialized.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Local preference storage failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl FolioError {
    /// Whether retrying the same operation could plausibly succeed.
    ///
    /// The client never retries on its own; this only informs the hint
    /// shown next to an inline error.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            FolioError::Invoke(InvokeError::ConnectionFailed(_))
                | FolioError::Invoke(InvokeError::Timeout(_))
        )
    }

    /// Human-readable message suitable for inline display.
    pub fn user_message(&self) -> String {
        match self {
            FolioError::Invoke(InvokeError::ConnectionFailed(_)) => {
                "Cannot reach the folio backend. Is it running?".to_string()
            }
            FolioError::Invoke(InvokeError::Timeout(_)) => {
                "The backend took too long to respond.".to_string()
            }
            FolioError::Invoke(InvokeError::Backend { message, .. }) => message.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        let err: FolioError = InvokeError::ConnectionFailed("refused".to_string()).into();
        assert!(err.is_transient());

        let err: FolioError = InvokeError::Backend {
            status: 422,
            message: "title is required".to_string(),
        }
        .into();
        assert!(!err.is_transient());
    }

    #[test]
    fn test_backend_message_passes_through() {
        let err: FolioError = InvokeError::Backend {
            status: 404,
            message: "book not found".to_string(),
        }
        .into();
        assert_eq!(err.user_message(), "book not found");
    }

    #[test]
    fn test_connection_failure_is_rephrased() {
        let err: FolioError = InvokeError::ConnectionFailed("tcp connect".to_string()).into();
        assert_eq!(
            err.user_message(),
            "Cannot reach the folio backend. Is it running?"
        );
    }
}
