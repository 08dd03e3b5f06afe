//! Typed command wrappers, one module per entity.
//!
//! Each wrapper forwards a typed command object over the
//! [`CommandBridge`](crate::traits::CommandBridge) and returns the
//! canonical record the backend produced. Wrappers are free async
//! functions generic over the bridge so tests can drive them through the
//! mock adapter.
//!
//! Every operation is all-or-nothing: no retries, no partial results.

pub mod agenda;
pub mod backup;
pub mod books;
pub mod collections;
pub mod goals;
pub mod journal;
pub mod notes;
pub mod readings;
pub mod sessions;
pub mod settings;
pub mod stats;
pub mod tags;

use serde_json::Value;

use crate::error::FolioResult;

/// Serialize an args payload, mapping failure into [`FolioError`].
pub(crate) fn to_args<T: serde::Serialize>(value: &T) -> FolioResult<Value> {
    Ok(serde_json::to_value(value)?)
}
