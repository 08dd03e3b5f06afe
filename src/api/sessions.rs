//! Session commands.

use serde_json::json;

use super::to_args;
use crate::error::FolioResult;
use crate::models::{CreateSessionCommand, Session, SessionQuery, UpdateSessionCommand};
use crate::traits::{invoke_typed, CommandBridge};

/// List sessions, optionally narrowed by book and/or date range. Filters
/// are passed flat, not wrapped in an envelope.
pub async fn list_sessions<B: CommandBridge + ?Sized>(
    bridge: &B,
    query: &SessionQuery,
) -> FolioResult<Vec<Session>> {
    Ok(invoke_typed(bridge, "list_sessions", to_args(query)?).await?)
}

pub async fn get_session<B: CommandBridge + ?Sized>(bridge: &B, id: i64) -> FolioResult<Session> {
    Ok(invoke_typed(bridge, "get_session", json!({ "id": id })).await?)
}

pub async fn create_session<B: CommandBridge + ?Sized>(
    bridge: &B,
    command: &CreateSessionCommand,
) -> FolioResult<Session> {
    Ok(invoke_typed(bridge, "create_session", json!({ "command": to_args(command)? })).await?)
}

pub async fn update_session<B: CommandBridge + ?Sized>(
    bridge: &B,
    command: &UpdateSessionCommand,
) -> FolioResult<Session> {
    Ok(invoke_typed(bridge, "update_session", json!({ "command": to_args(command)? })).await?)
}

pub async fn delete_session<B: CommandBridge + ?Sized>(bridge: &B, id: i64) -> FolioResult<()> {
    Ok(invoke_typed(bridge, "delete_session", json!({ "id": id })).await?)
}
