//! Reading-cycle commands.

use serde_json::json;

use super::to_args;
use crate::error::FolioResult;
use crate::models::{CreateReadingCommand, Reading};
use crate::traits::{invoke_typed, CommandBridge};

/// All read-cycles of a book, oldest first.
pub async fn list_readings<B: CommandBridge + ?Sized>(
    bridge: &B,
    book_id: i64,
) -> FolioResult<Vec<Reading>> {
    Ok(invoke_typed(bridge, "list_readings", json!({ "book_id": book_id })).await?)
}

/// The in-progress cycle for a book, if any.
pub async fn get_current_reading<B: CommandBridge + ?Sized>(
    bridge: &B,
    book_id: i64,
) -> FolioResult<Option<Reading>> {
    Ok(invoke_typed(bridge, "get_current_reading", json!({ "book_id": book_id })).await?)
}

pub async fn get_reading<B: CommandBridge + ?Sized>(bridge: &B, id: i64) -> FolioResult<Reading> {
    Ok(invoke_typed(bridge, "get_reading", json!({ "id": id })).await?)
}

/// Start the next read-cycle for a book.
pub async fn create_reading<B: CommandBridge + ?Sized>(
    bridge: &B,
    command: &CreateReadingCommand,
) -> FolioResult<Reading> {
    Ok(invoke_typed(bridge, "create_reading", json!({ "command": to_args(command)? })).await?)
}
