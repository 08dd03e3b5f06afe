//! Note and highlight commands.

use serde_json::json;

use super::to_args;
use crate::error::FolioResult;
use crate::models::{CreateNoteCommand, Note, NoteQuery};
use crate::traits::{invoke_typed, CommandBridge};

pub async fn list_notes<B: CommandBridge + ?Sized>(
    bridge: &B,
    query: &NoteQuery,
) -> FolioResult<Vec<Note>> {
    Ok(invoke_typed(bridge, "list_notes", to_args(query)?).await?)
}

pub async fn get_note<B: CommandBridge + ?Sized>(bridge: &B, id: i64) -> FolioResult<Note> {
    Ok(invoke_typed(bridge, "get_note", json!({ "id": id })).await?)
}

pub async fn create_note<B: CommandBridge + ?Sized>(
    bridge: &B,
    command: &CreateNoteCommand,
) -> FolioResult<Note> {
    Ok(invoke_typed(bridge, "create_note", json!({ "command": to_args(command)? })).await?)
}

pub async fn delete_note<B: CommandBridge + ?Sized>(bridge: &B, id: i64) -> FolioResult<()> {
    Ok(invoke_typed(bridge, "delete_note", json!({ "id": id })).await?)
}
