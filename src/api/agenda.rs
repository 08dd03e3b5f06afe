//! Agenda block commands.

use serde_json::json;

use super::to_args;
use crate::error::FolioResult;
use crate::models::{
    AgendaBlock, AgendaQuery, CreateAgendaBlockCommand, MarkBlockCompletedCommand,
    UpdateAgendaBlockCommand,
};
use crate::traits::{invoke_typed, CommandBridge};

pub async fn list_agenda_blocks<B: CommandBridge + ?Sized>(
    bridge: &B,
    query: &AgendaQuery,
) -> FolioResult<Vec<AgendaBlock>> {
    Ok(invoke_typed(bridge, "list_agenda_blocks", to_args(query)?).await?)
}

pub async fn get_agenda_block<B: CommandBridge + ?Sized>(
    bridge: &B,
    id: i64,
) -> FolioResult<AgendaBlock> {
    Ok(invoke_typed(bridge, "get_agenda_block", json!({ "id": id })).await?)
}

pub async fn create_agenda_block<B: CommandBridge + ?Sized>(
    bridge: &B,
    command: &CreateAgendaBlockCommand,
) -> FolioResult<AgendaBlock> {
    Ok(invoke_typed(bridge, "create_agenda_block", json!({ "command": to_args(command)? })).await?)
}

pub async fn update_agenda_block<B: CommandBridge + ?Sized>(
    bridge: &B,
    command: &UpdateAgendaBlockCommand,
) -> FolioResult<AgendaBlock> {
    Ok(invoke_typed(bridge, "update_agenda_block", json!({ "command": to_args(command)? })).await?)
}

pub async fn delete_agenda_block<B: CommandBridge + ?Sized>(bridge: &B, id: i64) -> FolioResult<()> {
    Ok(invoke_typed(bridge, "delete_agenda_block", json!({ "id": id })).await?)
}

/// Mark a block completed by linking the session that fulfilled it.
pub async fn mark_agenda_block_completed<B: CommandBridge + ?Sized>(
    bridge: &B,
    command: &MarkBlockCompletedCommand,
) -> FolioResult<AgendaBlock> {
    Ok(invoke_typed(
        bridge,
        "mark_agenda_block_completed",
        json!({ "command": to_args(command)? }),
    )
    .await?)
}
