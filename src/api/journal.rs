//! Journal entry commands.

use serde_json::json;

use super::to_args;
use crate::error::FolioResult;
use crate::models::{
    CreateJournalEntryCommand, JournalEntry, JournalQuery, UpdateJournalEntryCommand,
};
use crate::traits::{invoke_typed, CommandBridge};

pub async fn list_journal_entries<B: CommandBridge + ?Sized>(
    bridge: &B,
    query: &JournalQuery,
) -> FolioResult<Vec<JournalEntry>> {
    Ok(invoke_typed(bridge, "list_journal_entries", to_args(query)?).await?)
}

pub async fn get_journal_entry<B: CommandBridge + ?Sized>(
    bridge: &B,
    id: i64,
) -> FolioResult<JournalEntry> {
    Ok(invoke_typed(bridge, "get_journal_entry", json!({ "id": id })).await?)
}

pub async fn create_journal_entry<B: CommandBridge + ?Sized>(
    bridge: &B,
    command: &CreateJournalEntryCommand,
) -> FolioResult<JournalEntry> {
    Ok(invoke_typed(
        bridge,
        "create_journal_entry",
        json!({ "command": to_args(command)? }),
    )
    .await?)
}

pub async fn update_journal_entry<B: CommandBridge + ?Sized>(
    bridge: &B,
    command: &UpdateJournalEntryCommand,
) -> FolioResult<JournalEntry> {
    Ok(invoke_typed(
        bridge,
        "update_journal_entry",
        json!({ "command": to_args(command)? }),
    )
    .await?)
}

pub async fn delete_journal_entry<B: CommandBridge + ?Sized>(
    bridge: &B,
    id: i64,
) -> FolioResult<()> {
    Ok(invoke_typed(bridge, "delete_journal_entry", json!({ "id": id })).await?)
}
