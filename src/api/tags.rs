//! Tag commands and book assignments.

use serde_json::json;

use super::to_args;
use crate::error::FolioResult;
use crate::models::{AddTagsToBookCommand, CreateTagCommand, Tag};
use crate::traits::{invoke_typed, CommandBridge};

/// List tags; with a `book_id`, only those assigned to the book.
pub async fn list_tags<B: CommandBridge + ?Sized>(
    bridge: &B,
    book_id: Option<i64>,
) -> FolioResult<Vec<Tag>> {
    let args = match book_id {
        Some(id) => json!({ "book_id": id }),
        None => json!({}),
    };
    Ok(invoke_typed(bridge, "list_tags", args).await?)
}

pub async fn create_tag<B: CommandBridge + ?Sized>(
    bridge: &B,
    command: &CreateTagCommand,
) -> FolioResult<Tag> {
    Ok(invoke_typed(bridge, "create_tag", json!({ "command": to_args(command)? })).await?)
}

pub async fn delete_tag<B: CommandBridge + ?Sized>(bridge: &B, id: i64) -> FolioResult<()> {
    Ok(invoke_typed(bridge, "delete_tag", json!({ "id": id })).await?)
}

pub async fn add_tags_to_book<B: CommandBridge + ?Sized>(
    bridge: &B,
    command: &AddTagsToBookCommand,
) -> FolioResult<()> {
    Ok(invoke_typed(bridge, "add_tags_to_book", json!({ "command": to_args(command)? })).await?)
}

pub async fn remove_tag_from_book<B: CommandBridge + ?Sized>(
    bridge: &B,
    book_id: i64,
    tag_id: i64,
) -> FolioResult<()> {
    Ok(invoke_typed(
        bridge,
        "remove_tag_from_book",
        json!({ "book_id": book_id, "tag_id": tag_id }),
    )
    .await?)
}
