//! Collection commands, including book membership.

use serde_json::json;

use super::to_args;
use crate::error::FolioResult;
use crate::models::{
    AddBooksToCollectionCommand, Collection, CreateCollectionCommand, UpdateCollectionCommand,
};
use crate::traits::{invoke_typed, CommandBridge};

/// List collections; with a `book_id`, only those the book belongs to.
/// The per-book form is what the membership map is built from.
pub async fn list_collections<B: CommandBridge + ?Sized>(
    bridge: &B,
    book_id: Option<i64>,
) -> FolioResult<Vec<Collection>> {
    let args = match book_id {
        Some(id) => json!({ "book_id": id }),
        None => json!({}),
    };
    Ok(invoke_typed(bridge, "list_collections", args).await?)
}

pub async fn create_collection<B: CommandBridge + ?Sized>(
    bridge: &B,
    command: &CreateCollectionCommand,
) -> FolioResult<Collection> {
    Ok(invoke_typed(bridge, "create_collection", json!({ "command": to_args(command)? })).await?)
}

pub async fn update_collection<B: CommandBridge + ?Sized>(
    bridge: &B,
    command: &UpdateCollectionCommand,
) -> FolioResult<Collection> {
    Ok(invoke_typed(bridge, "update_collection", json!({ "command": to_args(command)? })).await?)
}

pub async fn delete_collection<B: CommandBridge + ?Sized>(bridge: &B, id: i64) -> FolioResult<()> {
    Ok(invoke_typed(bridge, "delete_collection", json!({ "id": id })).await?)
}

pub async fn add_books_to_collection<B: CommandBridge + ?Sized>(
    bridge: &B,
    command: &AddBooksToCollectionCommand,
) -> FolioResult<()> {
    Ok(invoke_typed(
        bridge,
        "add_books_to_collection",
        json!({ "command": to_args(command)? }),
    )
    .await?)
}

pub async fn remove_book_from_collection<B: CommandBridge + ?Sized>(
    bridge: &B,
    book_id: i64,
    collection_id: i64,
) -> FolioResult<()> {
    Ok(invoke_typed(
        bridge,
        "remove_book_from_collection",
        json!({ "book_id": book_id, "collection_id": collection_id }),
    )
    .await?)
}
