//! Book commands.

use serde_json::json;

use super::to_args;
use crate::error::FolioResult;
use crate::models::{Book, BookQuery, CreateBookCommand, UpdateBookCommand};
use crate::traits::{invoke_typed, CommandBridge};

/// List books matching the server-side filters.
///
/// The `filters` envelope is omitted entirely when no filter is set,
/// matching the backend's "no filters means everything" contract.
pub async fn list_books<B: CommandBridge + ?Sized>(
    bridge: &B,
    query: &BookQuery,
) -> FolioResult<Vec<Book>> {
    let args = if *query == BookQuery::default() {
        json!({})
    } else {
        json!({ "filters": to_args(query)? })
    };
    Ok(invoke_typed(bridge, "list_books", args).await?)
}

pub async fn get_book<B: CommandBridge + ?Sized>(bridge: &B, id: i64) -> FolioResult<Book> {
    Ok(invoke_typed(bridge, "get_book", json!({ "id": id })).await?)
}

pub async fn create_book<B: CommandBridge + ?Sized>(
    bridge: &B,
    command: &CreateBookCommand,
) -> FolioResult<Book> {
    Ok(invoke_typed(bridge, "create_book", json!({ "command": to_args(command)? })).await?)
}

pub async fn update_book<B: CommandBridge + ?Sized>(
    bridge: &B,
    command: &UpdateBookCommand,
) -> FolioResult<Book> {
    Ok(invoke_typed(bridge, "update_book", json!({ "command": to_args(command)? })).await?)
}

pub async fn delete_book<B: CommandBridge + ?Sized>(bridge: &B, id: i64) -> FolioResult<()> {
    Ok(invoke_typed(bridge, "delete_book", json!({ "id": id })).await?)
}
