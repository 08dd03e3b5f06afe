//! Statistics and book summary commands.

use serde_json::json;

use crate::error::FolioResult;
use crate::models::{BookSummary, Statistics};
use crate::traits::{invoke_typed, CommandBridge};

pub async fn get_statistics<B: CommandBridge + ?Sized>(bridge: &B) -> FolioResult<Statistics> {
    Ok(invoke_typed(bridge, "get_statistics", json!({})).await?)
}

/// Ask the backend to assemble a summary of a book's notes and highlights.
pub async fn generate_book_summary<B: CommandBridge + ?Sized>(
    bridge: &B,
    book_id: i64,
) -> FolioResult<BookSummary> {
    Ok(invoke_typed(bridge, "generate_book_summary", json!({ "book_id": book_id })).await?)
}
