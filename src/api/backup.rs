//! Backup registry commands.
//!
//! The backend keeps a registry of exported backup files; the client only
//! registers exports and asks when the last one happened.

use chrono::{DateTime, Utc};
use serde_json::json;

use super::to_args;
use crate::error::FolioResult;
use crate::models::BackupMetadata;
use crate::traits::{invoke_typed, CommandBridge};

/// Register an exported backup file. Returns the registry row id.
pub async fn register_backup<B: CommandBridge + ?Sized>(
    bridge: &B,
    file_path: &str,
    file_name: &str,
    backup_type: &str,
    metadata: Option<&BackupMetadata>,
) -> FolioResult<i64> {
    let mut args = json!({
        "file_path": file_path,
        "file_name": file_name,
        "backup_type": backup_type,
    });
    if let Some(meta) = metadata {
        args["metadata"] = to_args(meta)?;
    }
    Ok(invoke_typed(bridge, "register_backup", args).await?)
}

/// When the last backup of the given type (or any type) was registered.
pub async fn get_last_backup_date<B: CommandBridge + ?Sized>(
    bridge: &B,
    backup_type: Option<&str>,
) -> FolioResult<Option<DateTime<Utc>>> {
    let args = match backup_type {
        Some(kind) => json!({ "backup_type": kind }),
        None => json!({}),
    };
    Ok(invoke_typed(bridge, "get_last_backup_date", args).await?)
}

/// Validate a backup export before restoring it. Returns the backend's
/// verdict message.
pub async fn validate_backup_json<B: CommandBridge + ?Sized>(
    bridge: &B,
    json_string: &str,
) -> FolioResult<String> {
    Ok(invoke_typed(bridge, "validate_backup_json", json!({ "json_string": json_string })).await?)
}
