//! Backend-synced settings commands.

use serde_json::json;

use crate::error::FolioResult;
use crate::models::Setting;
use crate::traits::{invoke_typed, CommandBridge};

pub async fn get_all_settings<B: CommandBridge + ?Sized>(bridge: &B) -> FolioResult<Vec<Setting>> {
    Ok(invoke_typed(bridge, "get_all_settings", json!({})).await?)
}

pub async fn get_setting<B: CommandBridge + ?Sized>(
    bridge: &B,
    key: &str,
) -> FolioResult<Option<Setting>> {
    Ok(invoke_typed(bridge, "get_setting", json!({ "key": key })).await?)
}

pub async fn set_setting<B: CommandBridge + ?Sized>(
    bridge: &B,
    key: &str,
    value: &str,
) -> FolioResult<Setting> {
    Ok(invoke_typed(bridge, "set_setting", json!({ "key": key, "value": value })).await?)
}
