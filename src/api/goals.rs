//! Goal commands.

use serde_json::json;

use super::to_args;
use crate::error::FolioResult;
use crate::models::{CreateGoalCommand, Goal};
use crate::traits::{invoke_typed, CommandBridge};

/// List goals. Inactive goals are only included on request.
pub async fn list_goals<B: CommandBridge + ?Sized>(
    bridge: &B,
    include_inactive: bool,
) -> FolioResult<Vec<Goal>> {
    let filters = if include_inactive {
        json!({ "include_inactive": true })
    } else {
        json!({})
    };
    Ok(invoke_typed(bridge, "list_goals", json!({ "filters": filters })).await?)
}

pub async fn get_goal<B: CommandBridge + ?Sized>(bridge: &B, id: i64) -> FolioResult<Goal> {
    Ok(invoke_typed(bridge, "get_goal", json!({ "id": id })).await?)
}

pub async fn create_goal<B: CommandBridge + ?Sized>(
    bridge: &B,
    command: &CreateGoalCommand,
) -> FolioResult<Goal> {
    Ok(invoke_typed(bridge, "create_goal", json!({ "command": to_args(command)? })).await?)
}

pub async fn delete_goal<B: CommandBridge + ?Sized>(bridge: &B, id: i64) -> FolioResult<()> {
    Ok(invoke_typed(bridge, "delete_goal", json!({ "id": id })).await?)
}
