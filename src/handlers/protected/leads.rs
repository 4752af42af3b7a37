use axum::extract::State;
use serde_json::Value;

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /leads - List every lead row, shape defined by the table
pub async fn leads_list(State(state): State<AppState>) -> ApiResult<Vec<Value>> {
    let rows = state
        .store
        .list_leads()
        .await
        .map_err(ApiError::query_failed)?;

    Ok(ApiResponse::success(rows))
}
