use axum::extract::State;
use serde_json::Value;

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /courses - List every course row
pub async fn courses_list(State(state): State<AppState>) -> ApiResult<Vec<Value>> {
    let rows = state
        .store
        .list_courses()
        .await
        .map_err(ApiError::query_failed)?;

    Ok(ApiResponse::success(rows))
}
