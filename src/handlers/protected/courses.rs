use axum::{
    extract::{Extension, State},
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::auth::Claims;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;
use crate::validation::validate_new_course;

/// POST /courses - Validate the body and insert one course
///
/// A missing or unparseable body is validated as an empty object.
pub async fn courses_create(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    payload: Option<Json<Value>>,
) -> ApiResult<Value> {
    let body = payload.map(|Json(v)| v).unwrap_or(Value::Null);
    let course = validate_new_course(&body)?;

    let row = state
        .store
        .insert_course(&course)
        .await
        .map_err(ApiError::insert_failed)?;

    info!(
        "Course created by {}: {}",
        claims.subject().unwrap_or_else(|| "<anonymous>".to_string()),
        course.title
    );
    Ok(ApiResponse::created(row))
}
