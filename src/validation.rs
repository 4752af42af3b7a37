//! Field checks for the course-creation body.
//!
//! Rules run in a fixed order and the first failure is the only one
//! reported: presence, then price, then duration.

use serde_json::{Map, Value};

use crate::database::NewCourse;
use crate::error::ApiError;

pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";
pub const PRICE_NOT_POSITIVE: &str = "Price must be a positive number";
pub const DURATION_INVALID: &str = "Duration must be a valid string";

const REQUIRED_FIELDS: [&str; 4] = ["title", "description", "price", "duration"];

/// Validate a POST /courses body and extract the new course.
///
/// Anything that is not a JSON object counts as an empty body.
pub fn validate_new_course(body: &Value) -> Result<NewCourse, ApiError> {
    let empty = Map::new();
    let fields = body.as_object().unwrap_or(&empty);

    let present = REQUIRED_FIELDS
        .iter()
        .all(|name| fields.get(*name).is_some_and(|v| !v.is_null()));
    if !present {
        return Err(ApiError::bad_request(ALL_FIELDS_REQUIRED));
    }
    let (Some(title), Some(description)) = (
        non_empty_str(fields.get("title")),
        non_empty_str(fields.get("description")),
    ) else {
        return Err(ApiError::bad_request(ALL_FIELDS_REQUIRED));
    };

    let price = fields
        .get("price")
        .and_then(Value::as_f64)
        .filter(|p| *p > 0.0)
        .ok_or_else(|| ApiError::bad_request(PRICE_NOT_POSITIVE))?;

    let duration = fields
        .get("duration")
        .and_then(Value::as_str)
        .filter(|d| !d.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request(DURATION_INVALID))?;

    Ok(NewCourse {
        title: title.to_string(),
        description: description.to_string(),
        price,
        duration: duration.to_string(),
    })
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}
