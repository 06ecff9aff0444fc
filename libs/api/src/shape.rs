//! Ad hoc response shape checks.
//!
//! Fallible checks rather than panicking asserts, so they can gate service
//! results as well as test expectations.

use serde_json::Value;

use crate::error::ApiError;
use crate::model::{Post, PostCreatePayload, PostUpdatePayload};

/// Check that a JSON value has the id/title/body/userId shape of a post.
pub fn validate_post_shape(value: &Value) -> Result<(), ApiError> {
    let fields: [(&str, fn(&Value) -> bool); 4] = [
        ("id", Value::is_i64),
        ("title", Value::is_string),
        ("body", Value::is_string),
        ("userId", Value::is_i64),
    ];

    for (name, type_ok) in fields {
        match value.get(name) {
            None => return Err(ApiError::Shape(format!("missing field `{name}`"))),
            Some(field) if !type_ok(field) => {
                return Err(ApiError::Shape(format!("field `{name}` has the wrong type")))
            }
            Some(_) => {}
        }
    }

    Ok(())
}

/// Check that a created post echoes the payload and carries a fresh id.
pub fn validate_created_post(post: &Post, payload: &PostCreatePayload) -> Result<(), ApiError> {
    if post.id <= 0 {
        return Err(ApiError::Shape(format!(
            "created post id must be positive, got {}",
            post.id
        )));
    }
    if post.title != payload.title {
        return Err(ApiError::Shape(
            "created post title does not match the payload".to_string(),
        ));
    }
    if post.body != payload.body {
        return Err(ApiError::Shape(
            "created post body does not match the payload".to_string(),
        ));
    }
    if post.user_id != payload.user_id {
        return Err(ApiError::Shape(
            "created post owner does not match the payload".to_string(),
        ));
    }

    Ok(())
}

/// Check that an updated post reflects every field the payload set.
pub fn validate_updated_post(value: &Value, changes: &PostUpdatePayload) -> Result<(), ApiError> {
    if value.get("id").is_none() {
        return Err(ApiError::Shape("updated post is missing `id`".to_string()));
    }

    if let Some(title) = &changes.title {
        if value.get("title").and_then(Value::as_str) != Some(title) {
            return Err(ApiError::Shape(
                "updated post title does not match the payload".to_string(),
            ));
        }
    }
    if let Some(body) = &changes.body {
        if value.get("body").and_then(Value::as_str) != Some(body) {
            return Err(ApiError::Shape(
                "updated post body does not match the payload".to_string(),
            ));
        }
    }
    if let Some(user_id) = changes.user_id {
        if value.get("userId").and_then(Value::as_i64) != Some(user_id) {
            return Err(ApiError::Shape(
                "updated post owner does not match the payload".to_string(),
            ));
        }
    }

    Ok(())
}
