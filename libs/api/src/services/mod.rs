//! Service wrappers over the posts endpoints.
//!
//! Each service pairs the URL builders with the HTTP client and asserts
//! the status code the API defines for the operation. `*_raw`
//! variants skip the assertion so negative-path tests can pin down
//! whatever code their API variant answers.

mod create;
mod delete;
mod read;
mod update;

pub use create::CreateService;
pub use delete::{DeleteOutcome, DeleteService};
pub use read::ReadService;
pub use update::UpdateService;

use reqwest::StatusCode;
use serde_json::Value;

use crate::error::ApiError;

/// Parsed response body plus the observed status.
#[derive(Debug, Clone)]
pub struct ServiceReply<T> {
    pub status: StatusCode,
    pub data: T,
}

/// Read a response body as JSON, treating an empty body as `{}`.
pub(crate) async fn json_body(response: reqwest::Response) -> Result<Value, ApiError> {
    let text = response.text().await?;
    if text.trim().is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    Ok(serde_json::from_str(&text)?)
}
