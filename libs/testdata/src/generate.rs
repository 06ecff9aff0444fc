//! Unique test identifiers and payloads.

use chrono::Utc;
use rand::distr::{Alphanumeric, SampleString};
use rand::Rng;

use posts_api::PostCreatePayload;

/// Run-scoped unique key: millisecond timestamp plus a random suffix.
pub fn test_key() -> String {
    format!(
        "test_{}_{}",
        Utc::now().timestamp_millis(),
        random_string(9).to_lowercase()
    )
}

/// Random alphanumeric string.
pub fn random_string(len: usize) -> String {
    Alphanumeric.sample_string(&mut rand::rng(), len)
}

/// Random owner id in the live data's 1..=10 range.
pub fn random_user_id() -> i64 {
    rand::rng().random_range(1..=10)
}

/// Create payload with a unique title and body.
pub fn unique_payload(prefix: &str) -> PostCreatePayload {
    let key = test_key();
    PostCreatePayload {
        title: format!("{prefix} Post - {key}"),
        body: format!(
            "Test post created at {} with key {key}",
            Utc::now().to_rfc3339()
        ),
        user_id: random_user_id(),
    }
}
