//! Delete operation: DELETE /posts/{id}.

use reqwest::StatusCode;

use crate::client::HttpClient;
use crate::config::Config;
use crate::error::ApiError;
use crate::routes;

/// Result of a delete call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub status: StatusCode,
    pub deleted_id: i64,
}

/// Delete-side service for the posts resource.
#[derive(Debug, Clone)]
pub struct DeleteService {
    client: HttpClient,
    base: String,
}

impl DeleteService {
    pub fn new(client: HttpClient, config: &Config) -> Self {
        Self {
            client,
            base: config.base_endpoint().to_string(),
        }
    }

    /// DELETE /posts/{id}. The API answers 200 for a delete.
    pub async fn delete(&self, id: i64) -> Result<DeleteOutcome, ApiError> {
        self.delete_expecting(id, StatusCode::OK).await
    }

    /// DELETE /posts/{id} with a per-call expected status. API deployments
    /// disagree on what a delete of an unknown id answers, so the
    /// expectation is call-site configuration rather than a fixed contract.
    pub async fn delete_expecting(
        &self,
        id: i64,
        expected: StatusCode,
    ) -> Result<DeleteOutcome, ApiError> {
        let response = self
            .client
            .delete(&routes::delete::post_by_id(&self.base, id))
            .await?;
        let status = response.status();

        if status != expected {
            return Err(ApiError::unexpected_status(
                expected,
                status,
                format!("deleting post {id}"),
            ));
        }

        Ok(DeleteOutcome {
            status,
            deleted_id: id,
        })
    }
}
