//! Create operation: POST /posts.

use reqwest::StatusCode;
use serde_json::Value;

use crate::client::HttpClient;
use crate::config::Config;
use crate::error::ApiError;
use crate::model::{Post, PostCreatePayload};
use crate::routes;

use super::{json_body, ServiceReply};

/// Create-side service for the posts resource.
#[derive(Debug, Clone)]
pub struct CreateService {
    client: HttpClient,
    base: String,
}

impl CreateService {
    pub fn new(client: HttpClient, config: &Config) -> Self {
        Self {
            client,
            base: config.base_endpoint().to_string(),
        }
    }

    /// POST /posts. The API answers 201 with the stored post.
    pub async fn create(&self, payload: &PostCreatePayload) -> Result<ServiceReply<Post>, ApiError> {
        let response = self
            .client
            .post(&routes::create::posts(&self.base), payload)
            .await?;
        let status = response.status();

        if status != StatusCode::CREATED {
            return Err(ApiError::unexpected_status(
                StatusCode::CREATED,
                status,
                "creating a post",
            ));
        }

        let data = response.json().await?;
        Ok(ServiceReply { status, data })
    }

    /// POST /posts with an arbitrary JSON body and no status assertion,
    /// for malformed-payload tests.
    pub async fn create_raw(&self, payload: &Value) -> Result<ServiceReply<Value>, ApiError> {
        let response = self
            .client
            .post(&routes::create::posts(&self.base), payload)
            .await?;
        let status = response.status();
        let data = json_body(response).await?;
        Ok(ServiceReply { status, data })
    }
}
