//! Read operations: GET /posts and GET /posts/{id}.

use std::fmt::Display;

use reqwest::StatusCode;
use serde_json::Value;

use crate::client::HttpClient;
use crate::config::Config;
use crate::error::ApiError;
use crate::model::Post;
use crate::routes;

use super::{json_body, ServiceReply};

/// Read-side service for the posts resource.
#[derive(Debug, Clone)]
pub struct ReadService {
    client: HttpClient,
    base: String,
}

impl ReadService {
    pub fn new(client: HttpClient, config: &Config) -> Self {
        Self {
            client,
            base: config.base_endpoint().to_string(),
        }
    }

    /// GET /posts. The API answers 200 with the full collection.
    pub async fn all_posts(&self) -> Result<ServiceReply<Vec<Post>>, ApiError> {
        let response = self.client.get(&routes::read::all_posts(&self.base)).await?;
        let status = response.status();

        if status != StatusCode::OK {
            return Err(ApiError::unexpected_status(
                StatusCode::OK,
                status,
                "getting all posts",
            ));
        }

        let data = response.json().await?;
        Ok(ServiceReply { status, data })
    }

    /// GET /posts/{id}. No status assertion: depending on the id, negative
    /// tests expect anything from 200 to 500 here.
    pub async fn post_by_id(&self, id: impl Display) -> Result<ServiceReply<Value>, ApiError> {
        let response = self
            .client
            .get(&routes::read::post_by_id(&self.base, id))
            .await?;
        let status = response.status();
        let data = json_body(response).await?;
        Ok(ServiceReply { status, data })
    }
}
