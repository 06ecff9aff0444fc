//! Update operations: PUT and PATCH /posts/{id}.

use std::fmt::Display;

use reqwest::StatusCode;
use serde_json::Value;

use crate::client::HttpClient;
use crate::config::Config;
use crate::error::ApiError;
use crate::model::{Post, PostFullUpdatePayload, PostUpdatePayload};
use crate::routes;

use super::{json_body, ServiceReply};

/// Update-side service for the posts resource.
#[derive(Debug, Clone)]
pub struct UpdateService {
    client: HttpClient,
    base: String,
}

impl UpdateService {
    pub fn new(client: HttpClient, config: &Config) -> Self {
        Self {
            client,
            base: config.base_endpoint().to_string(),
        }
    }

    /// PUT /posts/{id}; replaces the entire resource. The collaborator
    /// answers 200 with the stored post.
    pub async fn put(
        &self,
        id: i64,
        payload: &PostFullUpdatePayload,
    ) -> Result<ServiceReply<Post>, ApiError> {
        let response = self
            .client
            .put(&routes::update::put_post(&self.base, id), payload)
            .await?;
        let status = response.status();

        if status != StatusCode::OK {
            return Err(ApiError::unexpected_status(
                StatusCode::OK,
                status,
                format!("replacing post {id}"),
            ));
        }

        let data = response.json().await?;
        Ok(ServiceReply { status, data })
    }

    /// PATCH /posts/{id}; updates only the fields the payload sets. The
    /// API answers 200 with the merged post.
    pub async fn patch(
        &self,
        id: i64,
        payload: &PostUpdatePayload,
    ) -> Result<ServiceReply<Value>, ApiError> {
        let response = self
            .client
            .patch(&routes::update::patch_post(&self.base, id), payload)
            .await?;
        let status = response.status();

        if status != StatusCode::OK {
            return Err(ApiError::unexpected_status(
                StatusCode::OK,
                status,
                format!("patching post {id}"),
            ));
        }

        let data = json_body(response).await?;
        Ok(ServiceReply { status, data })
    }

    /// PUT with an arbitrary JSON body and no status assertion.
    pub async fn put_raw(
        &self,
        id: impl Display,
        payload: &Value,
    ) -> Result<ServiceReply<Value>, ApiError> {
        let response = self
            .client
            .put(&routes::update::put_post(&self.base, id), payload)
            .await?;
        let status = response.status();
        let data = json_body(response).await?;
        Ok(ServiceReply { status, data })
    }

    /// PATCH with an arbitrary JSON body and no status assertion.
    pub async fn patch_raw(
        &self,
        id: impl Display,
        payload: &Value,
    ) -> Result<ServiceReply<Value>, ApiError> {
        let response = self
            .client
            .patch(&routes::update::patch_post(&self.base, id), payload)
            .await?;
        let status = response.status();
        let data = json_body(response).await?;
        Ok(ServiceReply { status, data })
    }
}
