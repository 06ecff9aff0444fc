//! HTTP client wrapper.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Response;
use serde::Serialize;

use crate::error::ApiError;

/// Thin wrapper over [`reqwest::Client`] issuing plain JSON requests to
/// arbitrary URLs.
///
/// Status handling is left to the caller; negative-path tests inspect
/// non-success responses directly.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a client with JSON default headers.
    pub fn new() -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }

    pub async fn get(&self, url: &str) -> Result<Response, ApiError> {
        Ok(self.client.get(url).send().await?)
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<Response, ApiError> {
        Ok(self.client.post(url).json(body).send().await?)
    }

    pub async fn put<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<Response, ApiError> {
        Ok(self.client.put(url).json(body).send().await?)
    }

    pub async fn patch<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<Response, ApiError> {
        Ok(self.client.patch(url).json(body).send().await?)
    }

    pub async fn delete(&self, url: &str) -> Result<Response, ApiError> {
        Ok(self.client.delete(url).send().await?)
    }
}
