//! Collection cache over the read service.
//!
//! Fetches the entire posts collection once per test run and serves random
//! and deterministic lookups from memory. Re-fetching replaces the cache
//! wholesale; nothing is merged.

use std::collections::HashSet;

use rand::seq::IndexedRandom;
use tracing::{info, warn};

use posts_api::{ApiError, Post, ReadService};

use crate::error::DataError;

/// Read-only snapshot of a remote post; immutable once cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPost {
    pub post_id: i64,
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

impl From<Post> for ExtractedPost {
    fn from(post: Post) -> Self {
        Self {
            post_id: post.id,
            user_id: post.user_id,
            title: post.title,
            body: post.body,
        }
    }
}

/// Fetch-once cache of the remote posts collection.
#[derive(Debug)]
pub struct ApiDataExtractor {
    read: ReadService,
    cache: Vec<ExtractedPost>,
}

impl ApiDataExtractor {
    pub fn new(read: ReadService) -> Self {
        Self {
            read,
            cache: Vec::new(),
        }
    }

    /// Fetch the full collection and replace the cache.
    pub async fn extract(&mut self) -> Result<&[ExtractedPost], DataError> {
        info!("extracting posts data from the live collection");

        let reply = match self.read.all_posts().await {
            Ok(reply) => reply,
            Err(ApiError::UnexpectedStatus { actual, .. }) => {
                return Err(DataError::Fetch { status: actual })
            }
            Err(err) => return Err(err.into()),
        };

        self.cache = reply.data.into_iter().map(ExtractedPost::from).collect();
        info!(count = self.cache.len(), "extracted posts data");
        Ok(&self.cache)
    }

    /// Uniformly random cached post.
    pub fn random(&self) -> Result<&ExtractedPost, DataError> {
        let post = self
            .cache
            .choose(&mut rand::rng())
            .ok_or(DataError::EmptyCache)?;
        info!(post_id = post.post_id, user_id = post.user_id, "selected random post");
        Ok(post)
    }

    /// Linear scan by post id; `None` when the id is not cached.
    pub fn by_id(&self, post_id: i64) -> Option<&ExtractedPost> {
        let found = self.cache.iter().find(|post| post.post_id == post_id);
        if found.is_none() {
            warn!(post_id, "post not found in cached data");
        }
        found
    }

    /// Distinct owner ids; order is not meaningful.
    pub fn unique_user_ids(&self) -> Vec<i64> {
        let ids: HashSet<i64> = self.cache.iter().map(|post| post.user_id).collect();
        ids.into_iter().collect()
    }

    /// All cached posts for an owner, cache order preserved.
    pub fn by_user_id(&self, user_id: i64) -> Vec<&ExtractedPost> {
        self.cache
            .iter()
            .filter(|post| post.user_id == user_id)
            .collect()
    }

    /// Random owner id from the cached collection.
    pub fn random_user_id(&self) -> Result<i64, DataError> {
        let ids = self.unique_user_ids();
        let user_id = ids
            .choose(&mut rand::rng())
            .copied()
            .ok_or(DataError::EmptyCache)?;
        info!(user_id, "selected random user id");
        Ok(user_id)
    }

    /// Drop the cache.
    pub fn clear(&mut self) {
        self.cache.clear();
        info!("cleared cached posts data");
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
