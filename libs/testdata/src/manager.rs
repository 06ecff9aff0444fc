//! Created-vs-observed bookkeeping and one-shot teardown.

use std::collections::HashMap;

use chrono::Utc;
use tracing::{error, info, warn};

use posts_api::{
    ApiError, Config, CreateService, DeleteService, HttpClient, PostCreatePayload, ReadService,
};

use crate::error::DataError;
use crate::extractor::ApiDataExtractor;
use crate::generate;

/// A record tracked by the manager: either created by the test run or
/// observed from the live API.
///
/// `created_by_framework` decides cleanup eligibility. It is set when the
/// record enters the managed set and never changes afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagedPost {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub user_id: i64,
    pub created_by_framework: bool,
}

/// Tally returned by [`TestDataManager::cleanup_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanupReport {
    pub success: usize,
    pub failed: usize,
}

/// Snapshot counts of the managed set; `total == created + real` after
/// every operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub created: usize,
    pub real: usize,
}

/// Tracks the entities a test run touches and deletes only the ones the
/// run created.
///
/// One instance per test run; workers running in separate processes each
/// build their own.
#[derive(Debug)]
pub struct TestDataManager {
    extractor: ApiDataExtractor,
    create: CreateService,
    delete: DeleteService,
    managed: HashMap<String, ManagedPost>,
    loaded: bool,
}

impl TestDataManager {
    /// Build a manager and its services against the configured endpoint.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = HttpClient::new()?;
        Ok(Self {
            extractor: ApiDataExtractor::new(ReadService::new(client.clone(), config)),
            create: CreateService::new(client.clone(), config),
            delete: DeleteService::new(client, config),
            managed: HashMap::new(),
            loaded: false,
        })
    }

    /// Load live API data. The first call fetches; later calls are no-ops.
    pub async fn initialize(&mut self) -> Result<(), DataError> {
        if self.loaded {
            info!("api data already loaded, skipping initialization");
            return Ok(());
        }

        self.extractor.extract().await?;
        self.loaded = true;
        info!("test data manager initialized");
        Ok(())
    }

    /// The underlying extractor, for read-only lookups.
    pub fn extractor(&self) -> &ApiDataExtractor {
        &self.extractor
    }

    fn ensure_loaded(&self) -> Result<(), DataError> {
        if self.loaded {
            Ok(())
        } else {
            Err(DataError::NotInitialized)
        }
    }

    /// Track one random live post as an observed record. Never touches the
    /// remote resource.
    pub fn real_post(&mut self) -> Result<ManagedPost, DataError> {
        self.ensure_loaded()?;

        let source = self.extractor.random()?.clone();
        let post = ManagedPost {
            id: source.post_id,
            title: source.title,
            body: source.body,
            user_id: source.user_id,
            created_by_framework: false,
        };

        self.managed.insert(format!("real_{}", post.id), post.clone());
        info!(id = post.id, user_id = post.user_id, "tracking observed post");
        Ok(post)
    }

    /// Track a specific live post as an observed record, if the collection
    /// has it.
    pub fn real_post_by_id(&mut self, post_id: i64) -> Result<Option<ManagedPost>, DataError> {
        self.ensure_loaded()?;

        let Some(source) = self.extractor.by_id(post_id) else {
            return Ok(None);
        };
        let post = ManagedPost {
            id: source.post_id,
            title: source.title.clone(),
            body: source.body.clone(),
            user_id: source.user_id,
            created_by_framework: false,
        };

        self.managed.insert(format!("real_{}", post.id), post.clone());
        Ok(Some(post))
    }

    /// Create a post through the service layer with an owner id drawn from
    /// the extracted data, and track it for cleanup.
    pub async fn create_managed_post(
        &mut self,
        title: Option<&str>,
        body: Option<&str>,
    ) -> Result<ManagedPost, DataError> {
        self.ensure_loaded()?;

        let user_id = self.extractor.random_user_id()?;
        let key = generate::test_key();

        let payload = PostCreatePayload {
            title: title
                .map(str::to_owned)
                .unwrap_or_else(|| format!("Framework Test Post - {key}")),
            body: body.map(str::to_owned).unwrap_or_else(|| {
                format!("Test post created by framework at {}", Utc::now().to_rfc3339())
            }),
            user_id,
        };

        let reply = match self.create.create(&payload).await {
            Ok(reply) => reply,
            Err(ApiError::UnexpectedStatus { actual, .. }) => {
                return Err(DataError::CreateFailed { status: actual })
            }
            Err(err) => return Err(err.into()),
        };

        let post = ManagedPost {
            id: reply.data.id,
            title: reply.data.title,
            body: reply.data.body,
            user_id: reply.data.user_id,
            created_by_framework: true,
        };

        self.managed.insert(key.clone(), post.clone());
        info!(id = post.id, key = %key, "created managed post");
        Ok(post)
    }

    /// Lookup by synthesized key.
    pub fn managed_post(&self, key: &str) -> Option<&ManagedPost> {
        self.managed.get(key)
    }

    /// Linear scan over the managed set by post id.
    pub fn find_by_id(&self, id: i64) -> Option<&ManagedPost> {
        self.managed.values().find(|post| post.id == id)
    }

    /// Snapshot of every managed record.
    pub fn all(&self) -> Vec<ManagedPost> {
        self.managed.values().cloned().collect()
    }

    /// Snapshot of the records this run created.
    pub fn created(&self) -> Vec<ManagedPost> {
        self.managed
            .values()
            .filter(|post| post.created_by_framework)
            .cloned()
            .collect()
    }

    /// Drop a record from tracking without deleting it remotely.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.managed.remove(key) {
            Some(post) => {
                info!(id = post.id, key, "removed managed post from tracking");
                true
            }
            None => {
                warn!(key, "no managed post to remove");
                false
            }
        }
    }

    /// Delete every record this run created. Observed records are never
    /// deleted. A failed delete is counted and the entry stays tracked for
    /// a later retry; the batch keeps going.
    pub async fn cleanup_all(&mut self) -> CleanupReport {
        let targets: Vec<(String, i64)> = self
            .managed
            .iter()
            .filter(|(_, post)| post.created_by_framework)
            .map(|(key, post)| (key.clone(), post.id))
            .collect();

        if targets.is_empty() {
            info!("no framework-created posts to clean up");
            return CleanupReport {
                success: 0,
                failed: 0,
            };
        }

        info!(count = targets.len(), "starting cleanup of framework-created posts");

        let mut success = 0;
        let mut failed = 0;

        for (key, id) in targets {
            match self.delete.delete(id).await {
                Ok(_) => {
                    self.managed.remove(&key);
                    success += 1;
                    info!(id, key = %key, "cleaned up managed post");
                }
                Err(err) => {
                    failed += 1;
                    error!(id, error = %err, "failed to clean up managed post");
                }
            }
        }

        info!(success, failed, "cleanup completed");
        CleanupReport { success, failed }
    }

    /// Number of tracked records.
    pub fn count(&self) -> usize {
        self.managed.len()
    }

    /// Drop all tracking without deleting anything remotely.
    pub fn clear(&mut self) {
        self.managed.clear();
        info!("cleared all managed posts from tracking");
    }

    /// Counts of the managed set.
    pub fn summary(&self) -> Summary {
        let total = self.managed.len();
        let created = self
            .managed
            .values()
            .filter(|post| post.created_by_framework)
            .count();
        Summary {
            total,
            created,
            real: total - created,
        }
    }
}
