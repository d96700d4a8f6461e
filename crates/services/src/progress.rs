use std::sync::{Arc, Mutex, PoisonError};

use samskrita_core::Catalog;
use samskrita_core::model::{CompletedTopics, TopicId};
use storage::repository::KeyValueStore;
use tokio::sync::Mutex as AsyncMutex;
use tracing::{info, warn};

use crate::error::ProgressError;

/// Storage key holding the JSON array of completed topic ids.
pub const PROGRESS_KEY: &str = "samskrita.completed_topics";

/// Completed-topic set backed by a key-value store.
#[derive(Clone)]
pub struct ProgressTracker {
    store: Arc<dyn KeyValueStore>,
    catalog: Catalog,
    completed: Arc<Mutex<CompletedTopics>>,
    // Held across the store write so overlapping completions persist in turn.
    write_lock: Arc<AsyncMutex<()>>,
}

impl ProgressTracker {
    /// Read persisted progress once.
    ///
    /// Missing, unreadable or malformed data yields an empty set. Ids outside
    /// the catalog are dropped.
    pub async fn load(store: Arc<dyn KeyValueStore>, catalog: Catalog) -> Self {
        let mut completed = match store.get(PROGRESS_KEY).await {
            Ok(Some(raw)) => decode(&raw),
            Ok(None) => CompletedTopics::new(),
            Err(err) => {
                warn!(error = %err, "could not read progress; starting empty");
                CompletedTopics::new()
            }
        };
        completed.retain(|id| catalog.contains(id));

        Self {
            store,
            catalog,
            completed: Arc::new(Mutex::new(completed)),
            write_lock: Arc::new(AsyncMutex::new(())),
        }
    }

    fn snapshot(&self) -> CompletedTopics {
        self.completed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Record `id` as complete and persist the whole set.
    ///
    /// Returns whether the id was newly added. The in-memory set only changes
    /// once the write succeeds, and concurrent calls are serialized so the
    /// stored array always matches the live set.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::UnknownTopic` for ids outside the catalog and a
    /// storage or encoding error when persisting fails.
    pub async fn mark_complete(&self, id: TopicId) -> Result<bool, ProgressError> {
        if !self.catalog.contains(id) {
            return Err(ProgressError::UnknownTopic(id));
        }

        let _write = self.write_lock.lock().await;
        let mut updated = self.snapshot();
        if !updated.insert(id) {
            return Ok(false);
        }

        let ids: Vec<TopicId> = updated.iter().collect();
        let encoded = serde_json::to_string(&ids)?;
        self.store.set(PROGRESS_KEY, &encoded).await?;

        self.completed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id);
        info!(topic = %id, completed = ids.len(), "topic marked complete");
        Ok(true)
    }

    #[must_use]
    pub fn is_complete(&self, id: TopicId) -> bool {
        self.completed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(id)
    }

    #[must_use]
    pub fn completed(&self) -> CompletedTopics {
        self.snapshot()
    }

    /// Rounded share of catalog topics completed, 0 to 100.
    #[must_use]
    pub fn percentage(&self) -> u8 {
        self.snapshot().percentage_of(self.catalog.len())
    }

    #[must_use]
    pub fn catalog(&self) -> Catalog {
        self.catalog
    }
}

fn decode(raw: &str) -> CompletedTopics {
    match serde_json::from_str::<Vec<TopicId>>(raw) {
        Ok(ids) => ids.into_iter().collect(),
        Err(err) => {
            warn!(error = %err, "stored progress is malformed; starting empty");
            CompletedTopics::new()
        }
    }
}
