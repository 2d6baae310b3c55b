//! In-memory saved-idea repository
//!
//! Stands in for persistence in this proof of concept: single process,
//! insertion-ordered, contents lost on restart by design. Uses RwLock for
//! concurrent read access with rare writes.

use std::sync::Arc;

use nbi_core::IdeaWithScore;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Store for ideas the user marked as favorites
#[derive(Clone, Default)]
pub struct SavedIdeaRepository {
    inner: Arc<RwLock<Vec<IdeaWithScore>>>,
}

impl SavedIdeaRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace by idea id.
    ///
    /// Replacing keeps the entry's original insertion position.
    pub async fn save(&self, entry: IdeaWithScore) {
        let mut items = self.inner.write().await;
        match items.iter_mut().find(|e| e.idea.id == entry.idea.id) {
            Some(existing) => *existing = entry,
            None => items.push(entry),
        }
    }

    /// Look up a saved idea by id
    pub async fn find_by_id(&self, id: Uuid) -> Option<IdeaWithScore> {
        self.inner
            .read()
            .await
            .iter()
            .find(|e| e.idea.id == id)
            .cloned()
    }

    /// All saved ideas in insertion order, up to `limit`
    pub async fn find_all(&self, limit: usize) -> Vec<IdeaWithScore> {
        self.inner.read().await.iter().take(limit).cloned().collect()
    }

    /// Remove a saved idea; returns whether anything was removed
    pub async fn remove(&self, id: Uuid) -> bool {
        let mut items = self.inner.write().await;
        let before = items.len();
        items.retain(|e| e.idea.id != id);
        items.len() != before
    }

    /// Number of saved ideas
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Whether the store is empty
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
