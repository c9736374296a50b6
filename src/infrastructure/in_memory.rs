use crate::domain::points::Points;
use crate::domain::ports::ScoreStore;
use crate::domain::receipt::ReceiptId;
use crate::error::{ReceiptError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for receipt scores.
///
/// Uses `Arc<RwLock<HashMap<ReceiptId, Points>>>` to allow shared concurrent access.
/// Contents live for the lifetime of the process only.
#[derive(Default, Clone)]
pub struct InMemoryScoreStore {
    scores: Arc<RwLock<HashMap<ReceiptId, Points>>>,
}

impl InMemoryScoreStore {
    /// Creates a new, empty in-memory score store.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.scores.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.scores.read().await.is_empty()
    }
}

#[async_trait]
impl ScoreStore for InMemoryScoreStore {
    async fn put(&self, id: ReceiptId, points: Points) -> Result<()> {
        let mut scores = self.scores.write().await;
        match scores.entry(id) {
            Entry::Occupied(entry) => Err(ReceiptError::DuplicateId(entry.key().to_string())),
            Entry::Vacant(entry) => {
                entry.insert(points);
                Ok(())
            }
        }
    }

    async fn get(&self, id: &ReceiptId) -> Result<Option<Points>> {
        let scores = self.scores.read().await;
        Ok(scores.get(id).copied())
    }
}
