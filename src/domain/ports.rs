use super::points::Points;
use super::receipt::ReceiptId;
use crate::error::Result;
use async_trait::async_trait;

/// Storage for computed scores, keyed by receipt id.
///
/// Records are write-once: `put` must refuse an id that is already stored.
#[async_trait]
pub trait ScoreStore: Send + Sync {
    async fn put(&self, id: ReceiptId, points: Points) -> Result<()>;
    async fn get(&self, id: &ReceiptId) -> Result<Option<Points>>;
}

/// Source of fresh receipt identifiers.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> ReceiptId;
}

pub type ScoreStoreBox = Box<dyn ScoreStore>;
pub type IdGeneratorBox = Box<dyn IdGenerator>;
