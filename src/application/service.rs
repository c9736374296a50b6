use crate::domain::points::{self, Points};
use crate::domain::ports::{IdGeneratorBox, ScoreStoreBox};
use crate::domain::receipt::{ReceiptId, ReceiptSubmission};
use crate::error::{ReceiptError, Result};
use tracing::{debug, info, warn};

/// Entry point for scoring receipts and looking scores up again.
///
/// `ReceiptService` owns the score store and the id generator. Each processed
/// receipt gets exactly one fresh id, and its score is fixed at submission time.
pub struct ReceiptService {
    store: ScoreStoreBox,
    ids: IdGeneratorBox,
}

impl ReceiptService {
    /// Creates a new `ReceiptService` instance.
    ///
    /// # Arguments
    ///
    /// * `store` - Where computed scores are kept.
    /// * `ids` - Generator for receipt identifiers.
    pub fn new(store: ScoreStoreBox, ids: IdGeneratorBox) -> Self {
        Self { store, ids }
    }

    /// Validates and scores a submitted receipt, returning its new id.
    pub async fn process(&self, submission: ReceiptSubmission) -> Result<ReceiptId> {
        let receipt = submission.validate().inspect_err(|e| {
            warn!(error = %e, "rejected receipt");
        })?;

        let breakdown = points::breakdown(&receipt);
        for (rule, awarded) in &breakdown {
            debug!(%rule, points = awarded.value(), "rule applied");
        }
        let total: Points = breakdown.into_iter().map(|(_, awarded)| awarded).sum();

        let id = self.ids.generate();
        self.store.put(id.clone(), total).await?;

        info!(id = %id, points = total.value(), retailer = %receipt.retailer, "receipt processed");
        Ok(id)
    }

    /// Returns the points stored for `id`.
    pub async fn points(&self, id: &ReceiptId) -> Result<Points> {
        match self.store.get(id).await? {
            Some(points) => Ok(points),
            None => {
                warn!(id = %id, "unknown receipt id");
                Err(ReceiptError::NotFound("Receipt not found".to_string()))
            }
        }
    }
}
