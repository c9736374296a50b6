use crate::domain::receipt::{Receipt, ReceiptSubmission};
use crate::error::Result;
use std::io::Read;

/// Reads a single receipt document from a JSON source.
///
/// The document uses the same shape as the `POST /receipts/process` body.
pub struct ReceiptReader<R: Read> {
    source: R,
}

impl<R: Read> ReceiptReader<R> {
    /// Creates a new `ReceiptReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Deserializes the document without checking required fields.
    pub fn submission(self) -> Result<ReceiptSubmission> {
        Ok(serde_json::from_reader(self.source)?)
    }

    /// Deserializes and validates the document.
    pub fn receipt(self) -> Result<Receipt> {
        self.submission()?.validate()
    }
}
