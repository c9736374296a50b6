//! Application layer orchestrating validation, scoring and storage.
//!
//! This module defines the `ReceiptService` which acts as the primary entry point
//! for processing receipts. Storage and id generation are injected as trait
//! objects so the HTTP layer and tests can share one service behind an `Arc`.

pub mod service;
