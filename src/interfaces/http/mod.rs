//! HTTP surface: an axum router over a shared [`ReceiptService`](crate::application::service::ReceiptService).

pub mod error;
pub mod handlers;
pub mod router;

pub use router::receipt_router;
