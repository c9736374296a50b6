use super::handlers::{get_points, process_receipt};
use crate::application::service::ReceiptService;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Router serving the receipt endpoints.
pub fn receipt_router(service: Arc<ReceiptService>) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/{id}/points", get(get_points))
        .with_state(service)
}
