use super::error::ApiResult;
use crate::application::service::ReceiptService;
use crate::domain::points::Points;
use crate::domain::receipt::{ReceiptId, ReceiptSubmission};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ProcessResponse {
    pub id: ReceiptId,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PointsResponse {
    pub points: Points,
}

/// `POST /receipts/process`
pub async fn process_receipt(
    State(service): State<Arc<ReceiptService>>,
    payload: Result<Json<ReceiptSubmission>, JsonRejection>,
) -> ApiResult<Json<ProcessResponse>> {
    let Json(submission) = payload?;
    let id = service.process(submission).await?;
    Ok(Json(ProcessResponse { id }))
}

/// `GET /receipts/{id}/points`
pub async fn get_points(
    State(service): State<Arc<ReceiptService>>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let points = service.points(&ReceiptId::from(id)).await?;
    Ok(Json(PointsResponse { points }))
}
