use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use storage::{
    dto::receipt::{PointsResponse, ProcessReceiptRequest, ProcessReceiptResponse},
    error::StorageError,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::{WebError, WebResult};
use crate::state::{AppState, UnknownReceiptPolicy};

use super::services;

#[utoipa::path(
    post,
    path = "/receipts/process",
    request_body = ProcessReceiptRequest,
    responses(
        (status = 200, description = "Receipt stored", body = ProcessReceiptResponse),
        (status = 400, description = "The receipt is invalid")
    ),
    tag = "receipts"
)]
pub async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<ProcessReceiptRequest>, JsonRejection>,
) -> WebResult<Response> {
    let Json(payload) = payload?;
    payload.validate()?;

    let id = services::process_receipt(&state.db, &payload).await?;

    Ok(Json(ProcessReceiptResponse { id }).into_response())
}

#[utoipa::path(
    get,
    path = "/receipts/{id}/points",
    params(
        ("id" = String, Path, description = "Receipt ID returned by /receipts/process")
    ),
    responses(
        (status = 200, description = "Points awarded to the receipt; 0 for an unknown id unless strict lookup is enabled", body = PointsResponse),
        (status = 404, description = "No receipt with this id (strict lookup only)")
    ),
    tag = "receipts"
)]
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> WebResult<Response> {
    let result = match Uuid::parse_str(&id) {
        Ok(id) => services::get_points(&state.db, id).await,
        Err(_) => Err(StorageError::NotFound),
    };

    let points = match result {
        Ok(points) => points,
        Err(StorageError::NotFound) => {
            tracing::info!(receipt_id = %id, "Points requested for unknown receipt");
            match state.unknown_receipt {
                UnknownReceiptPolicy::ZeroPoints => 0,
                UnknownReceiptPolicy::NotFound => return Err(WebError::NotFound),
            }
        }
        Err(e) => return Err(e.into()),
    };

    Ok(Json(PointsResponse { points }).into_response())
}
