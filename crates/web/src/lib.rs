//! HTTP surface of the receipt processor.

use utoipa::OpenApi;

pub mod config;
pub mod error;
pub mod features;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppState, UnknownReceiptPolicy};

#[derive(OpenApi)]
#[openapi(
    paths(
        features::receipts::handlers::process_receipt,
        features::receipts::handlers::get_points,
    ),
    components(
        schemas(
            storage::dto::receipt::ProcessReceiptRequest,
            storage::dto::receipt::ItemRequest,
            storage::dto::receipt::ProcessReceiptResponse,
            storage::dto::receipt::PointsResponse,
        )
    ),
    tags(
        (name = "receipts", description = "Receipt submission and points endpoints"),
    )
)]
pub struct ApiDoc;
