use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{get_points, process_receipt};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/process", post(process_receipt))
        .route("/:id/points", get(get_points))
}
