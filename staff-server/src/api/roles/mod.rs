//! Role API Module (read-only)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Role router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/roles", get(handler::list))
        .route("/roles/{id}", get(handler::get_by_id))
}
