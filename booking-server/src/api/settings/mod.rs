//! Admin Settings API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Admin routes; the auth layer is applied by the caller
pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/admin/settings",
        get(handler::get).put(handler::update),
    )
}
