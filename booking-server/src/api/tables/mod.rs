//! Admin Floor Map API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Admin routes; the auth layer is applied by the caller
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/admin/tables", get(handler::list))
}
