//! Admin Reservations API module

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

/// Admin routes; the auth layer is applied by the caller
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/admin/reservations", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_by_id).delete(handler::delete))
        .route("/{id}/status", put(handler::set_status))
        .route("/{id}/table", put(handler::set_table))
}
