//! Public Booking API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Public routes used by the booking widget, no authentication
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/booking", post(handler::create))
        .route("/api/booking/slots", get(handler::slots))
}
