//! Auth API module

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

/// Public: login is the one route that must work without a token
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/auth/login", post(handler::login))
}
