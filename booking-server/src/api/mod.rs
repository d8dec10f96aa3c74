//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health check (public)
//! - [`booking`] - public booking widget endpoints
//! - [`auth`] - admin login
//! - [`reservations`] - admin reservation management
//! - [`tables`] - admin floor map
//! - [`settings`] - admin restaurant settings

pub mod auth;
pub mod booking;
pub mod health;
pub mod reservations;
pub mod settings;
pub mod tables;

use axum::Router;
use axum::middleware as axum_middleware;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::require_auth;
use crate::core::ServerState;

/// Routes that work without a token
fn public_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(booking::router())
        .merge(auth::router())
}

/// Routes behind the admin token
fn admin_router(state: &ServerState) -> Router<ServerState> {
    Router::new()
        .merge(reservations::router())
        .merge(tables::router())
        .merge(settings::router())
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ))
}

/// Assemble the full application with middleware
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    public_router()
        .merge(admin_router(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
