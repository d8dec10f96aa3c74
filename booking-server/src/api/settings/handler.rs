//! Admin Settings API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use shared::AppResult;
use shared::models::RestaurantSettings;

/// GET /api/admin/settings
pub async fn get(State(state): State<ServerState>) -> AppResult<Json<RestaurantSettings>> {
    let settings = state.booking.get_settings().await?;
    Ok(Json(settings))
}

/// PUT /api/admin/settings - validate and overwrite the singleton
pub async fn update(
    State(state): State<ServerState>,
    Json(payload): Json<RestaurantSettings>,
) -> AppResult<Json<RestaurantSettings>> {
    let settings = state.booking.update_settings(payload).await?;
    Ok(Json(settings))
}
