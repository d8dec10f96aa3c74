//! Admin Reservations API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use shared::AppResult;
use shared::models::{Reservation, ReservationCreate, StatusUpdate, TableUpdate};

/// GET /api/admin/reservations - all reservations, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Reservation>>> {
    let reservations = state.booking.list_reservations().await?;
    Ok(Json(reservations))
}

/// GET /api/admin/reservations/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Reservation>> {
    let reservation = state.booking.get_reservation(&id).await?;
    Ok(Json(reservation))
}

/// POST /api/admin/reservations - walk-in, created directly confirmed
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReservationCreate>,
) -> AppResult<Json<Reservation>> {
    let reservation = state.booking.create_walk_in(payload).await?;
    Ok(Json(reservation))
}

/// PUT /api/admin/reservations/:id/status
pub async fn set_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<StatusUpdate>,
) -> AppResult<Json<Reservation>> {
    let reservation = state.booking.set_status(&id, payload.status).await?;
    Ok(Json(reservation))
}

/// PUT /api/admin/reservations/:id/table - move to another table
pub async fn set_table(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<TableUpdate>,
) -> AppResult<Json<Reservation>> {
    let reservation = state.booking.assign_table(&id, payload.table_number).await?;
    Ok(Json(reservation))
}

/// DELETE /api/admin/reservations/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    state.booking.delete(&id).await?;
    Ok(Json(true))
}
