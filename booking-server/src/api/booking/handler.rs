//! Public Booking API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::core::ServerState;
use shared::AppResult;
use shared::models::{Reservation, ReservationCreate};

/// POST /api/booking - submit a reservation request
///
/// Runs the full pipeline (dedup, opening hours, capacity, table
/// resolution) and returns the created reservation as pending.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReservationCreate>,
) -> AppResult<Json<Reservation>> {
    let reservation = state.booking.create(payload).await?;
    Ok(Json(reservation))
}

#[derive(Debug, Deserialize)]
pub struct SlotsQuery {
    pub date: NaiveDate,
}

/// GET /api/booking/slots?date=YYYY-MM-DD - bookable times for a date
///
/// An empty list means the restaurant is closed that day.
pub async fn slots(
    State(state): State<ServerState>,
    Query(query): Query<SlotsQuery>,
) -> AppResult<Json<Vec<String>>> {
    let slots = state.booking.available_slots(query.date).await?;
    Ok(Json(slots))
}
