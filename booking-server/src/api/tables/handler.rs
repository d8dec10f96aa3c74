//! Admin Floor Map API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::core::ServerState;
use shared::AppResult;
use shared::models::TableWithStatus;

#[derive(Debug, Deserialize)]
pub struct FloorMapQuery {
    pub date: NaiveDate,
    /// "HH:MM" slot
    pub time: String,
}

/// GET /api/admin/tables?date=YYYY-MM-DD&time=HH:MM
///
/// The whole catalog annotated with per-slot occupancy, for the floor map.
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<FloorMapQuery>,
) -> AppResult<Json<Vec<TableWithStatus>>> {
    let tables = state
        .booking
        .tables_with_status(query.date, &query.time)
        .await?;
    Ok(Json(tables))
}
