//! Booking Service
//!
//! Orchestrates the reservation pipeline on top of the repositories and the
//! availability core. Every check runs against a snapshot fetched at the
//! start of the call; the embedded store serializes writes, so overlapping
//! requests resolve in arrival order.

use std::sync::Arc;

use chrono::NaiveDate;
use shared::{AppError, AppResult, ErrorCode};
use shared::models::{
    Reservation, ReservationCreate, ReservationStatus, RestaurantSettings, TableAssignment,
    TableDefinition, TableWithStatus,
};

use crate::availability;
use crate::db::DbService;
use crate::db::repository::{ReservationRepository, SettingsRepository};
use crate::utils::validation::{validate_reservation_create, validate_settings};

#[derive(Clone)]
pub struct BookingService {
    reservations: ReservationRepository,
    settings: SettingsRepository,
    catalog: Arc<Vec<TableDefinition>>,
}

impl BookingService {
    pub fn new(db: &DbService, catalog: Arc<Vec<TableDefinition>>) -> Self {
        Self {
            reservations: ReservationRepository::new(db.db.clone()),
            settings: SettingsRepository::new(db.db.clone()),
            catalog,
        }
    }

    pub fn catalog(&self) -> &[TableDefinition] {
        &self.catalog
    }

    /// All reservations, newest first
    pub async fn list_reservations(&self) -> AppResult<Vec<Reservation>> {
        Ok(self.reservations.find_all().await?)
    }

    pub async fn get_reservation(&self, id: &str) -> AppResult<Reservation> {
        self.reservations
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::reservation_not_found(id))
    }

    /// Public booking flow: validate, dedup, then run the availability
    /// pipeline and persist as pending.
    pub async fn create(&self, draft: ReservationCreate) -> AppResult<Reservation> {
        validate_reservation_create(&draft)?;

        let snapshot = self.reservations.find_all().await?;
        if availability::has_active_reservation(&draft.email, &snapshot) {
            return Err(AppError::duplicate_reservation(draft.email.clone()));
        }

        self.create_checked(draft, &snapshot, ReservationStatus::Pending)
            .await
    }

    /// Admin walk-in: created directly confirmed, no dedup guard. Staff
    /// regularly book repeat guests under the restaurant's own email.
    pub async fn create_walk_in(&self, draft: ReservationCreate) -> AppResult<Reservation> {
        validate_reservation_create(&draft)?;
        let snapshot = self.reservations.find_all().await?;
        self.create_checked(draft, &snapshot, ReservationStatus::Confirmed)
            .await
    }

    /// Shared tail of both create paths: opening hours, capacity, table
    /// resolution, persist, notify.
    async fn create_checked(
        &self,
        draft: ReservationCreate,
        snapshot: &[Reservation],
        status: ReservationStatus,
    ) -> AppResult<Reservation> {
        let settings = self.settings.get_or_create().await?;
        self.check_opening_hours(&settings, draft.date, &draft.time)?;

        let for_date = availability::reservations_for_date(snapshot, draft.date);
        availability::check_capacity(draft.people, &for_date, settings.available_seats)?;

        let for_slot = availability::reservations_for_slot(snapshot, draft.date, &draft.time);
        let assignment = self.resolve_table(&draft, &for_slot)?;

        let created = self
            .reservations
            .create(draft, Some(assignment), status)
            .await?;

        notify_created(&created);
        Ok(created)
    }

    fn check_opening_hours(
        &self,
        settings: &RestaurantSettings,
        date: NaiveDate,
        time: &str,
    ) -> AppResult<()> {
        let weekday = availability::weekday_of(date);
        let schedule = settings
            .schedule_for(weekday)
            .filter(|s| s.enabled)
            .ok_or_else(|| {
                AppError::new(ErrorCode::RestaurantClosed).with_detail("date", date.to_string())
            })?;

        if !availability::time_slots(schedule).iter().any(|s| s == time) {
            return Err(AppError::new(ErrorCode::TimeOutsideOpeningHours)
                .with_detail("time", time)
                .with_detail("start", schedule.start.clone())
                .with_detail("end", schedule.end.clone()));
        }
        Ok(())
    }

    /// Pick a table for the draft: honor a manual table number when given,
    /// otherwise let the resolver choose.
    fn resolve_table(
        &self,
        draft: &ReservationCreate,
        slot_snapshot: &[Reservation],
    ) -> AppResult<TableAssignment> {
        if let Some(number) = draft.table_number {
            let table = availability::find_table_by_number(&self.catalog, number)
                .ok_or_else(|| {
                    AppError::with_message(
                        ErrorCode::TableNotFound,
                        format!("Table {number} is not in the floor plan"),
                    )
                })?;
            if !table.is_bookable() {
                return Err(AppError::new(ErrorCode::TableNotBookable)
                    .with_detail("table_number", number));
            }
            if !availability::is_table_free(table, slot_snapshot) {
                return Err(AppError::table_occupied(number));
            }
            return Ok(TableAssignment {
                table_id: table.id,
                table_number: table.number,
            });
        }

        availability::find_available_table(draft.people, &self.catalog, slot_snapshot)
            .map(|t| TableAssignment {
                table_id: t.id,
                table_number: t.number,
            })
            .ok_or_else(|| AppError::no_table_available(draft.people))
    }

    /// Overwrite the status; any transition is allowed, including re-opening
    /// a rejected reservation.
    pub async fn set_status(&self, id: &str, status: ReservationStatus) -> AppResult<Reservation> {
        let updated = self.reservations.set_status(id, status).await?;
        notify_status(&updated);
        Ok(updated)
    }

    /// Move a reservation to another table, checked against the slot it
    /// occupies. The reservation's own hold on the target never counts as a
    /// conflict.
    pub async fn assign_table(&self, id: &str, table_number: u32) -> AppResult<Reservation> {
        let reservation = self.get_reservation(id).await?;

        let table = availability::find_table_by_number(&self.catalog, table_number)
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::TableNotFound,
                    format!("Table {table_number} is not in the floor plan"),
                )
            })?;
        if !table.is_bookable() {
            return Err(AppError::new(ErrorCode::TableNotBookable)
                .with_detail("table_number", table_number));
        }

        let snapshot = self.reservations.find_all().await?;
        let others: Vec<Reservation> =
            availability::reservations_for_slot(&snapshot, reservation.date, &reservation.time)
                .into_iter()
                .filter(|r| r.id != reservation.id)
                .collect();

        if !availability::is_table_free(table, &others) {
            return Err(AppError::table_occupied(table_number));
        }

        Ok(self
            .reservations
            .set_table(
                id,
                TableAssignment {
                    table_id: table.id,
                    table_number: table.number,
                },
            )
            .await?)
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        if !self.reservations.delete(id).await? {
            return Err(AppError::reservation_not_found(id));
        }
        Ok(())
    }

    /// The floor map for one slot: every catalog entry with its occupancy
    pub async fn tables_with_status(
        &self,
        date: NaiveDate,
        time: &str,
    ) -> AppResult<Vec<TableWithStatus>> {
        let snapshot = self.reservations.find_all().await?;
        let for_slot = availability::reservations_for_slot(&snapshot, date, time);
        Ok(availability::annotate_catalog(&self.catalog, &for_slot))
    }

    /// Bookable "HH:MM" slots for a date; empty when closed
    pub async fn available_slots(&self, date: NaiveDate) -> AppResult<Vec<String>> {
        let settings = self.settings.get_or_create().await?;
        Ok(availability::slots_for_date(&settings, date))
    }

    pub async fn get_settings(&self) -> AppResult<RestaurantSettings> {
        Ok(self.settings.get_or_create().await?)
    }

    pub async fn update_settings(
        &self,
        settings: RestaurantSettings,
    ) -> AppResult<RestaurantSettings> {
        validate_settings(&settings)?;
        Ok(self.settings.update(settings).await?)
    }
}

// Guest notifications are log-only; an SMTP/SMS gateway would hook in here.

fn notify_created(reservation: &Reservation) {
    tracing::info!(
        email = %reservation.email,
        date = %reservation.date,
        time = %reservation.time,
        people = reservation.people,
        table = ?reservation.table_number,
        status = reservation.status.as_str(),
        "reservation created, confirmation email queued"
    );
}

fn notify_status(reservation: &Reservation) {
    tracing::info!(
        email = %reservation.email,
        date = %reservation.date,
        time = %reservation.time,
        status = reservation.status.as_str(),
        "reservation status changed, notification email queued"
    );
}
