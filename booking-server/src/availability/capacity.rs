//! Daily capacity and dedup checks
//!
//! The whole-restaurant seat cap is independent of per-table capacity; both
//! checks must pass before a reservation is created.

use chrono::NaiveDate;
use shared::error::{AppError, AppResult};
use shared::models::Reservation;

/// Active reservations on a calendar date (time-of-day ignored)
pub fn reservations_for_date(reservations: &[Reservation], date: NaiveDate) -> Vec<Reservation> {
    reservations
        .iter()
        .filter(|r| r.is_active() && r.date == date)
        .cloned()
        .collect()
}

/// Active reservations on an exact (date, time) slot
pub fn reservations_for_slot(
    reservations: &[Reservation],
    date: NaiveDate,
    time: &str,
) -> Vec<Reservation> {
    reservations
        .iter()
        .filter(|r| r.is_active() && r.occupies_slot(date, time))
        .cloned()
        .collect()
}

/// Seats already taken by the given reservations
pub fn seats_taken(reservations: &[Reservation]) -> u32 {
    reservations
        .iter()
        .filter(|r| r.is_active())
        .map(|r| r.people)
        .sum()
}

/// Check the whole-day seat cap.
///
/// Rejects exactly when taken + new exceeds the cap; hitting the cap
/// exactly is accepted.
pub fn check_capacity(
    people: u32,
    active_for_date: &[Reservation],
    available_seats: u32,
) -> AppResult<()> {
    let taken = seats_taken(active_for_date);
    if taken + people > available_seats {
        return Err(AppError::capacity_exceeded(people, available_seats)
            .with_detail("seats_taken", taken));
    }
    Ok(())
}

/// Whether the email already holds an active reservation (case-insensitive,
/// regardless of date)
pub fn has_active_reservation(email: &str, reservations: &[Reservation]) -> bool {
    reservations
        .iter()
        .any(|r| r.is_active() && r.email.eq_ignore_ascii_case(email))
}
