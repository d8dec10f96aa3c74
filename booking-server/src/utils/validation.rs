//! Input validation helpers
//!
//! Centralized text length constants and validation functions for inbound
//! payloads. Limits are UX-driven; the store itself enforces nothing.

use shared::models::{
    MAX_AVAILABLE_SEATS, MIN_AVAILABLE_SEATS, ReservationCreate, RestaurantSettings,
};
use shared::AppError;

use crate::utils::time::is_valid_hhmm;

// ── Limits ──────────────────────────────────────────────────────────

/// Names and surnames
pub const MAX_NAME_LEN: usize = 100;

/// Free-text notes
pub const MAX_NOTE_LEN: usize = 500;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Phone numbers
pub const MAX_PHONE_LEN: usize = 30;

/// Largest party the booking flow accepts
pub const MAX_PARTY_SIZE: u32 = 20;

// ── Helpers ─────────────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Minimal structural email check: one '@' with something on both sides and
/// a dot in the domain. Real verification happens when the confirmation
/// mail bounces, not here.
pub fn validate_email(email: &str) -> Result<(), AppError> {
    validate_required_text(email, "email", MAX_EMAIL_LEN)?;
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    };
    if !valid {
        return Err(AppError::validation("email is not a valid address")
            .with_detail("field", "email"));
    }
    Ok(())
}

/// Validate an "HH:MM" slot string
pub fn validate_time(time: &str) -> Result<(), AppError> {
    if !is_valid_hhmm(time) {
        return Err(
            AppError::validation(format!("'{time}' is not a valid HH:MM time"))
                .with_detail("field", "time"),
        );
    }
    Ok(())
}

/// Validate a reservation draft before it reaches the booking pipeline
pub fn validate_reservation_create(draft: &ReservationCreate) -> Result<(), AppError> {
    validate_required_text(&draft.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&draft.surname, "surname", MAX_NAME_LEN)?;
    validate_email(&draft.email)?;
    validate_required_text(&draft.phone, "phone", MAX_PHONE_LEN)?;
    validate_time(&draft.time)?;

    if draft.people == 0 || draft.people > MAX_PARTY_SIZE {
        return Err(AppError::validation(format!(
            "people must be between 1 and {MAX_PARTY_SIZE}"
        ))
        .with_detail("field", "people"));
    }

    if let Some(notes) = &draft.notes
        && notes.len() > MAX_NOTE_LEN
    {
        return Err(AppError::validation(format!(
            "notes are too long ({} chars, max {MAX_NOTE_LEN})",
            notes.len()
        )));
    }

    Ok(())
}

/// Validate a settings payload before persisting it
pub fn validate_settings(settings: &RestaurantSettings) -> Result<(), AppError> {
    if settings.available_seats < MIN_AVAILABLE_SEATS
        || settings.available_seats > MAX_AVAILABLE_SEATS
    {
        return Err(AppError::with_message(
            shared::ErrorCode::SettingsInvalid,
            format!(
                "available_seats must be between {MIN_AVAILABLE_SEATS} and {MAX_AVAILABLE_SEATS}"
            ),
        ));
    }

    if settings.opening_days.len() != 7 {
        return Err(AppError::with_message(
            shared::ErrorCode::SettingsInvalid,
            "opening_days must contain one entry per weekday",
        ));
    }

    for day in &settings.opening_days {
        if day.day > 6 {
            return Err(AppError::with_message(
                shared::ErrorCode::SettingsInvalid,
                format!("invalid weekday {}", day.day),
            ));
        }
        if !is_valid_hhmm(&day.start) || !is_valid_hhmm(&day.end) {
            return Err(AppError::with_message(
                shared::ErrorCode::SettingsInvalid,
                format!("invalid opening hours for weekday {}", day.day),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::ErrorCode;

    fn draft() -> ReservationCreate {
        ReservationCreate {
            name: "Mario".into(),
            surname: "Rossi".into(),
            email: "mario@example.com".into(),
            phone: "3331234567".into(),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            time: "20:00".into(),
            people: 4,
            notes: None,
            table_number: None,
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(validate_reservation_create(&draft()).is_ok());
    }

    #[test]
    fn empty_name_rejected() {
        let mut d = draft();
        d.name = "  ".into();
        assert!(validate_reservation_create(&d).is_err());
    }

    #[test]
    fn bad_email_rejected() {
        for email in ["", "mario", "mario@", "@example.com", "mario@nodot"] {
            let mut d = draft();
            d.email = email.into();
            assert!(
                validate_reservation_create(&d).is_err(),
                "accepted: {email:?}"
            );
        }
    }

    #[test]
    fn party_size_bounds() {
        let mut d = draft();
        d.people = 0;
        assert!(validate_reservation_create(&d).is_err());
        d.people = MAX_PARTY_SIZE;
        assert!(validate_reservation_create(&d).is_ok());
        d.people = MAX_PARTY_SIZE + 1;
        assert!(validate_reservation_create(&d).is_err());
    }

    #[test]
    fn bad_time_rejected() {
        let mut d = draft();
        d.time = "25:00".into();
        assert!(validate_reservation_create(&d).is_err());
    }

    #[test]
    fn settings_bounds() {
        let mut s = RestaurantSettings::default();
        assert!(validate_settings(&s).is_ok());

        s.available_seats = 0;
        let err = validate_settings(&s).unwrap_err();
        assert_eq!(err.code, ErrorCode::SettingsInvalid);

        s.available_seats = 50;
        s.opening_days.pop();
        assert!(validate_settings(&s).is_err());
    }

    #[test]
    fn settings_reject_bad_hours() {
        let mut s = RestaurantSettings::default();
        s.opening_days[0].start = "26:00".into();
        assert!(validate_settings(&s).is_err());
    }
}
