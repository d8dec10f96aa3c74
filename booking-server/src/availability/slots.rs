//! Time-slot enumeration
//!
//! Bookable times are 30-minute increments between a day's opening and
//! closing time, both ends inclusive.

use chrono::{Datelike, NaiveDate};
use shared::models::{OpeningDaySchedule, RestaurantSettings};

use crate::utils::time::parse_hhmm;

const SLOT_INTERVAL_MINUTES: u32 = 30;

/// Enumerate the "HH:MM" slots for one day's schedule.
///
/// Returns an empty list for a disabled day or an unparsable schedule.
pub fn time_slots(schedule: &OpeningDaySchedule) -> Vec<String> {
    if !schedule.enabled {
        return Vec::new();
    }
    let (Some((start_h, start_m)), Some((end_h, end_m))) =
        (parse_hhmm(&schedule.start), parse_hhmm(&schedule.end))
    else {
        tracing::warn!(
            day = schedule.day,
            start = %schedule.start,
            end = %schedule.end,
            "unparsable opening schedule, no slots generated"
        );
        return Vec::new();
    };

    let start = start_h * 60 + start_m;
    let end = end_h * 60 + end_m;

    let mut slots = Vec::new();
    let mut minute = start;
    while minute <= end {
        slots.push(format!("{:02}:{:02}", minute / 60, minute % 60));
        minute += SLOT_INTERVAL_MINUTES;
    }
    slots
}

/// Weekday of a date in the 0 = Sunday convention used by the settings
pub fn weekday_of(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Slots for a concrete date, according to the restaurant settings.
///
/// Empty when the restaurant is closed that day.
pub fn slots_for_date(settings: &RestaurantSettings, date: NaiveDate) -> Vec<String> {
    settings
        .schedule_for(weekday_of(date))
        .map(time_slots)
        .unwrap_or_default()
}
