//! Restaurant Settings Model

use serde::{Deserialize, Serialize};

/// Daily seat cap bounds
pub const MIN_AVAILABLE_SEATS: u32 = 1;
pub const MAX_AVAILABLE_SEATS: u32 = 200;

/// Opening schedule for one weekday
///
/// `day` follows the 0 = Sunday, 1 = Monday, ... convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningDaySchedule {
    pub day: u8,
    pub enabled: bool,
    /// "HH:MM"
    pub start: String,
    /// "HH:MM"
    pub end: String,
}

/// Restaurant-wide settings (persisted singleton)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantSettings {
    /// Exactly 7 entries, Monday first and Sunday last
    pub opening_days: Vec<OpeningDaySchedule>,
    /// Whole-restaurant daily seat cap
    pub available_seats: u32,
}

impl Default for RestaurantSettings {
    /// All days enabled 12:00-22:00, 50 seats
    fn default() -> Self {
        Self {
            opening_days: DAY_ORDER
                .iter()
                .map(|&day| OpeningDaySchedule {
                    day,
                    enabled: true,
                    start: "12:00".to_string(),
                    end: "22:00".to_string(),
                })
                .collect(),
            available_seats: 50,
        }
    }
}

/// Display order: Monday (1) through Saturday (6), Sunday (0) last
pub const DAY_ORDER: [u8; 7] = [1, 2, 3, 4, 5, 6, 0];

impl RestaurantSettings {
    /// Look up the schedule for a weekday (0 = Sunday)
    pub fn schedule_for(&self, weekday: u8) -> Option<&OpeningDaySchedule> {
        self.opening_days.iter().find(|s| s.day == weekday)
    }

    /// Coerce the opening days to exactly one entry per weekday in display
    /// order, filling any missing weekday from the defaults. Stored rows may
    /// predate schema changes, so this runs on every load.
    pub fn normalized(mut self) -> Self {
        let defaults = Self::default();
        let mut days = Vec::with_capacity(7);
        for &day in &DAY_ORDER {
            match self.opening_days.iter().position(|s| s.day == day) {
                Some(idx) => days.push(self.opening_days.swap_remove(idx)),
                None => days.push(
                    defaults
                        .schedule_for(day)
                        .cloned()
                        .unwrap_or(OpeningDaySchedule {
                            day,
                            enabled: true,
                            start: "12:00".to_string(),
                            end: "22:00".to_string(),
                        }),
                ),
            }
        }
        self.opening_days = days;
        self
    }
}
