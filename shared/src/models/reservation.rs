//! Reservation Model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reservation lifecycle status
///
/// Created as `Pending` by the public booking flow (or directly `Confirmed`
/// for admin walk-ins). Admin actions may set any status; there is no
/// enforced transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Rejected,
}

impl ReservationStatus {
    /// Active reservations count against capacity and table occupancy
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Rejected => "rejected",
        }
    }
}

/// Reservation entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    /// Record id, assigned by the store on creation ("reservation:xyz")
    pub id: Option<String>,
    pub name: String,
    pub surname: String,
    /// Dedup key: one active reservation per email (case-insensitive)
    pub email: String,
    pub phone: String,
    /// Calendar date of the booking; time-of-day lives in `time`
    pub date: NaiveDate,
    /// "HH:MM" slot string
    pub time: String,
    /// Party size
    pub people: u32,
    #[serde(default)]
    pub notes: String,
    pub status: ReservationStatus,
    /// Assigned table, if any
    pub table_id: Option<Uuid>,
    pub table_number: Option<u32>,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// Whether this reservation counts against capacity and occupancy
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Whether this reservation sits on the given (date, time) slot
    pub fn occupies_slot(&self, date: NaiveDate, time: &str) -> bool {
        self.date == date && self.time == time
    }
}

/// Create reservation payload (public booking and admin walk-in)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCreate {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time: String,
    pub people: u32,
    pub notes: Option<String>,
    /// Manually chosen table number; when absent the resolver picks one
    pub table_number: Option<u32>,
}

/// Table assignment handed to the store alongside a draft
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TableAssignment {
    pub table_id: Uuid,
    pub table_number: u32,
}

/// Status update payload
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: ReservationStatus,
}

/// Table reassignment payload
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TableUpdate {
    pub table_number: u32,
}
