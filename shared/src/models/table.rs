//! Table Catalog Model
//!
//! The physical floor plan is a fixed catalog built once at startup; tables
//! are not persisted. Geometry fields exist for the floor-map UI only.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::reservation::ReservationStatus;

/// Table shape (presentation only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableShape {
    Circle,
    Square,
    Rectangle,
}

/// Floor-map position (presentation only)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// A physical table (or non-bookable structure) in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDefinition {
    /// Unique across the catalog, generated at process start
    pub id: Uuid,
    /// Human-facing table number, unique across the catalog
    pub number: u32,
    /// Seat count; structures carry 0
    pub capacity: u32,
    pub shape: TableShape,
    pub position: Position,
    pub width: f32,
    pub height: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f32>,
    /// Non-bookable structure (e.g. the bar counter)
    #[serde(default)]
    pub is_structure: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl TableDefinition {
    /// Whether this entry can be assigned to a reservation at all
    pub fn is_bookable(&self) -> bool {
        !self.is_structure && self.capacity > 0
    }

    /// Whether this table can seat the given party
    pub fn fits(&self, people: u32) -> bool {
        self.is_bookable() && self.capacity >= people
    }
}

/// Occupancy state of a table for a specific slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    Free,
    Pending,
    Occupied,
}

impl From<ReservationStatus> for TableStatus {
    fn from(status: ReservationStatus) -> Self {
        match status {
            ReservationStatus::Pending => TableStatus::Pending,
            ReservationStatus::Confirmed => TableStatus::Occupied,
            ReservationStatus::Rejected => TableStatus::Free,
        }
    }
}

/// Catalog entry annotated with per-slot occupancy, for the admin floor map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableWithStatus {
    #[serde(flatten)]
    pub table: TableDefinition,
    pub status: TableStatus,
    /// Id of the reservation holding the table, when occupied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(number: u32, capacity: u32, is_structure: bool) -> TableDefinition {
        TableDefinition {
            id: Uuid::new_v4(),
            number,
            capacity,
            shape: TableShape::Square,
            position: Position { x: 0.0, y: 0.0 },
            width: 70.0,
            height: 70.0,
            rotation: None,
            is_structure,
            label: None,
        }
    }

    #[test]
    fn test_structure_never_bookable() {
        let bar = table(0, 0, true);
        assert!(!bar.is_bookable());
        assert!(!bar.fits(1));
    }

    #[test]
    fn test_fits() {
        let t = table(4, 4, false);
        assert!(t.fits(3));
        assert!(t.fits(4));
        assert!(!t.fits(5));
    }

    #[test]
    fn test_table_status_from_reservation_status() {
        assert_eq!(
            TableStatus::from(ReservationStatus::Pending),
            TableStatus::Pending
        );
        assert_eq!(
            TableStatus::from(ReservationStatus::Confirmed),
            TableStatus::Occupied
        );
        assert_eq!(
            TableStatus::from(ReservationStatus::Rejected),
            TableStatus::Free
        );
    }
}
