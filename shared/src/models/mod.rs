//! Domain Models

pub mod reservation;
pub mod settings;
pub mod table;

// Re-exports
pub use reservation::{
    Reservation, ReservationCreate, ReservationStatus, StatusUpdate, TableAssignment, TableUpdate,
};
pub use settings::{
    DAY_ORDER, MAX_AVAILABLE_SEATS, MIN_AVAILABLE_SEATS, OpeningDaySchedule, RestaurantSettings,
};
pub use table::{Position, TableDefinition, TableShape, TableStatus, TableWithStatus};
