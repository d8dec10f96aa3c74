//! Availability core
//!
//! Pure computations over an in-memory snapshot of reservations: table
//! resolution, occupancy queries, the whole-day capacity check, the
//! per-email dedup guard, and time-slot enumeration. Nothing in this module
//! performs I/O; the booking service fetches the snapshot and scopes it
//! before calling in.

pub mod capacity;
pub mod resolver;
pub mod slots;

pub use capacity::{
    check_capacity, has_active_reservation, reservations_for_date, reservations_for_slot,
    seats_taken,
};
pub use resolver::{
    annotate_catalog, find_available_table, find_table_by_id, find_table_by_number,
    is_table_available, is_table_free, is_table_number_available, occupied_table_ids,
    occupied_table_numbers, table_status_map,
};
pub use slots::{slots_for_date, time_slots, weekday_of};

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{NaiveDate, Utc};
    use shared::models::{
        Position, Reservation, ReservationStatus, TableDefinition, TableShape,
    };
    use uuid::Uuid;

    pub fn table(number: u32, capacity: u32) -> TableDefinition {
        TableDefinition {
            id: Uuid::new_v4(),
            number,
            capacity,
            shape: TableShape::Square,
            position: Position { x: 0.0, y: 0.0 },
            width: 70.0,
            height: 70.0,
            rotation: None,
            is_structure: false,
            label: None,
        }
    }

    pub fn reservation_for_slot(
        date: NaiveDate,
        time: &str,
        people: u32,
        status: ReservationStatus,
    ) -> Reservation {
        Reservation {
            id: Some(format!("reservation:{}", Uuid::new_v4())),
            name: "Mario".into(),
            surname: "Rossi".into(),
            email: format!("guest-{}@example.com", Uuid::new_v4()),
            phone: "3331234567".into(),
            date,
            time: time.into(),
            people,
            notes: String::new(),
            status,
            table_id: None,
            table_number: None,
            created_at: Utc::now(),
        }
    }

    pub fn reservation_on_table(
        table: &TableDefinition,
        status: ReservationStatus,
    ) -> Reservation {
        let mut r = reservation_for_slot(
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            "20:00",
            table.capacity.max(1),
            status,
        );
        r.table_id = Some(table.id);
        r.table_number = Some(table.number);
        r
    }
}
