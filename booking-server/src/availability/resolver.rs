//! Table resolution
//!
//! Pure scans over the catalog and a caller-scoped reservation snapshot.
//! "Active" means status pending or confirmed; rejected reservations never
//! block a table. The caller decides the snapshot scope (usually one
//! (date, time) slot).

use shared::models::{Reservation, ReservationStatus, TableDefinition, TableWithStatus};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// Whether no active reservation holds the given table id
pub fn is_table_available(table_id: &Uuid, reservations: &[Reservation]) -> bool {
    !reservations
        .iter()
        .any(|r| r.is_active() && r.table_id.as_ref() == Some(table_id))
}

/// Whether no active reservation holds the given table number
pub fn is_table_number_available(table_number: u32, reservations: &[Reservation]) -> bool {
    !reservations
        .iter()
        .any(|r| r.is_active() && r.table_number == Some(table_number))
}

/// Whether the table is free both by id and by number
pub fn is_table_free(table: &TableDefinition, reservations: &[Reservation]) -> bool {
    is_table_available(&table.id, reservations)
        && is_table_number_available(table.number, reservations)
}

/// Find a table for the given party size.
///
/// Candidates are non-structure tables with `capacity >= people`, scanned in
/// ascending capacity order. Among the free candidates an exact capacity
/// match wins; otherwise the smallest free candidate is returned. `None`
/// (nothing fits, or everything fitting is taken) is a normal outcome.
pub fn find_available_table<'a>(
    people: u32,
    catalog: &'a [TableDefinition],
    reservations: &[Reservation],
) -> Option<&'a TableDefinition> {
    let mut suitable: Vec<&TableDefinition> =
        catalog.iter().filter(|t| t.fits(people)).collect();
    suitable.sort_by_key(|t| t.capacity);

    if suitable.is_empty() {
        tracing::debug!(people, "no table large enough for party");
        return None;
    }

    let available: Vec<&TableDefinition> = suitable
        .into_iter()
        .filter(|t| is_table_free(t, reservations))
        .collect();

    if available.is_empty() {
        tracing::debug!(people, "all fitting tables are taken");
        return None;
    }

    if let Some(exact) = available.iter().find(|t| t.capacity == people) {
        return Some(exact);
    }

    Some(available[0])
}

/// Find a catalog entry by its human-facing number
pub fn find_table_by_number(
    catalog: &[TableDefinition],
    table_number: u32,
) -> Option<&TableDefinition> {
    catalog.iter().find(|t| t.number == table_number)
}

/// Find a catalog entry by id
pub fn find_table_by_id<'a>(
    catalog: &'a [TableDefinition],
    table_id: &Uuid,
) -> Option<&'a TableDefinition> {
    catalog.iter().find(|t| t.id == *table_id)
}

/// Ids of tables held by active reservations
pub fn occupied_table_ids(reservations: &[Reservation]) -> HashSet<Uuid> {
    reservations
        .iter()
        .filter(|r| r.is_active())
        .filter_map(|r| r.table_id)
        .collect()
}

/// Numbers of tables held by active reservations
pub fn occupied_table_numbers(reservations: &[Reservation]) -> HashSet<u32> {
    reservations
        .iter()
        .filter(|r| r.is_active())
        .filter_map(|r| r.table_number)
        .collect()
}

/// Table number -> status of the active reservation holding it
pub fn table_status_map(reservations: &[Reservation]) -> HashMap<u32, ReservationStatus> {
    reservations
        .iter()
        .filter(|r| r.is_active())
        .filter_map(|r| r.table_number.map(|n| (n, r.status)))
        .collect()
}

/// Annotate the whole catalog with per-slot occupancy, for the floor map
pub fn annotate_catalog(
    catalog: &[TableDefinition],
    reservations: &[Reservation],
) -> Vec<TableWithStatus> {
    catalog
        .iter()
        .map(|table| {
            let holder = reservations.iter().find(|r| {
                r.is_active()
                    && (r.table_id.as_ref() == Some(&table.id)
                        || r.table_number == Some(table.number))
            });
            TableWithStatus {
                table: table.clone(),
                status: holder
                    .map(|r| r.status.into())
                    .unwrap_or(shared::models::TableStatus::Free),
                reservation_id: holder.and_then(|r| r.id.clone()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::availability::test_support::{reservation_on_table, table};
    use shared::models::TableStatus;

    fn catalog_2_2_4_6() -> Vec<TableDefinition> {
        vec![table(1, 2), table(2, 2), table(3, 4), table(4, 6)]
    }

    #[test]
    fn empty_snapshot_returns_smallest_fitting_table() {
        let catalog = catalog_2_2_4_6();
        let found = find_available_table(3, &catalog, &[]).unwrap();
        assert_eq!(found.capacity, 4);
        assert_eq!(found.number, 3);
    }

    #[test]
    fn exact_capacity_wins_over_larger_free_table() {
        let catalog = catalog_2_2_4_6();
        let found = find_available_table(4, &catalog, &[]).unwrap();
        assert_eq!(found.capacity, 4);
    }

    #[test]
    fn party_too_large_returns_none() {
        let catalog = catalog_2_2_4_6();
        assert!(find_available_table(7, &catalog, &[]).is_none());
    }

    #[test]
    fn all_fitting_tables_occupied_returns_none() {
        let catalog = catalog_2_2_4_6();
        let reservations = vec![
            reservation_on_table(&catalog[2], shared::models::ReservationStatus::Pending),
            reservation_on_table(&catalog[3], shared::models::ReservationStatus::Confirmed),
        ];
        assert!(find_available_table(4, &catalog, &reservations).is_none());
    }

    #[test]
    fn occupied_exact_table_falls_through_to_larger() {
        // The end-to-end scenario: 4-top taken, second party of 4 gets the 6-top
        let catalog = catalog_2_2_4_6();
        let reservations = vec![reservation_on_table(
            &catalog[2],
            shared::models::ReservationStatus::Confirmed,
        )];
        let found = find_available_table(4, &catalog, &reservations).unwrap();
        assert_eq!(found.capacity, 6);
    }

    #[test]
    fn structures_are_never_candidates() {
        let mut bar = table(0, 0);
        bar.is_structure = true;
        let catalog = vec![bar];
        assert!(find_available_table(1, &catalog, &[]).is_none());
    }

    #[test]
    fn rejected_reservation_never_blocks() {
        let catalog = catalog_2_2_4_6();
        let rejected = reservation_on_table(
            &catalog[2],
            shared::models::ReservationStatus::Rejected,
        );
        assert!(is_table_free(&catalog[2], &[rejected.clone()]));
        let found = find_available_table(4, &catalog, &[rejected]).unwrap();
        assert_eq!(found.capacity, 4);
    }

    #[test]
    fn availability_matches_by_id_and_by_number() {
        let catalog = catalog_2_2_4_6();
        let held = reservation_on_table(&catalog[0], shared::models::ReservationStatus::Pending);

        assert!(!is_table_available(&catalog[0].id, std::slice::from_ref(&held)));
        assert!(!is_table_number_available(
            catalog[0].number,
            std::slice::from_ref(&held)
        ));
        assert!(is_table_available(&catalog[1].id, std::slice::from_ref(&held)));

        // A reservation carrying only the number still blocks the table
        let mut number_only = held.clone();
        number_only.table_id = None;
        assert!(!is_table_free(&catalog[0], &[number_only]));
    }

    #[test]
    fn occupancy_sets_skip_inactive() {
        let catalog = catalog_2_2_4_6();
        let active = reservation_on_table(&catalog[0], shared::models::ReservationStatus::Pending);
        let rejected =
            reservation_on_table(&catalog[1], shared::models::ReservationStatus::Rejected);
        let reservations = vec![active, rejected];

        let ids = occupied_table_ids(&reservations);
        assert!(ids.contains(&catalog[0].id));
        assert!(!ids.contains(&catalog[1].id));

        let numbers = occupied_table_numbers(&reservations);
        assert_eq!(numbers.len(), 1);
        assert!(numbers.contains(&catalog[0].number));
    }

    #[test]
    fn status_map_tracks_holding_reservation() {
        let catalog = catalog_2_2_4_6();
        let reservations = vec![
            reservation_on_table(&catalog[0], shared::models::ReservationStatus::Pending),
            reservation_on_table(&catalog[2], shared::models::ReservationStatus::Confirmed),
        ];
        let map = table_status_map(&reservations);
        assert_eq!(
            map.get(&catalog[0].number),
            Some(&shared::models::ReservationStatus::Pending)
        );
        assert_eq!(
            map.get(&catalog[2].number),
            Some(&shared::models::ReservationStatus::Confirmed)
        );
        assert!(!map.contains_key(&catalog[1].number));
    }

    #[test]
    fn annotate_catalog_marks_statuses() {
        let catalog = catalog_2_2_4_6();
        let reservations = vec![
            reservation_on_table(&catalog[0], shared::models::ReservationStatus::Pending),
            reservation_on_table(&catalog[3], shared::models::ReservationStatus::Confirmed),
        ];
        let annotated = annotate_catalog(&catalog, &reservations);
        assert_eq!(annotated.len(), 4);
        assert_eq!(annotated[0].status, TableStatus::Pending);
        assert_eq!(annotated[1].status, TableStatus::Free);
        assert_eq!(annotated[3].status, TableStatus::Occupied);
        assert!(annotated[3].reservation_id.is_some());
    }
}
