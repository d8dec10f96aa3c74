//! Floor Plan Catalog
//!
//! The restaurant layout is fixed: nineteen bookable tables plus the bar
//! counter. Geometry matches the floor-map UI canvas. Ids are generated
//! once per process; reservations also carry the table number, which is
//! stable across restarts.

use shared::models::{Position, TableDefinition, TableShape};
use uuid::Uuid;

struct TableSpec {
    number: u32,
    capacity: u32,
    shape: TableShape,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    rotation: Option<f32>,
    is_structure: bool,
    label: &'static str,
}

const fn table(
    number: u32,
    capacity: u32,
    shape: TableShape,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    label: &'static str,
) -> TableSpec {
    TableSpec {
        number,
        capacity,
        shape,
        x,
        y,
        width,
        height,
        rotation: None,
        is_structure: false,
        label,
    }
}

const FLOOR_PLAN: [TableSpec; 20] = [
    // Rectangular tables
    table(6, 7, TableShape::Rectangle, 1200.0, 200.0, 180.0, 80.0, "TAV.6"),
    TableSpec {
        rotation: Some(30.0),
        ..table(11, 9, TableShape::Rectangle, 600.0, 620.0, 160.0, 80.0, "TAV.11")
    },
    TableSpec {
        rotation: Some(-30.0),
        ..table(1, 6, TableShape::Rectangle, 1200.0, 750.0, 180.0, 80.0, "TAV.1")
    },
    // Round tables
    table(3, 5, TableShape::Circle, 1200.0, 500.0, 90.0, 90.0, "TAV.3"),
    table(4, 4, TableShape::Circle, 1200.0, 350.0, 80.0, 80.0, "TAV.4"),
    table(7, 5, TableShape::Circle, 1250.0, 80.0, 90.0, 90.0, "TAV.7"),
    table(100, 5, TableShape::Circle, 450.0, 200.0, 90.0, 90.0, "TAV.100"),
    table(21, 6, TableShape::Circle, 350.0, 750.0, 150.0, 100.0, "TAV.21"),
    // Square tables
    table(2, 2, TableShape::Square, 1250.0, 620.0, 70.0, 70.0, "TAV.2"),
    table(8, 2, TableShape::Square, 850.0, 80.0, 70.0, 70.0, "TAV.8"),
    table(9, 2, TableShape::Square, 800.0, 380.0, 70.0, 70.0, "TAV.9"),
    table(10, 2, TableShape::Square, 800.0, 500.0, 70.0, 70.0, "TAV.10"),
    table(23, 3, TableShape::Square, 80.0, 750.0, 70.0, 70.0, "TAV.23"),
    table(25, 2, TableShape::Square, 80.0, 600.0, 70.0, 70.0, "TAV.25"),
    table(27, 2, TableShape::Square, 80.0, 430.0, 70.0, 70.0, "TAV.27"),
    table(28, 3, TableShape::Square, 200.0, 200.0, 70.0, 70.0, "TAV.28"),
    table(101, 2, TableShape::Square, 350.0, 430.0, 70.0, 70.0, "TAV.101"),
    table(102, 2, TableShape::Square, 650.0, 430.0, 70.0, 70.0, "TAV.102"),
    table(103, 2, TableShape::Square, 650.0, 300.0, 70.0, 70.0, "TAV.103"),
    // Non-bookable structures
    TableSpec {
        is_structure: true,
        ..table(0, 0, TableShape::Rectangle, 500.0, 520.0, 300.0, 60.0, "BAR")
    },
];

/// Build the catalog, assigning a fresh id to every entry
pub fn build_catalog() -> Vec<TableDefinition> {
    FLOOR_PLAN
        .iter()
        .map(|spec| TableDefinition {
            id: Uuid::new_v4(),
            number: spec.number,
            capacity: spec.capacity,
            shape: spec.shape,
            position: Position {
                x: spec.x,
                y: spec.y,
            },
            width: spec.width,
            height: spec.height,
            rotation: spec.rotation,
            is_structure: spec.is_structure,
            label: Some(spec.label.to_string()),
        })
        .collect()
}
