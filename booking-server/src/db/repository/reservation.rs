//! Reservation Repository

use super::{BaseRepository, RepoError, RepoResult};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use shared::models::{Reservation, ReservationCreate, ReservationStatus, TableAssignment};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use uuid::Uuid;

const TABLE: &str = "reservation";

/// Row written on create; the store assigns the record id
#[derive(Debug, Serialize)]
struct ReservationRow {
    name: String,
    surname: String,
    email: String,
    phone: String,
    date: NaiveDate,
    time: String,
    people: u32,
    notes: String,
    status: ReservationStatus,
    table_id: Option<Uuid>,
    table_number: Option<u32>,
    created_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct ReservationRepository {
    base: BaseRepository,
}

impl ReservationRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All reservations, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Reservation>> {
        let rows: Vec<Reservation> = self
            .base
            .db()
            .query("SELECT *, <string>id AS id FROM reservation ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(rows)
    }

    /// Find one reservation by its "reservation:xyz" id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Reservation>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let rows: Vec<Reservation> = self
            .base
            .db()
            .query("SELECT *, <string>id AS id FROM reservation WHERE id = $id")
            .bind(("id", thing))
            .await?
            .take(0)?;
        Ok(rows.into_iter().next())
    }

    /// Persist a new reservation with the given status and optional table
    pub async fn create(
        &self,
        draft: ReservationCreate,
        table: Option<TableAssignment>,
        status: ReservationStatus,
    ) -> RepoResult<Reservation> {
        let row = ReservationRow {
            name: draft.name,
            surname: draft.surname,
            email: draft.email,
            phone: draft.phone,
            date: draft.date,
            time: draft.time,
            people: draft.people,
            notes: draft.notes.unwrap_or_default(),
            status,
            table_id: table.map(|t| t.table_id),
            table_number: table.map(|t| t.table_number),
            created_at: Utc::now(),
        };

        let rows: Vec<Reservation> = self
            .base
            .db()
            .query(format!(
                "SELECT *, <string>id AS id FROM (CREATE {TABLE} CONTENT $data)"
            ))
            .bind(("data", row))
            .await?
            .take(0)?;
        rows.into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create reservation".to_string()))
    }

    /// Overwrite the status of an existing reservation
    pub async fn set_status(&self, id: &str, status: ReservationStatus) -> RepoResult<Reservation> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.base
            .db()
            .query("UPDATE $thing SET status = $status")
            .bind(("thing", thing))
            .bind(("status", status))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Reservation {} not found", id)))
    }

    /// Overwrite the table assignment of an existing reservation
    pub async fn set_table(
        &self,
        id: &str,
        assignment: TableAssignment,
    ) -> RepoResult<Reservation> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.base
            .db()
            .query("UPDATE $thing SET table_id = $table_id, table_number = $table_number")
            .bind(("thing", thing))
            .bind(("table_id", assignment.table_id))
            .bind(("table_number", assignment.table_number))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Reservation {} not found", id)))
    }

    /// Hard delete; returns whether a record existed
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let existed = self.find_by_id(id).await?.is_some();
        if !existed {
            return Ok(false);
        }
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
