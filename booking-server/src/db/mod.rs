//! Database Module
//!
//! Embedded SurrealDB (RocksDB engine) storing reservations and the
//! settings singleton. Schema is defined idempotently on startup.

pub mod repository;

use shared::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

/// Database service, owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the database at the given path and apply the schema
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns("tavola")
            .use_db("main")
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        Self::define_schema(&db).await?;

        tracing::info!("Database ready at {db_path} (SurrealDB RocksDB)");

        Ok(Self { db })
    }

    async fn define_schema(db: &Surreal<Db>) -> Result<(), AppError> {
        db.query("DEFINE TABLE IF NOT EXISTS reservation SCHEMALESS")
            .query("DEFINE INDEX IF NOT EXISTS reservation_email ON reservation FIELDS email")
            .query("DEFINE INDEX IF NOT EXISTS reservation_date ON reservation FIELDS date")
            .query("DEFINE INDEX IF NOT EXISTS reservation_status ON reservation FIELDS status")
            .query("DEFINE TABLE IF NOT EXISTS settings SCHEMALESS")
            .await
            .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;
        Ok(())
    }
}
