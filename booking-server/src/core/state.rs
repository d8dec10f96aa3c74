use std::sync::Arc;

use shared::models::TableDefinition;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::booking::BookingService;
use crate::catalog;
use crate::core::Config;
use crate::db::DbService;

/// Server state, shared by every request handler
///
/// Cloning is shallow; all heavy members sit behind `Arc` (the SurrealDB
/// handle is internally shared).
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: Surreal<Db>,
    pub booking: BookingService,
    pub jwt_service: Arc<JwtService>,
    pub catalog: Arc<Vec<TableDefinition>>,
}

impl ServerState {
    /// Initialize the server state:
    /// 1. work directory layout
    /// 2. embedded database
    /// 3. floor-plan catalog
    /// 4. services (booking, JWT)
    ///
    /// # Panics
    ///
    /// Panics when the work directory or database cannot be initialized.
    pub async fn initialize(config: &Config) -> Self {
        config
            .ensure_work_dir_structure()
            .expect("Failed to create work directory structure");

        let db_path = config.database_dir().join("tavola.db");
        let db_service = DbService::new(&db_path.to_string_lossy())
            .await
            .expect("Failed to initialize database");

        let catalog = Arc::new(catalog::build_catalog());
        let booking = BookingService::new(&db_service, catalog.clone());
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        Self {
            config: config.clone(),
            db: db_service.db,
            booking,
            jwt_service,
            catalog,
        }
    }

    /// Build a state on top of an already opened database, for tests
    pub async fn with_db(config: Config, db_service: DbService) -> Self {
        let catalog = Arc::new(catalog::build_catalog());
        let booking = BookingService::new(&db_service, catalog.clone());
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        Self {
            config,
            db: db_service.db,
            booking,
            jwt_service,
            catalog,
        }
    }
}
