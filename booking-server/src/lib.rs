//! Tavola Booking Server - restaurant table reservation backend
//!
//! # Overview
//!
//! - **Public booking** (`api/booking`): slot listing and reservation
//!   requests from the booking widget
//! - **Admin console** (`api/reservations`, `api/tables`, `api/settings`):
//!   JWT-guarded reservation management, floor map, and settings
//! - **Availability core** (`availability`): table resolution, capacity,
//!   dedup, and slot enumeration as pure functions
//! - **Storage** (`db`): embedded SurrealDB
//!
//! # Module structure
//!
//! ```text
//! booking-server/src/
//! ├── core/          # config, state, server
//! ├── auth/          # JWT auth for the admin console
//! ├── api/           # HTTP routes and handlers
//! ├── availability/  # table/capacity/slot computations
//! ├── booking.rs     # reservation pipeline
//! ├── catalog.rs     # fixed floor plan
//! ├── db/            # database layer
//! └── utils/         # logging, validation, time parsing
//! ```

pub mod api;
pub mod auth;
pub mod availability;
pub mod booking;
pub mod catalog;
pub mod core;
pub mod db;
pub mod utils;

// Re-export common types
pub use auth::{CurrentUser, JwtService};
pub use booking::BookingService;
pub use core::{Config, Server, ServerState};
pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use utils::logger::{init_logger, init_logger_with_file};

/// Prepare the process environment: .env file, work directory, logging
pub fn setup_environment() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    config.ensure_work_dir_structure()?;

    let log_dir = config.log_dir();
    let log_level = std::env::var("LOG_LEVEL").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.to_str());

    Ok(())
}
