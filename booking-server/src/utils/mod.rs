//! Utility modules
//!
//! - [`logger`] - tracing setup
//! - [`time`] - "HH:MM" slot string parsing
//! - [`validation`] - inbound payload validation

pub mod logger;
pub mod time;
pub mod validation;

// Re-export error types from shared for convenience
pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
