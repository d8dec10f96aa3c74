//! Shared types for the Tavola reservation system
//!
//! Common types used by the booking server and its clients: domain models,
//! error types, and response structures.

pub mod error;
pub mod models;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
