//! Unified error codes for the Tavola reservation system
//!
//! This module defines all error codes used across the booking server and
//! its clients. Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Reservation errors
//! - 3xxx: Table / availability errors
//! - 4xxx: Settings errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,

    // ==================== 2xxx: Reservation ====================
    /// Reservation not found
    ReservationNotFound = 2001,
    /// The email already has an active (pending/confirmed) reservation
    DuplicateReservation = 2002,
    /// The whole-day seat cap would be exceeded
    CapacityExceeded = 2003,
    /// The restaurant is closed on the requested day
    RestaurantClosed = 2004,
    /// The requested time is outside opening hours
    TimeOutsideOpeningHours = 2005,

    // ==================== 3xxx: Table ====================
    /// Table not found in the catalog
    TableNotFound = 3001,
    /// Table is already held by an active reservation for the slot
    TableOccupied = 3002,
    /// No table fits the party size or all fitting tables are occupied
    NoTableAvailable = 3003,
    /// The catalog entry is a structure and cannot be booked
    TableNotBookable = 3004,

    // ==================== 4xxx: Settings ====================
    /// Settings payload failed validation
    SettingsInvalid = 4001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid username or password",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",

            // Reservation
            ErrorCode::ReservationNotFound => "Reservation not found",
            ErrorCode::DuplicateReservation => {
                "An active reservation already exists for this email"
            }
            ErrorCode::CapacityExceeded => "Not enough seats available for this date",
            ErrorCode::RestaurantClosed => "The restaurant is closed on this day",
            ErrorCode::TimeOutsideOpeningHours => "Requested time is outside opening hours",

            // Table
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::TableOccupied => "Table is already reserved for this slot",
            ErrorCode::NoTableAvailable => "No table available for this party size",
            ErrorCode::TableNotBookable => "This catalog entry cannot be booked",

            // Settings
            ErrorCode::SettingsInvalid => "Restaurant settings are invalid",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),

            // Reservation
            2001 => Ok(ErrorCode::ReservationNotFound),
            2002 => Ok(ErrorCode::DuplicateReservation),
            2003 => Ok(ErrorCode::CapacityExceeded),
            2004 => Ok(ErrorCode::RestaurantClosed),
            2005 => Ok(ErrorCode::TimeOutsideOpeningHours),

            // Table
            3001 => Ok(ErrorCode::TableNotFound),
            3002 => Ok(ErrorCode::TableOccupied),
            3003 => Ok(ErrorCode::NoTableAvailable),
            3004 => Ok(ErrorCode::TableNotBookable),

            // Settings
            4001 => Ok(ErrorCode::SettingsInvalid),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9005 => Ok(ErrorCode::ConfigError),

            other => Err(InvalidErrorCode(other)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::DuplicateReservation.code(), 2002);
        assert_eq!(ErrorCode::NoTableAvailable.code(), 3003);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_round_trip() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::CapacityExceeded,
            ErrorCode::TableOccupied,
            ErrorCode::SettingsInvalid,
            ErrorCode::InternalError,
        ] {
            let value: u16 = code.into();
            assert_eq!(ErrorCode::try_from(value), Ok(code));
        }
    }

    #[test]
    fn test_invalid_code() {
        assert_eq!(ErrorCode::try_from(12345), Err(InvalidErrorCode(12345)));
    }

    #[test]
    fn test_serde_as_u16() {
        let json = serde_json::to_string(&ErrorCode::CapacityExceeded).unwrap();
        assert_eq!(json, "2003");
        let back: ErrorCode = serde_json::from_str("2003").unwrap();
        assert_eq!(back, ErrorCode::CapacityExceeded);
    }
}
