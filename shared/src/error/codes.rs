//! Unified error codes for the dhobi workspace
//!
//! This module defines all error codes used across dhobi-server and
//! civic-client. Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 5xxx: Payment errors
//! - 6xxx: Customer errors
//! - 7xxx: Civic data errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
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

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order already completed
    OrderAlreadyCompleted = 4003,
    /// Quantity outside the accepted range
    OrderInvalidQuantity = 4008,
    /// Rate per item is negative or too large
    OrderInvalidRate = 4009,

    // ==================== 5xxx: Payment ====================
    /// Payment amount is not positive or exceeds the limit
    PaymentInvalidAmount = 5002,
    /// Unknown payment type
    PaymentInvalidType = 5003,

    // ==================== 6xxx: Customer ====================
    /// Customer not found
    CustomerNotFound = 6001,
    /// Customer phone is already registered
    CustomerPhoneExists = 6002,

    // ==================== 7xxx: Civic ====================
    /// Complaint not found for tracking id
    ComplaintNotFound = 7001,
    /// Village not found
    VillageNotFound = 7002,
    /// Every upstream source failed
    UpstreamUnavailable = 7003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Network error
    NetworkError = 9003,
    /// Timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,

    // ==================== 94xx: Storage ====================
    /// Persisted data could not be parsed
    StorageCorrupted = 9403,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Whether this code represents success
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Default human-readable message
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

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderAlreadyCompleted => "Order has already been completed",
            ErrorCode::OrderInvalidQuantity => "Invalid item quantity",
            ErrorCode::OrderInvalidRate => "Invalid rate per item",

            // Payment
            ErrorCode::PaymentInvalidAmount => "Invalid payment amount",
            ErrorCode::PaymentInvalidType => "Invalid payment type",

            // Customer
            ErrorCode::CustomerNotFound => "Customer not found",
            ErrorCode::CustomerPhoneExists => "Customer phone already registered",

            // Civic
            ErrorCode::ComplaintNotFound => "Complaint not found",
            ErrorCode::VillageNotFound => "Village not found",
            ErrorCode::UpstreamUnavailable => "No upstream data source available",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::StorageCorrupted => "Stored data is corrupted",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
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

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4003 => Ok(ErrorCode::OrderAlreadyCompleted),
            4008 => Ok(ErrorCode::OrderInvalidQuantity),
            4009 => Ok(ErrorCode::OrderInvalidRate),

            // Payment
            5002 => Ok(ErrorCode::PaymentInvalidAmount),
            5003 => Ok(ErrorCode::PaymentInvalidType),

            // Customer
            6001 => Ok(ErrorCode::CustomerNotFound),
            6002 => Ok(ErrorCode::CustomerPhoneExists),

            // Civic
            7001 => Ok(ErrorCode::ComplaintNotFound),
            7002 => Ok(ErrorCode::VillageNotFound),
            7003 => Ok(ErrorCode::UpstreamUnavailable),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),
            9403 => Ok(ErrorCode::StorageCorrupted),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::OrderNotFound.code(), 4001);
        assert_eq!(ErrorCode::PaymentInvalidAmount.code(), 5002);
        assert_eq!(ErrorCode::CustomerNotFound.code(), 6001);
        assert_eq!(ErrorCode::ComplaintNotFound.code(), 7001);
        assert_eq!(ErrorCode::StorageCorrupted.code(), 9403);
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(5003), Ok(ErrorCode::PaymentInvalidType));
        assert_eq!(ErrorCode::try_from(7003), Ok(ErrorCode::UpstreamUnavailable));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
        assert_eq!(
            InvalidErrorCode(4242).to_string(),
            "invalid error code: 4242"
        );
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::CustomerNotFound).unwrap();
        assert_eq!(json, "6001");

        let code: ErrorCode = serde_json::from_str("4008").unwrap();
        assert_eq!(code, ErrorCode::OrderInvalidQuantity);

        assert!(serde_json::from_str::<ErrorCode>("1234").is_err());
    }

    #[test]
    fn test_roundtrip_all_codes() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::NotFound,
            ErrorCode::OrderAlreadyCompleted,
            ErrorCode::OrderInvalidRate,
            ErrorCode::CustomerPhoneExists,
            ErrorCode::VillageNotFound,
            ErrorCode::TimeoutError,
            ErrorCode::ConfigError,
        ];
        for code in codes {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::NetworkError.to_string(), "9003");
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::Unknown.is_success());
    }
}
