//! # Error Types
//!
//! Domain-specific error types for stockledger-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                         Error Types                              │
//! │                                                                  │
//! │  stockledger-core errors (this file)                             │
//! │  └── ValidationError  - Input validation failures                │
//! │                                                                  │
//! │  stockledger-db errors (separate crate)                          │
//! │  └── DbError          - Storage failures, constraint violations, │
//! │                         dangling references, in-use deletes      │
//! │                                                                  │
//! │  Flow: ValidationError → DbError → Driver renders the message    │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String
//! 4. Every error is recoverable by the caller; none is fatal

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used for early validation before any row is written, so a failed
/// validation leaves no side effects behind.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    ///
    /// ## When This Occurs
    /// - IN or OUT movement with quantity <= 0
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    ///
    /// ## When This Occurs
    /// - Product price < 0
    /// - Reorder level < 0
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Value must be non-zero.
    ///
    /// ## When This Occurs
    /// - ADJUSTMENT movement with quantity == 0: a no-op transaction is
    ///   meaningless and is rejected rather than recorded
    #[error("{field} must not be zero")]
    MustBeNonZero { field: String },

    /// Invalid format (e.g., non-finite price, month out of 1..=12).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");

        let err = ValidationError::MustBeNonZero {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must not be zero");
    }

    #[test]
    fn test_out_of_range_message() {
        let err = ValidationError::OutOfRange {
            field: "month".to_string(),
            min: 1,
            max: 12,
        };
        assert_eq!(err.to_string(), "month must be between 1 and 12");
    }
}
