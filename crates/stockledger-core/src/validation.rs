//! # Validation Module
//!
//! Input validation rules for StockLedger.
//!
//! ## Validation Strategy
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                           │
//! │                                                                  │
//! │  Layer 1: THIS MODULE (pure rules)                               │
//! │  ├── empty names, negative prices, zero adjustments              │
//! │  └── rejected before anything touches the store                  │
//! │           │                                                      │
//! │           ▼                                                      │
//! │  Layer 2: Repository pre-checks (inside a storage transaction)   │
//! │  ├── referenced category/product/supplier exists                 │
//! │  └── failure rolls back, leaving no partial row                  │
//! │           │                                                      │
//! │           ▼                                                      │
//! │  Layer 3: Database (SQLite)                                      │
//! │  ├── NOT NULL / UNIQUE / CHECK constraints                       │
//! │  └── foreign key constraints                                     │
//! │                                                                  │
//! │  Defense in depth: multiple layers catch different errors        │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockledger_core::validation::{validate_name, validate_movement_quantity};
//! use stockledger_core::types::TransactionKind;
//!
//! validate_name("Widgets", "name").unwrap();
//! validate_movement_quantity(TransactionKind::Out, 3).unwrap();
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::TransactionKind;
use crate::MAX_NAME_LEN;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an entity display name (category, supplier, or product).
///
/// ## Rules
/// - Must not be empty or whitespace-only
/// - Must be at most [`MAX_NAME_LEN`] characters
///
/// ## Returns
/// The trimmed name, ready to persist.
pub fn validate_name(name: &str, field: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a product price.
///
/// ## Rules
/// - Must be finite (NaN and infinities carry no meaning as a price)
/// - Must be non-negative; zero is allowed (free items)
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a reorder level.
///
/// ## Rules
/// - Must be non-negative; zero disables the low-stock flag in practice
///   (stock strictly below zero still trips it)
pub fn validate_reorder_level(level: i64) -> ValidationResult<()> {
    if level < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "reorder_level".to_string(),
        });
    }

    Ok(())
}

/// Validates a movement quantity against its kind.
///
/// ## Rules
/// - IN and OUT: quantity must be a positive integer
/// - ADJUSTMENT: any non-zero integer (positive = stock found/increase,
///   negative = stock lost/decrease); zero is rejected because a no-op
///   transaction is meaningless
///
/// Note there is deliberately NO check here that an OUT stays within the
/// available stock: the ledger records the movement as stated and the
/// report layer surfaces any resulting shortfall.
pub fn validate_movement_quantity(kind: TransactionKind, quantity: i64) -> ValidationResult<()> {
    match kind {
        TransactionKind::In | TransactionKind::Out => {
            if quantity <= 0 {
                return Err(ValidationError::MustBePositive {
                    field: "quantity".to_string(),
                });
            }
        }
        TransactionKind::Adjustment => {
            if quantity == 0 {
                return Err(ValidationError::MustBeNonZero {
                    field: "quantity".to_string(),
                });
            }
        }
    }

    Ok(())
}

// =============================================================================
// Date Validators
// =============================================================================

/// Validates a calendar month number for the monthly summary.
///
/// ## Rules
/// - Must be in 1..=12
pub fn validate_month(month: u32) -> ValidationResult<()> {
    if !(1..=12).contains(&month) {
        return Err(ValidationError::OutOfRange {
            field: "month".to_string(),
            min: 1,
            max: 12,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("Widgets", "name").unwrap(), "Widgets");
        assert_eq!(validate_name("  Widgets  ", "name").unwrap(), "Widgets");

        assert!(validate_name("", "name").is_err());
        assert!(validate_name("   ", "name").is_err());
        assert!(validate_name(&"A".repeat(300), "name").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(9.99).is_ok());
        assert!(validate_price(0.0).is_ok());

        assert!(validate_price(-0.01).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_reorder_level() {
        assert!(validate_reorder_level(0).is_ok());
        assert!(validate_reorder_level(10).is_ok());
        assert!(validate_reorder_level(-1).is_err());
    }

    #[test]
    fn test_in_out_quantities_must_be_positive() {
        assert!(validate_movement_quantity(TransactionKind::In, 1).is_ok());
        assert!(validate_movement_quantity(TransactionKind::Out, 30).is_ok());

        assert!(validate_movement_quantity(TransactionKind::In, 0).is_err());
        assert!(validate_movement_quantity(TransactionKind::Out, 0).is_err());
        assert!(validate_movement_quantity(TransactionKind::In, -5).is_err());
        assert!(validate_movement_quantity(TransactionKind::Out, -5).is_err());
    }

    #[test]
    fn test_adjustment_quantity_may_be_negative_but_not_zero() {
        assert!(validate_movement_quantity(TransactionKind::Adjustment, 5).is_ok());
        assert!(validate_movement_quantity(TransactionKind::Adjustment, -5).is_ok());
        assert!(validate_movement_quantity(TransactionKind::Adjustment, 0).is_err());
    }

    #[test]
    fn test_validate_month() {
        assert!(validate_month(1).is_ok());
        assert!(validate_month(12).is_ok());
        assert!(validate_month(0).is_err());
        assert!(validate_month(13).is_err());
    }
}
