//! # stockledger-core: Pure Business Logic for StockLedger
//!
//! This crate is the **heart** of StockLedger. It contains the domain types,
//! the ledger arithmetic, and the validation rules as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                   StockLedger Architecture                       │
//! │                                                                  │
//! │  ┌────────────────────────────────────────────────────────────┐  │
//! │  │                  Driver (CLI menu, etc.)                   │  │
//! │  │     prompts ──► calls the engines ──► formats the rows     │  │
//! │  └────────────────────────────┬───────────────────────────────┘  │
//! │                               │                                  │
//! │  ┌────────────────────────────▼───────────────────────────────┐  │
//! │  │            ★ stockledger-core (THIS CRATE) ★               │  │
//! │  │                                                            │  │
//! │  │  ┌──────────┐ ┌───────────┐ ┌──────────┐ ┌────────────┐    │  │
//! │  │  │  types   │ │  reports  │ │  error   │ │ validation │    │  │
//! │  │  │ Product  │ │ row types │ │ typed    │ │  rules     │    │  │
//! │  │  │ Ledger   │ │ summaries │ │ enums    │ │  checks    │    │  │
//! │  │  └──────────┘ └───────────┘ └──────────┘ └────────────┘    │  │
//! │  │                                                            │  │
//! │  │  NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS        │  │
//! │  └────────────────────────────┬───────────────────────────────┘  │
//! │                               │                                  │
//! │  ┌────────────────────────────▼───────────────────────────────┐  │
//! │  │              stockledger-db (Database Layer)               │  │
//! │  │        SQLite queries, migrations, ledger, reports         │  │
//! │  └────────────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Category, Supplier, Product, StockTransaction)
//! - [`reports`] - Report row types returned by the report engine
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Ledger law**: current stock is always the fold of signed transaction
//!    quantities - never a stored counter that can drift
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Closed enums**: the transaction type is a Rust enum, never a string
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use stockledger_core::types::TransactionKind;
//!
//! // The directionally-adjusted quantity summed to obtain stock.
//! assert_eq!(TransactionKind::In.signed(20), 20);
//! assert_eq!(TransactionKind::Out.signed(3), -3);
//! assert_eq!(TransactionKind::Adjustment.signed(-5), -5);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod reports;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stockledger_core::Product` instead of
// `use stockledger_core::types::Product`

pub use error::ValidationError;
pub use reports::*;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default reorder level assigned to products when the caller does not
/// supply one. Mirrors the `DEFAULT 10` column default in the schema.
pub const DEFAULT_REORDER_LEVEL: i64 = 10;

/// Maximum length accepted for entity names (categories, suppliers, products).
///
/// ## Business Reason
/// Keeps names renderable in tabular console output and guards against
/// accidental paste of large text into a name prompt.
pub const MAX_NAME_LEN: usize = 200;
