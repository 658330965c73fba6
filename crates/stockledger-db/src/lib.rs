//! # stockledger-db: Database Layer for StockLedger
//!
//! This crate provides the durable store, the ledger engine, and the report
//! engine for the StockLedger inventory system. It uses SQLite for local
//! storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                     StockLedger Data Flow                        │
//! │                                                                  │
//! │  Driver (menu / CLI)                                             │
//! │       │                                                          │
//! │       ▼                                                          │
//! │  ┌────────────────────────────────────────────────────────────┐  │
//! │  │                 stockledger-db (THIS CRATE)                │  │
//! │  │                                                            │  │
//! │  │  ┌──────────┐  ┌─────────────────┐  ┌──────────────────┐   │  │
//! │  │  │ Database │  │ Catalog repos   │  │ Ledger + Reports │   │  │
//! │  │  │ (pool.rs)│  │ (category,      │  │ (sole tx writer, │   │  │
//! │  │  │          │◄─│  supplier,      │  │  read-only       │   │  │
//! │  │  │ SqlitePool  │  product)       │  │  aggregation)    │   │  │
//! │  │  └──────────┘  └─────────────────┘  └──────────────────┘   │  │
//! │  │                                                            │  │
//! │  └────────────────────────────────────────────────────────────┘  │
//! │       │                                                          │
//! │       ▼                                                          │
//! │  SQLite database file (WAL, foreign keys ON)                     │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Catalog repositories, ledger engine, report engine
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stockledger_db::{Database, DbConfig};
//! use stockledger_core::{NewTransaction, TransactionKind};
//!
//! let db = Database::new(DbConfig::new("path/to/inventory.db")).await?;
//!
//! let widgets = db.categories().create("Widgets", None).await?;
//! let gadget = db
//!     .products()
//!     .create("Gadget", None, Some(widgets.id), 9.99, 5)
//!     .await?;
//!
//! db.ledger()
//!     .record(NewTransaction::new(gadget.id, TransactionKind::In, 20))
//!     .await?;
//!
//! assert_eq!(db.ledger().current_stock(gadget.id).await?, 20);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::category::CategoryRepository;
pub use repository::ledger::Ledger;
pub use repository::product::ProductRepository;
pub use repository::report::Reports;
pub use repository::supplier::SupplierRepository;
