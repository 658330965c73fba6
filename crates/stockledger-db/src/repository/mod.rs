//! # Repository Module
//!
//! Database repositories and engines for StockLedger.
//!
//! ## Repository Pattern
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                 Repository Pattern Explained                     │
//! │                                                                  │
//! │  The Repository pattern abstracts database access behind a       │
//! │  clean API, and keeps all SQL in one place per concern.          │
//! │                                                                  │
//! │  Driver                                                          │
//! │     │  db.ledger().record(movement)                              │
//! │     ▼                                                            │
//! │  Ledger                                                          │
//! │  ├── record(&self, movement)         (validates, then inserts    │
//! │  │                                    inside one storage tx)     │
//! │  ├── current_stock(&self, id)        (fresh signed sum)          │
//! │  └── low_stock_products(&self)                                   │
//! │     │                                                            │
//! │     ▼                                                            │
//! │  SQLite Database                                                 │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`category::CategoryRepository`] - Category CRUD (uniqueness, in-use guard)
//! - [`supplier::SupplierRepository`] - Supplier CRUD (in-use guard)
//! - [`product::ProductRepository`] - Product CRUD and search
//! - [`ledger::Ledger`] - Transaction recording and stock arithmetic
//! - [`report::Reports`] - Read-only aggregation reports

pub mod category;
pub mod ledger;
pub mod product;
pub mod report;
pub mod supplier;
