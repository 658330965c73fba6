//! # Database Error Types
//!
//! Error types for storage operations.
//!
//! ## Error Flow
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                             │
//! │                                                                  │
//! │  SQLite Error (sqlx::Error)                                      │
//! │       │                                                          │
//! │       ▼                                                          │
//! │  DbError (this module) ← Adds context and categorization         │
//! │       │                                                          │
//! │       ▼                                                          │
//! │  Driver renders the message and re-prompts                       │
//! │                                                                  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant is recoverable by the caller; none is fatal to the
//! process. This crate never prints - it returns error values.

use thiserror::Error;

use stockledger_core::ValidationError;

/// Storage operation errors.
///
/// These wrap sqlx errors and surface the taxonomy the repositories
/// enforce: missing rows, broken uniqueness, dangling references, and
/// deletes blocked by dependents.
#[derive(Debug, Error)]
pub enum DbError {
    /// An id-based operation targeted a missing row.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: i64 },

    /// Unique constraint violation (duplicate category name).
    #[error("Duplicate {field}: '{value}' already exists")]
    UniqueViolation { field: String, value: String },

    /// A write referenced a row that does not exist.
    ///
    /// ## When This Occurs
    /// - Creating a product with an unknown category id
    /// - Recording a transaction against an unknown product or supplier
    #[error("{entity} does not exist: {id}")]
    UnknownReference { entity: String, id: i64 },

    /// Foreign key constraint surfaced by SQLite itself. The repositories
    /// pre-check references, so reaching this means a race or a bypassed
    /// code path; the message is kept for diagnostics.
    #[error("Foreign key violation: {message}")]
    ForeignKeyViolation { message: String },

    /// Delete blocked because dependent rows still reference the target.
    #[error("Cannot delete {entity} {id}: {dependents} dependent {dependent_kind} row(s) reference it")]
    InUse {
        entity: String,
        id: i64,
        dependents: i64,
        dependent_kind: String,
    },

    /// Input failed a business validation rule; nothing was written.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Database connection failed.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: impl Into<String>, id: i64) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id,
        }
    }

    /// Creates an UnknownReference error.
    pub fn unknown_reference(entity: impl Into<String>, id: i64) -> Self {
        DbError::UnknownReference {
            entity: entity.into(),
            id,
        }
    }

    /// Creates an InUse error.
    pub fn in_use(
        entity: impl Into<String>,
        id: i64,
        dependents: i64,
        dependent_kind: impl Into<String>,
    ) -> Self {
        DbError::InUse {
            entity: entity.into(),
            id,
            dependents,
            dependent_kind: dependent_kind.into(),
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound    → DbError::NotFound
/// sqlx::Error::Database       → Analyze message for constraint type
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound {
                entity: "Record".to_string(),
                id: 0,
            },

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite constraint messages:
                // UNIQUE: "UNIQUE constraint failed: <table>.<column>"
                // FK:     "FOREIGN KEY constraint failed"
                if msg.contains("UNIQUE constraint failed") {
                    let field = msg
                        .split("UNIQUE constraint failed: ")
                        .nth(1)
                        .unwrap_or("unknown")
                        .to_string();
                    DbError::UniqueViolation {
                        field,
                        value: "unknown".to_string(),
                    }
                } else if msg.contains("FOREIGN KEY constraint failed") {
                    DbError::ForeignKeyViolation {
                        message: msg.to_string(),
                    }
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
