//! # Ledger Engine
//!
//! The sole writer of inventory transactions and the authority on stock
//! arithmetic.
//!
//! ## The Ledger Law
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                      Stock Derivation                            │
//! │                                                                  │
//! │  inventory_transactions (the ledger)                             │
//! │  ┌────────────┬──────────┬──────────┐                            │
//! │  │ IN     20  │ OUT   3  │ ADJ  -5  │  ...                       │
//! │  └────────────┴──────────┴──────────┘                            │
//! │        │           │          │                                  │
//! │        ▼           ▼          ▼                                  │
//! │      +20          -3         -5      (signed quantities)         │
//! │        └───────────┴──────────┘                                  │
//! │                    ▼                                             │
//! │          current_stock = 12                                      │
//! │                                                                  │
//! │  Never stored. Always recomputed from the log, so it can never   │
//! │  drift from the transactions that produced it.                   │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Negative-Stock Guard
//! OUT transactions are accepted even when they drive computed stock below
//! zero. The ledger records what happened; the report layer surfaces the
//! shortfall. Adding a blocking check here would change this engine from a
//! ledger of record into a real-time inventory lock and must not be done
//! without product-level confirmation.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use stockledger_core::validation::validate_movement_quantity;
use stockledger_core::{LowStockProduct, NewTransaction, StockTransaction, TransactionRow};

/// Signed quantity of a single ledger row, as a SQL expression over the
/// `t` alias. Must agree with `TransactionKind::signed` for every row the
/// CHECK constraint admits.
pub(crate) const SIGNED_QTY: &str = "CASE t.transaction_type \
     WHEN 'IN' THEN t.quantity \
     WHEN 'OUT' THEN -t.quantity \
     ELSE t.quantity END";

/// Signed-sum aggregation over ledger rows, shared by every stock query.
pub(crate) const SIGNED_SUM: &str = "COALESCE(SUM(CASE t.transaction_type \
     WHEN 'IN' THEN t.quantity \
     WHEN 'OUT' THEN -t.quantity \
     ELSE t.quantity END), 0)";

/// The low-stock base query: products strictly below their reorder level,
/// ascending by stock, ties by product id. `extra_columns` is spliced into
/// the SELECT list (empty, or starting with ", ") so the alert report can
/// enrich the same row set instead of restating the query.
pub(crate) fn low_stock_query(extra_columns: &str) -> String {
    format!(
        "SELECT \
             p.id AS product_id, \
             p.name AS product_name, \
             c.name AS category_name, \
             {SIGNED_SUM} AS current_stock, \
             p.reorder_level AS reorder_level, \
             p.reorder_level - {SIGNED_SUM} AS shortfall{extra_columns} \
         FROM products p \
         LEFT JOIN categories c ON p.category_id = c.id \
         LEFT JOIN inventory_transactions t ON t.product_id = p.id \
         GROUP BY p.id, p.name, c.name, p.reorder_level \
         HAVING current_stock < p.reorder_level \
         ORDER BY current_stock ASC, p.id ASC"
    )
}

/// The ledger engine.
#[derive(Debug, Clone)]
pub struct Ledger {
    pool: SqlitePool,
}

impl Ledger {
    /// Creates a new Ledger over the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        Ledger { pool }
    }

    /// Records an inventory movement.
    ///
    /// Validation and the referential checks run inside one storage
    /// transaction with the insert, so any failure leaves the ledger row
    /// count unchanged.
    ///
    /// ## Errors
    /// * `Validation` - IN/OUT quantity <= 0, or ADJUSTMENT quantity == 0
    /// * `UnknownReference` - product, or supplier if given, does not exist
    ///
    /// ## Returns
    /// The persisted row, including its assigned id and timestamp (the
    /// moment of acceptance when the movement carried none).
    pub async fn record(&self, movement: NewTransaction) -> DbResult<StockTransaction> {
        validate_movement_quantity(movement.kind, movement.quantity)?;

        let date = movement.date.unwrap_or_else(Utc::now);

        debug!(
            product_id = %movement.product_id,
            kind = %movement.kind,
            quantity = %movement.quantity,
            "Recording transaction"
        );

        let mut tx = self.pool.begin().await?;

        let product_exists: Option<i64> = sqlx::query_scalar("SELECT id FROM products WHERE id = ?1")
            .bind(movement.product_id)
            .fetch_optional(&mut *tx)
            .await?;
        if product_exists.is_none() {
            return Err(DbError::unknown_reference("Product", movement.product_id));
        }

        if let Some(supplier_id) = movement.supplier_id {
            let supplier_exists: Option<i64> =
                sqlx::query_scalar("SELECT id FROM suppliers WHERE id = ?1")
                    .bind(supplier_id)
                    .fetch_optional(&mut *tx)
                    .await?;
            if supplier_exists.is_none() {
                return Err(DbError::unknown_reference("Supplier", supplier_id));
            }
        }

        let result = sqlx::query(
            "INSERT INTO inventory_transactions \
             (product_id, transaction_type, quantity, date, supplier_id, notes) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(movement.product_id)
        .bind(movement.kind)
        .bind(movement.quantity)
        .bind(date)
        .bind(movement.supplier_id)
        .bind(movement.notes.as_deref())
        .execute(&mut *tx)
        .await?;
        let id = result.last_insert_rowid();

        tx.commit().await?;

        Ok(StockTransaction {
            id,
            product_id: movement.product_id,
            kind: movement.kind,
            quantity: movement.quantity,
            date,
            supplier_id: movement.supplier_id,
            notes: movement.notes,
        })
    }

    /// Returns the current stock level for a product: the signed sum over
    /// its ledger rows, computed freshly on every call.
    ///
    /// ## Errors
    /// * `UnknownReference` - no product with this id
    pub async fn current_stock(&self, product_id: i64) -> DbResult<i64> {
        let product_exists: Option<i64> = sqlx::query_scalar("SELECT id FROM products WHERE id = ?1")
            .bind(product_id)
            .fetch_optional(&self.pool)
            .await?;
        if product_exists.is_none() {
            return Err(DbError::unknown_reference("Product", product_id));
        }

        let stock: i64 = sqlx::query_scalar(&format!(
            "SELECT {SIGNED_SUM} FROM inventory_transactions t WHERE t.product_id = ?1"
        ))
        .bind(product_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(stock)
    }

    /// Returns every product whose current stock is strictly below its
    /// reorder level, ordered by ascending stock, ties broken by product id
    /// ascending. A product sitting exactly at its reorder level is NOT low.
    pub async fn low_stock_products(&self) -> DbResult<Vec<LowStockProduct>> {
        let rows = sqlx::query_as::<_, LowStockProduct>(&low_stock_query(""))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    /// Gets a single ledger row by id, enriched with product and supplier
    /// names.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<TransactionRow>> {
        let row = sqlx::query_as::<_, TransactionRow>(
            "SELECT \
                 t.id, t.product_id, p.name AS product_name, \
                 t.transaction_type, t.quantity, t.date, \
                 t.supplier_id, s.name AS supplier_name, t.notes \
             FROM inventory_transactions t \
             JOIN products p ON t.product_id = p.id \
             LEFT JOIN suppliers s ON t.supplier_id = s.id \
             WHERE t.id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Lists the most recent ledger rows (newest first), enriched with
    /// product and supplier names.
    pub async fn list(&self, limit: u32) -> DbResult<Vec<TransactionRow>> {
        let rows = sqlx::query_as::<_, TransactionRow>(
            "SELECT \
                 t.id, t.product_id, p.name AS product_name, \
                 t.transaction_type, t.quantity, t.date, \
                 t.supplier_id, s.name AS supplier_name, t.notes \
             FROM inventory_transactions t \
             JOIN products p ON t.product_id = p.id \
             LEFT JOIN suppliers s ON t.supplier_id = s.id \
             ORDER BY t.date DESC, t.id DESC \
             LIMIT ?1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Counts ledger rows (for diagnostics and phantom-write tests).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM inventory_transactions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
