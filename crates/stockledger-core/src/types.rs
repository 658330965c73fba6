//! # Domain Types
//!
//! Core domain types used throughout StockLedger.
//!
//! ## Type Hierarchy
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                             │
//! │                                                                  │
//! │  ┌───────────────┐  ┌───────────────┐  ┌────────────────────┐    │
//! │  │   Category    │  │   Supplier    │  │      Product       │    │
//! │  │  ───────────  │  │  ───────────  │  │  ────────────────  │    │
//! │  │  id           │  │  id           │  │  id                │    │
//! │  │  name (uniq)  │  │  name         │  │  name              │    │
//! │  │  description  │  │  contact_info │  │  category_id (FK)  │    │
//! │  └───────────────┘  │  address      │  │  price             │    │
//! │                     └───────────────┘  │  reorder_level     │    │
//! │                                        └────────────────────┘    │
//! │  ┌───────────────────┐  ┌─────────────────┐                      │
//! │  │ StockTransaction  │  │ TransactionKind │                      │
//! │  │  ───────────────  │  │  ─────────────  │                      │
//! │  │  product_id (FK)  │  │  In             │                      │
//! │  │  kind             │  │  Out            │                      │
//! │  │  quantity         │  │  Adjustment     │                      │
//! │  │  date             │  └─────────────────┘                      │
//! │  │  supplier_id (FK) │                                           │
//! │  └───────────────────┘                                           │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Ledger Law
//! `current_stock` is never a field on [`Product`]. For any product it is
//! always `Σ kind.signed(quantity)` over its transactions, so the log stays
//! the single source of truth for quantity state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Transaction Kind
// =============================================================================

/// The direction of an inventory movement.
///
/// Stored as TEXT with a CHECK constraint at the database level; this enum
/// is the application-level mirror of that constraint, so every switch over
/// it is exhaustive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "UPPERCASE"))]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    /// Stock received (purchase, restock). Quantity must be positive.
    In,
    /// Stock shipped (sale, consumption). Quantity must be positive.
    Out,
    /// Stock correction (count, shrinkage, found items). Quantity carries
    /// its own sign and must be non-zero.
    Adjustment,
}

impl TransactionKind {
    /// Returns the directionally-adjusted quantity for this movement:
    /// `+quantity` for IN, `-quantity` for OUT, and the raw (possibly
    /// negative) quantity for ADJUSTMENT.
    ///
    /// Summing this over a product's transactions yields its current stock.
    #[inline]
    pub const fn signed(&self, quantity: i64) -> i64 {
        match self {
            TransactionKind::In => quantity,
            TransactionKind::Out => -quantity,
            TransactionKind::Adjustment => quantity,
        }
    }

    /// The TEXT value persisted in the `transaction_type` column.
    pub const fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::In => "IN",
            TransactionKind::Out => "OUT",
            TransactionKind::Adjustment => "ADJUSTMENT",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Category
// =============================================================================

/// A product category.
///
/// Names are unique (case-sensitive exact match). A category cannot be
/// deleted while any product still references it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Category {
    /// Surrogate key (SQLite rowid).
    pub id: i64,
    /// Unique, non-empty display name.
    pub name: String,
    /// Optional free-form description.
    pub description: Option<String>,
}

// =============================================================================
// Supplier
// =============================================================================

/// A supplier of inventory.
///
/// Conventionally referenced by IN transactions. A supplier cannot be
/// deleted while any transaction still references it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Supplier {
    pub id: i64,
    /// Non-empty display name.
    pub name: String,
    /// Contact details (email, phone).
    pub contact_info: Option<String>,
    pub address: Option<String>,
}

// =============================================================================
// Product
// =============================================================================

/// A tracked product.
///
/// Note there is no stock field here: stock is derived from the transaction
/// log on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    /// Non-empty display name.
    pub name: String,
    pub description: Option<String>,
    /// Owning category, if any. Must reference an existing category when set.
    pub category_id: Option<i64>,
    /// Unit price. Non-negative; zero is allowed (free items).
    pub price: f64,
    /// Threshold below which the product is flagged low-stock.
    pub reorder_level: i64,
}

// =============================================================================
// Stock Transaction
// =============================================================================

/// A recorded inventory movement - one row in the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct StockTransaction {
    pub id: i64,
    pub product_id: i64,
    /// Movement direction. Persisted as the `transaction_type` column.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "transaction_type"))]
    pub kind: TransactionKind,
    /// Raw quantity as entered. Positive for IN/OUT; signed for ADJUSTMENT.
    pub quantity: i64,
    /// When the movement happened. Defaults to acceptance time; explicit
    /// for backdated entries.
    pub date: DateTime<Utc>,
    /// Source supplier, conventionally set for IN movements.
    pub supplier_id: Option<i64>,
    pub notes: Option<String>,
}

impl StockTransaction {
    /// The directionally-adjusted quantity this row contributes to stock.
    #[inline]
    pub fn signed_quantity(&self) -> i64 {
        self.kind.signed(self.quantity)
    }
}

/// Input for recording a new ledger transaction.
///
/// `date` is optional: `None` means "the moment of acceptance".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub product_id: i64,
    pub kind: TransactionKind,
    pub quantity: i64,
    pub date: Option<DateTime<Utc>>,
    pub supplier_id: Option<i64>,
    pub notes: Option<String>,
}

impl NewTransaction {
    /// Creates a movement with default timestamp and no supplier or notes.
    pub fn new(product_id: i64, kind: TransactionKind, quantity: i64) -> Self {
        NewTransaction {
            product_id,
            kind,
            quantity,
            date: None,
            supplier_id: None,
            notes: None,
        }
    }

    /// Sets an explicit timestamp (for backdated entries).
    pub fn at(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Sets the source supplier.
    pub fn from_supplier(mut self, supplier_id: i64) -> Self {
        self.supplier_id = Some(supplier_id);
        self
    }

    /// Attaches free-form notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

// =============================================================================
// Ledger Fold
// =============================================================================

/// Folds a sequence of movements into a stock level.
///
/// This is the reference implementation of the ledger law; the SQL
/// aggregation in stockledger-db must agree with it for every input.
///
/// ## Example
/// ```rust
/// use stockledger_core::types::{current_stock_of, TransactionKind};
///
/// let moves = [
///     (TransactionKind::In, 20),
///     (TransactionKind::Out, 3),
///     (TransactionKind::Adjustment, -5),
/// ];
/// assert_eq!(current_stock_of(moves), 12);
/// ```
pub fn current_stock_of<I>(movements: I) -> i64
where
    I: IntoIterator<Item = (TransactionKind, i64)>,
{
    movements
        .into_iter()
        .map(|(kind, qty)| kind.signed(qty))
        .sum()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_quantity() {
        assert_eq!(TransactionKind::In.signed(10), 10);
        assert_eq!(TransactionKind::Out.signed(10), -10);
        assert_eq!(TransactionKind::Adjustment.signed(7), 7);
        assert_eq!(TransactionKind::Adjustment.signed(-7), -7);
    }

    #[test]
    fn test_kind_as_str_matches_check_constraint() {
        assert_eq!(TransactionKind::In.as_str(), "IN");
        assert_eq!(TransactionKind::Out.as_str(), "OUT");
        assert_eq!(TransactionKind::Adjustment.as_str(), "ADJUSTMENT");
    }

    #[test]
    fn test_ledger_conservation() {
        // IN=a, OUT=b, ADJUSTMENT=c => stock == a - b + c, in any order.
        let a = 40;
        let b = 15;
        let c = -4;

        let forward = [
            (TransactionKind::In, a),
            (TransactionKind::Out, b),
            (TransactionKind::Adjustment, c),
        ];
        let reverse = [
            (TransactionKind::Adjustment, c),
            (TransactionKind::Out, b),
            (TransactionKind::In, a),
        ];

        assert_eq!(current_stock_of(forward), a - b + c);
        assert_eq!(current_stock_of(reverse), a - b + c);
    }

    #[test]
    fn test_stock_can_go_negative() {
        // OUT movements are not guarded; the fold just reflects the log.
        let moves = [(TransactionKind::In, 17), (TransactionKind::Out, 30)];
        assert_eq!(current_stock_of(moves), -13);
    }

    #[test]
    fn test_new_transaction_builder() {
        let now = Utc::now();
        let tx = NewTransaction::new(1, TransactionKind::In, 20)
            .at(now)
            .from_supplier(3)
            .with_notes("Initial stock");

        assert_eq!(tx.product_id, 1);
        assert_eq!(tx.date, Some(now));
        assert_eq!(tx.supplier_id, Some(3));
        assert_eq!(tx.notes.as_deref(), Some("Initial stock"));
    }

    #[test]
    fn test_kind_serde_uppercase() {
        let json = serde_json::to_string(&TransactionKind::Adjustment).unwrap();
        assert_eq!(json, "\"ADJUSTMENT\"");

        let kind: TransactionKind = serde_json::from_str("\"OUT\"").unwrap();
        assert_eq!(kind, TransactionKind::Out);
    }
}
