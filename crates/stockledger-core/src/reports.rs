//! # Report Row Types
//!
//! The shapes returned by the report engine in stockledger-db.
//!
//! ## Design
//! These are plain data rows: the report engine fills them from aggregation
//! queries over the ledger and the driver is responsible for all formatting
//! and display. The core has no knowledge of presentation.
//!
//! Aggregates are always computed from the transaction log at call time, so
//! two calls with no intervening writes return identical rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::TransactionKind;

// =============================================================================
// Inventory Levels
// =============================================================================

/// One row of the inventory-levels report: a product, its derived stock,
/// and the value of the stock on hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct InventoryLevelRow {
    pub product_id: i64,
    pub product_name: String,
    /// NULL for uncategorized products.
    pub category_name: Option<String>,
    /// Signed sum over the product's ledger. May be negative.
    pub current_stock: i64,
    pub reorder_level: i64,
    pub price: f64,
    /// `price * current_stock`.
    pub stock_value: f64,
}

// =============================================================================
// Low Stock
// =============================================================================

/// A product whose derived stock is strictly below its reorder level.
///
/// Returned by the ledger engine ordered by ascending stock (ties broken by
/// product id ascending).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct LowStockProduct {
    pub product_id: i64,
    pub product_name: String,
    pub category_name: Option<String>,
    pub current_stock: i64,
    pub reorder_level: i64,
    /// `reorder_level - current_stock`: how many units to order to get back
    /// to the threshold.
    pub shortfall: i64,
}

/// A low-stock row enriched with the supplier of the product's most recent
/// IN transaction - the natural party to reorder from. Both fields are NULL
/// when the product has never been received from a supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct LowStockAlertRow {
    pub product_id: i64,
    pub product_name: String,
    pub category_name: Option<String>,
    pub current_stock: i64,
    pub reorder_level: i64,
    pub shortfall: i64,
    pub last_supplier_id: Option<i64>,
    pub last_supplier_name: Option<String>,
}

// =============================================================================
// Valuation
// =============================================================================

/// Per-category slice of the inventory valuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct CategoryValuation {
    /// NULL groups the value of uncategorized products.
    pub category_name: Option<String>,
    pub product_count: i64,
    pub total_value: f64,
}

/// Total on-hand value across all products, with the per-category breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryValuation {
    /// Σ over products of `price * current_stock`.
    pub total_value: f64,
    /// Unweighted mean of product prices; 0.0 with an empty catalog.
    pub avg_price: f64,
    /// Number of products in the catalog, stocked or not.
    pub total_products: i64,
    pub by_category: Vec<CategoryValuation>,
}

// =============================================================================
// Transaction History
// =============================================================================

/// Filter for the transaction-history report. All fields optional; `None`
/// means "no constraint on this dimension".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionFilter {
    pub product_id: Option<i64>,
    /// Inclusive lower bound on `date`.
    pub from: Option<DateTime<Utc>>,
    /// Exclusive upper bound on `date`.
    pub to: Option<DateTime<Utc>>,
    pub kind: Option<TransactionKind>,
}

impl TransactionFilter {
    /// Restricts to a single product.
    pub fn for_product(product_id: i64) -> Self {
        TransactionFilter {
            product_id: Some(product_id),
            ..Default::default()
        }
    }

    /// Restricts to `from <= date < to`.
    pub fn between(mut self, from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    /// Restricts to a single movement kind.
    pub fn of_kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }
}

/// One ledger row enriched with product and supplier names for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct TransactionRow {
    pub id: i64,
    pub product_id: i64,
    pub product_name: String,
    #[cfg_attr(feature = "sqlx", sqlx(rename = "transaction_type"))]
    pub kind: TransactionKind,
    pub quantity: i64,
    pub date: DateTime<Utc>,
    pub supplier_id: Option<i64>,
    pub supplier_name: Option<String>,
    pub notes: Option<String>,
}

// =============================================================================
// Rollups
// =============================================================================

/// Per-category aggregate. Categories with zero products or zero activity
/// still appear (left-join semantics).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct CategorySummaryRow {
    pub category_id: i64,
    pub category_name: String,
    pub product_count: i64,
    pub transaction_count: i64,
    /// Σ |quantity| over the category's transactions - gross units moved,
    /// regardless of direction.
    pub units_moved: i64,
    /// On-hand value of the category's products.
    pub total_value: f64,
}

/// Per-supplier aggregate. Suppliers with zero transactions still appear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SupplierSummaryRow {
    pub supplier_id: i64,
    pub supplier_name: String,
    pub transaction_count: i64,
    pub total_in: i64,
    pub total_out: i64,
    /// Distinct products this supplier's transactions touched.
    pub products_supplied: i64,
}

// =============================================================================
// Monthly Summary
// =============================================================================

/// Calendar-month rollup of ledger activity.
///
/// Boundaries: inclusive of the first instant of the month, exclusive of the
/// first instant of the next month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    pub total_in: i64,
    pub total_out: i64,
    /// Σ signed quantity over the month - positive if stock grew.
    pub net_change: i64,
    pub transaction_count: i64,
    /// Distinct products with at least one movement this month.
    pub products_touched: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_builder() {
        let filter = TransactionFilter::for_product(7).of_kind(TransactionKind::Out);
        assert_eq!(filter.product_id, Some(7));
        assert_eq!(filter.kind, Some(TransactionKind::Out));
        assert!(filter.from.is_none());
        assert!(filter.to.is_none());
    }

    #[test]
    fn test_empty_filter_is_unconstrained() {
        let filter = TransactionFilter::default();
        assert!(filter.product_id.is_none());
        assert!(filter.kind.is_none());
    }
}
