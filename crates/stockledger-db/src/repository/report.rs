//! # Report Engine
//!
//! Read-only aggregation queries over the store, always consistent with
//! current state at call time - no materialized snapshots, no caching
//! across calls. Calling any report twice with no intervening writes
//! returns identical rows.
//!
//! ## Report Catalogue
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  inventory_levels     product × stock × reorder × on-hand value  │
//! │  low_stock_alert      low-stock set + last IN supplier           │
//! │  inventory_valuation  Σ price·stock, per-category breakdown      │
//! │  transaction_history  filtered, chronological, name-enriched     │
//! │  category_summary     per-category rollup (left join)            │
//! │  supplier_summary     per-supplier rollup (left join)            │
//! │  monthly_summary      calendar-month IN/OUT/net/count            │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every stock figure in this module is derived by the same signed-sum
//! aggregation the ledger engine uses; none is read from a counter.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use sqlx::SqlitePool;

use crate::error::{DbError, DbResult};
use crate::repository::ledger::{low_stock_query, SIGNED_QTY, SIGNED_SUM};
use stockledger_core::validation::validate_month;
use stockledger_core::{
    CategorySummaryRow, CategoryValuation, InventoryLevelRow, InventoryValuation,
    LowStockAlertRow, MonthlySummary, SupplierSummaryRow, TransactionFilter, TransactionRow,
    ValidationError,
};

/// The report engine. Never mutates.
#[derive(Debug, Clone)]
pub struct Reports {
    pool: SqlitePool,
}

impl Reports {
    /// Creates a new report engine over the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        Reports { pool }
    }

    /// Current inventory levels: one row per product with its derived
    /// stock, reorder level, and on-hand value, joined with the category
    /// name. Ordered by product name (ties by id).
    pub async fn inventory_levels(&self) -> DbResult<Vec<InventoryLevelRow>> {
        let rows = sqlx::query_as::<_, InventoryLevelRow>(&format!(
            "SELECT \
                 p.id AS product_id, \
                 p.name AS product_name, \
                 c.name AS category_name, \
                 {SIGNED_SUM} AS current_stock, \
                 p.reorder_level AS reorder_level, \
                 p.price AS price, \
                 CAST(p.price * {SIGNED_SUM} AS REAL) AS stock_value \
             FROM products p \
             LEFT JOIN categories c ON p.category_id = c.id \
             LEFT JOIN inventory_transactions t ON t.product_id = p.id \
             GROUP BY p.id, p.name, c.name, p.reorder_level, p.price \
             ORDER BY p.name, p.id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// The low-stock set (see [`crate::Ledger::low_stock_products`]), enriched
    /// with the supplier of each product's most recent IN transaction.
    /// Supplier fields are NULL when the product has no IN history or its
    /// latest IN carried no supplier.
    pub async fn low_stock_alert(&self) -> DbResult<Vec<LowStockAlertRow>> {
        let rows = sqlx::query_as::<_, LowStockAlertRow>(&low_stock_query(
            ", \
             (SELECT t2.supplier_id FROM inventory_transactions t2 \
              WHERE t2.product_id = p.id AND t2.transaction_type = 'IN' \
              ORDER BY t2.date DESC, t2.id DESC LIMIT 1) AS last_supplier_id, \
             (SELECT s.name FROM inventory_transactions t2 \
              LEFT JOIN suppliers s ON s.id = t2.supplier_id \
              WHERE t2.product_id = p.id AND t2.transaction_type = 'IN' \
              ORDER BY t2.date DESC, t2.id DESC LIMIT 1) AS last_supplier_name",
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Total on-hand value across all products, with the catalog-wide
    /// average price, product count, and the per-category breakdown.
    /// Uncategorized products roll up under a NULL category name.
    /// Categories ordered by descending value.
    pub async fn inventory_valuation(&self) -> DbResult<InventoryValuation> {
        let (avg_price, total_products): (f64, i64) = sqlx::query_as(
            "SELECT CAST(COALESCE(AVG(price), 0) AS REAL), COUNT(*) FROM products",
        )
        .fetch_one(&self.pool)
        .await?;

        let by_category = sqlx::query_as::<_, CategoryValuation>(&format!(
            "SELECT \
                 category_name, \
                 COUNT(*) AS product_count, \
                 CAST(COALESCE(SUM(stock_value), 0) AS REAL) AS total_value \
             FROM ( \
                 SELECT \
                     c.name AS category_name, \
                     p.id, \
                     p.price * {SIGNED_SUM} AS stock_value \
                 FROM products p \
                 LEFT JOIN categories c ON p.category_id = c.id \
                 LEFT JOIN inventory_transactions t ON t.product_id = p.id \
                 GROUP BY p.id, c.name, p.price \
             ) \
             GROUP BY category_name \
             ORDER BY total_value DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        let total_value = by_category.iter().map(|c| c.total_value).sum();

        Ok(InventoryValuation {
            total_value,
            avg_price,
            total_products,
            by_category,
        })
    }

    /// Filtered transaction history, chronologically ascending by
    /// timestamp (ties by id), each row enriched with product and supplier
    /// names. An empty filter returns the full ledger.
    pub async fn transaction_history(
        &self,
        filter: &TransactionFilter,
    ) -> DbResult<Vec<TransactionRow>> {
        let mut qb = sqlx::QueryBuilder::<sqlx::Sqlite>::new(
            "SELECT \
                 t.id, t.product_id, p.name AS product_name, \
                 t.transaction_type, t.quantity, t.date, \
                 t.supplier_id, s.name AS supplier_name, t.notes \
             FROM inventory_transactions t \
             JOIN products p ON t.product_id = p.id \
             LEFT JOIN suppliers s ON t.supplier_id = s.id \
             WHERE 1 = 1",
        );

        if let Some(product_id) = filter.product_id {
            qb.push(" AND t.product_id = ").push_bind(product_id);
        }
        if let Some(from) = filter.from {
            qb.push(" AND t.date >= ").push_bind(from);
        }
        if let Some(to) = filter.to {
            qb.push(" AND t.date < ").push_bind(to);
        }
        if let Some(kind) = filter.kind {
            qb.push(" AND t.transaction_type = ").push_bind(kind);
        }

        qb.push(" ORDER BY t.date ASC, t.id ASC");

        let rows = qb
            .build_query_as::<TransactionRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    /// Per-category rollup: product count, transaction count, gross units
    /// moved, and on-hand value. Categories with zero products or zero
    /// activity still appear with zeroed aggregates (left-join semantics).
    ///
    /// The value aggregate exploits price being constant per product:
    /// Σ_products price·stock == Σ_transactions price·signed_quantity.
    pub async fn category_summary(&self) -> DbResult<Vec<CategorySummaryRow>> {
        let rows = sqlx::query_as::<_, CategorySummaryRow>(&format!(
            "SELECT \
                 c.id AS category_id, \
                 c.name AS category_name, \
                 COUNT(DISTINCT p.id) AS product_count, \
                 COUNT(t.id) AS transaction_count, \
                 COALESCE(SUM(ABS(t.quantity)), 0) AS units_moved, \
                 CAST(COALESCE(SUM(p.price * {SIGNED_QTY}), 0) AS REAL) AS total_value \
             FROM categories c \
             LEFT JOIN products p ON p.category_id = c.id \
             LEFT JOIN inventory_transactions t ON t.product_id = p.id \
             GROUP BY c.id, c.name \
             ORDER BY c.name"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Per-supplier rollup: transaction count, IN/OUT totals, and distinct
    /// products touched. Suppliers with zero transactions still appear.
    pub async fn supplier_summary(&self) -> DbResult<Vec<SupplierSummaryRow>> {
        let rows = sqlx::query_as::<_, SupplierSummaryRow>(
            "SELECT \
                 s.id AS supplier_id, \
                 s.name AS supplier_name, \
                 COUNT(t.id) AS transaction_count, \
                 COALESCE(SUM(CASE WHEN t.transaction_type = 'IN' THEN t.quantity ELSE 0 END), 0) AS total_in, \
                 COALESCE(SUM(CASE WHEN t.transaction_type = 'OUT' THEN t.quantity ELSE 0 END), 0) AS total_out, \
                 COUNT(DISTINCT t.product_id) AS products_supplied \
             FROM suppliers s \
             LEFT JOIN inventory_transactions t ON t.supplier_id = s.id \
             GROUP BY s.id, s.name \
             ORDER BY s.name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Calendar-month rollup: total IN, total OUT, net change, transaction
    /// count, distinct products touched. The window is inclusive of the
    /// first instant of the month and exclusive of the first instant of
    /// the next month.
    ///
    /// ## Errors
    /// * `Validation` - month outside 1..=12 or the year/month pair does
    ///   not form a valid date
    pub async fn monthly_summary(&self, year: i32, month: u32) -> DbResult<MonthlySummary> {
        validate_month(month)?;

        let start = month_start(year, month)?;
        let end = if month == 12 {
            month_start(year + 1, 1)?
        } else {
            month_start(year, month + 1)?
        };

        let (total_in, total_out, net_change, transaction_count, products_touched): (
            i64,
            i64,
            i64,
            i64,
            i64,
        ) = sqlx::query_as(&format!(
            "SELECT \
                 COALESCE(SUM(CASE WHEN t.transaction_type = 'IN' THEN t.quantity ELSE 0 END), 0), \
                 COALESCE(SUM(CASE WHEN t.transaction_type = 'OUT' THEN t.quantity ELSE 0 END), 0), \
                 {SIGNED_SUM}, \
                 COUNT(t.id), \
                 COUNT(DISTINCT t.product_id) \
             FROM inventory_transactions t \
             WHERE t.date >= ?1 AND t.date < ?2"
        ))
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await?;

        Ok(MonthlySummary {
            year,
            month,
            total_in,
            total_out,
            net_change,
            transaction_count,
            products_touched,
        })
    }
}

/// First instant of the given calendar month, in UTC.
fn month_start(year: i32, month: u32) -> Result<DateTime<Utc>, DbError> {
    let date = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        DbError::Validation(ValidationError::InvalidFormat {
            field: "year/month".to_string(),
            reason: format!("{year}-{month:02} is not a valid calendar month"),
        })
    })?;

    Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use stockledger_core::{NewTransaction, TransactionKind};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    /// The worked example: Widgets/Gadget, IN 20 from S1, OUT 3.
    async fn gadget_fixture(db: &Database) -> (i64, i64) {
        let widgets = db.categories().create("Widgets", None).await.unwrap();
        let supplier = db
            .suppliers()
            .create("S1 Supply Co.", Some("orders@s1.example"), None)
            .await
            .unwrap();
        let gadget = db
            .products()
            .create("Gadget", None, Some(widgets.id), 9.99, 5)
            .await
            .unwrap();

        db.ledger()
            .record(
                NewTransaction::new(gadget.id, TransactionKind::In, 20)
                    .from_supplier(supplier.id),
            )
            .await
            .unwrap();
        db.ledger()
            .record(NewTransaction::new(gadget.id, TransactionKind::Out, 3))
            .await
            .unwrap();

        (gadget.id, supplier.id)
    }

    #[tokio::test]
    async fn test_worked_example_scenario() {
        let db = test_db().await;
        let (gadget, _) = gadget_fixture(&db).await;

        assert_eq!(db.ledger().current_stock(gadget).await.unwrap(), 17);

        let levels = db.reports().inventory_levels().await.unwrap();
        assert_eq!(levels.len(), 1);
        assert_eq!(levels[0].current_stock, 17);
        assert_eq!(levels[0].category_name.as_deref(), Some("Widgets"));
        assert!(approx(levels[0].stock_value, 17.0 * 9.99));

        let valuation = db.reports().inventory_valuation().await.unwrap();
        assert!(approx(valuation.total_value, 169.83));
        assert!(approx(valuation.avg_price, 9.99));
        assert_eq!(valuation.total_products, 1);

        // 17 >= 5: Gadget is not low.
        let alert = db.reports().low_stock_alert().await.unwrap();
        assert!(alert.is_empty());
    }

    #[tokio::test]
    async fn test_oversell_lands_in_alert_with_last_in_supplier() {
        let db = test_db().await;
        let (gadget, supplier) = gadget_fixture(&db).await;

        // Stock 17, OUT 30 accepted: stock becomes -13 and trips the alert.
        db.ledger()
            .record(NewTransaction::new(gadget, TransactionKind::Out, 30))
            .await
            .unwrap();

        let alert = db.reports().low_stock_alert().await.unwrap();
        assert_eq!(alert.len(), 1);
        assert_eq!(alert[0].current_stock, -13);
        assert_eq!(alert[0].last_supplier_id, Some(supplier));
        assert_eq!(alert[0].last_supplier_name.as_deref(), Some("S1 Supply Co."));
    }

    #[tokio::test]
    async fn test_alert_supplier_null_without_in_history() {
        let db = test_db().await;

        let product = db
            .products()
            .create("Never Stocked", None, None, 4.0, 3)
            .await
            .unwrap();

        let alert = db.reports().low_stock_alert().await.unwrap();
        assert_eq!(alert.len(), 1);
        assert_eq!(alert[0].product_id, product.id);
        assert_eq!(alert[0].last_supplier_id, None);
        assert_eq!(alert[0].last_supplier_name, None);
    }

    #[tokio::test]
    async fn test_valuation_breaks_down_by_category() {
        let db = test_db().await;
        let ledger = db.ledger();

        let books = db.categories().create("Books", None).await.unwrap();
        let novel = db
            .products()
            .create("Novel", None, Some(books.id), 10.0, 5)
            .await
            .unwrap();
        let loose = db.products().create("Loose Item", None, None, 2.0, 5).await.unwrap();

        ledger
            .record(NewTransaction::new(novel.id, TransactionKind::In, 3))
            .await
            .unwrap();
        ledger
            .record(NewTransaction::new(loose.id, TransactionKind::In, 4))
            .await
            .unwrap();

        let valuation = db.reports().inventory_valuation().await.unwrap();
        assert!(approx(valuation.total_value, 30.0 + 8.0));
        assert_eq!(valuation.total_products, 2);
        // Unweighted mean of catalog prices, not of stocked units.
        assert!(approx(valuation.avg_price, (10.0 + 2.0) / 2.0));
        assert_eq!(valuation.by_category.len(), 2);

        // Ordered by descending value: Books (30) then uncategorized (8).
        assert_eq!(valuation.by_category[0].category_name.as_deref(), Some("Books"));
        assert!(approx(valuation.by_category[0].total_value, 30.0));
        assert_eq!(valuation.by_category[1].category_name, None);
        assert!(approx(valuation.by_category[1].total_value, 8.0));
    }

    #[tokio::test]
    async fn test_valuation_on_empty_catalog_is_zeroed() {
        let db = test_db().await;

        let valuation = db.reports().inventory_valuation().await.unwrap();
        assert!(approx(valuation.total_value, 0.0));
        assert!(approx(valuation.avg_price, 0.0));
        assert_eq!(valuation.total_products, 0);
        assert!(valuation.by_category.is_empty());
    }

    #[tokio::test]
    async fn test_alert_agrees_with_ledger_low_stock_set() {
        let db = test_db().await;
        let (gadget, _) = gadget_fixture(&db).await;

        db.ledger()
            .record(NewTransaction::new(gadget, TransactionKind::Out, 30))
            .await
            .unwrap();
        db.products()
            .create("Also Low", None, None, 1.0, 4)
            .await
            .unwrap();

        // The alert is the ledger's low-stock set, row for row, plus the
        // supplier enrichment.
        let base = db.ledger().low_stock_products().await.unwrap();
        let alert = db.reports().low_stock_alert().await.unwrap();
        assert_eq!(alert.len(), base.len());
        for (a, b) in alert.iter().zip(&base) {
            assert_eq!(a.product_id, b.product_id);
            assert_eq!(a.current_stock, b.current_stock);
            assert_eq!(a.shortfall, b.shortfall);
        }
    }

    #[tokio::test]
    async fn test_history_is_chronological_and_filtered() {
        use chrono::{TimeZone, Utc};

        let db = test_db().await;
        let ledger = db.ledger();

        let a = db.products().create("Alpha", None, None, 1.0, 0).await.unwrap();
        let b = db.products().create("Beta", None, None, 1.0, 0).await.unwrap();

        let t1 = Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap();
        let t3 = Utc.with_ymd_and_hms(2024, 2, 1, 9, 0, 0).unwrap();

        // Inserted out of order on purpose.
        ledger
            .record(NewTransaction::new(a.id, TransactionKind::In, 10).at(t1))
            .await
            .unwrap();
        ledger
            .record(NewTransaction::new(b.id, TransactionKind::In, 20).at(t2))
            .await
            .unwrap();
        ledger
            .record(NewTransaction::new(a.id, TransactionKind::Out, 4).at(t3))
            .await
            .unwrap();

        // Unfiltered: ascending by timestamp.
        let all = db
            .reports()
            .transaction_history(&TransactionFilter::default())
            .await
            .unwrap();
        let dates: Vec<_> = all.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![t2, t1, t3]);
        assert_eq!(all[0].product_name, "Beta");

        // By product.
        let for_a = db
            .reports()
            .transaction_history(&TransactionFilter::for_product(a.id))
            .await
            .unwrap();
        assert_eq!(for_a.len(), 2);

        // By kind.
        let outs = db
            .reports()
            .transaction_history(&TransactionFilter::default().of_kind(TransactionKind::Out))
            .await
            .unwrap();
        assert_eq!(outs.len(), 1);
        assert_eq!(outs[0].quantity, 4);

        // By date range: [t2, t1) contains only t2.
        let window = db
            .reports()
            .transaction_history(&TransactionFilter::default().between(t2, t1))
            .await
            .unwrap();
        assert_eq!(window.len(), 1);
        assert_eq!(window[0].date, t2);
    }

    #[tokio::test]
    async fn test_history_ties_broken_by_id() {
        use chrono::{TimeZone, Utc};

        let db = test_db().await;
        let product = db.products().create("Tied", None, None, 1.0, 0).await.unwrap();
        let when = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

        let first = db
            .ledger()
            .record(NewTransaction::new(product.id, TransactionKind::In, 1).at(when))
            .await
            .unwrap();
        let second = db
            .ledger()
            .record(NewTransaction::new(product.id, TransactionKind::In, 2).at(when))
            .await
            .unwrap();

        let rows = db
            .reports()
            .transaction_history(&TransactionFilter::default())
            .await
            .unwrap();
        assert_eq!(rows[0].id, first.id);
        assert_eq!(rows[1].id, second.id);
    }

    #[tokio::test]
    async fn test_category_summary_includes_idle_categories() {
        let db = test_db().await;
        let ledger = db.ledger();

        let active = db.categories().create("Active", None).await.unwrap();
        let idle = db.categories().create("Idle", None).await.unwrap();

        let product = db
            .products()
            .create("Mover", None, Some(active.id), 5.0, 0)
            .await
            .unwrap();
        ledger
            .record(NewTransaction::new(product.id, TransactionKind::In, 10))
            .await
            .unwrap();
        ledger
            .record(NewTransaction::new(product.id, TransactionKind::Out, 2))
            .await
            .unwrap();

        let summary = db.reports().category_summary().await.unwrap();
        assert_eq!(summary.len(), 2);

        let active_row = summary.iter().find(|r| r.category_id == active.id).unwrap();
        assert_eq!(active_row.product_count, 1);
        assert_eq!(active_row.transaction_count, 2);
        assert_eq!(active_row.units_moved, 12);
        assert!(approx(active_row.total_value, 8.0 * 5.0));

        // Left-join semantics: the idle category still appears, zeroed.
        let idle_row = summary.iter().find(|r| r.category_id == idle.id).unwrap();
        assert_eq!(idle_row.product_count, 0);
        assert_eq!(idle_row.transaction_count, 0);
        assert_eq!(idle_row.units_moved, 0);
        assert!(approx(idle_row.total_value, 0.0));
    }

    #[tokio::test]
    async fn test_supplier_summary_includes_idle_suppliers() {
        let db = test_db().await;

        let busy = db.suppliers().create("Busy Co.", None, None).await.unwrap();
        let idle = db.suppliers().create("Idle Co.", None, None).await.unwrap();
        let product = db.products().create("Thing", None, None, 1.0, 0).await.unwrap();

        db.ledger()
            .record(
                NewTransaction::new(product.id, TransactionKind::In, 30).from_supplier(busy.id),
            )
            .await
            .unwrap();
        db.ledger()
            .record(
                NewTransaction::new(product.id, TransactionKind::Out, 5).from_supplier(busy.id),
            )
            .await
            .unwrap();

        let summary = db.reports().supplier_summary().await.unwrap();
        assert_eq!(summary.len(), 2);

        let busy_row = summary.iter().find(|r| r.supplier_id == busy.id).unwrap();
        assert_eq!(busy_row.transaction_count, 2);
        assert_eq!(busy_row.total_in, 30);
        assert_eq!(busy_row.total_out, 5);
        assert_eq!(busy_row.products_supplied, 1);

        let idle_row = summary.iter().find(|r| r.supplier_id == idle.id).unwrap();
        assert_eq!(idle_row.transaction_count, 0);
        assert_eq!(idle_row.products_supplied, 0);
    }

    #[tokio::test]
    async fn test_monthly_summary_boundaries() {
        use chrono::{TimeZone, Utc};

        let db = test_db().await;
        let product = db.products().create("Seasonal", None, None, 1.0, 0).await.unwrap();
        let ledger = db.ledger();

        // First instant of March: included.
        let first_instant = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        // Mid-March: included.
        let mid = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        // First instant of April: excluded.
        let next_month = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();
        // End of February: excluded.
        let before = Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 59).unwrap();

        ledger
            .record(NewTransaction::new(product.id, TransactionKind::In, 10).at(first_instant))
            .await
            .unwrap();
        ledger
            .record(NewTransaction::new(product.id, TransactionKind::Out, 4).at(mid))
            .await
            .unwrap();
        ledger
            .record(NewTransaction::new(product.id, TransactionKind::Adjustment, -1).at(mid))
            .await
            .unwrap();
        ledger
            .record(NewTransaction::new(product.id, TransactionKind::In, 99).at(next_month))
            .await
            .unwrap();
        ledger
            .record(NewTransaction::new(product.id, TransactionKind::In, 50).at(before))
            .await
            .unwrap();

        let summary = db.reports().monthly_summary(2024, 3).await.unwrap();
        assert_eq!(summary.total_in, 10);
        assert_eq!(summary.total_out, 4);
        assert_eq!(summary.net_change, 10 - 4 - 1);
        assert_eq!(summary.transaction_count, 3);
        assert_eq!(summary.products_touched, 1);

        // December rolls into January of the next year without panicking.
        let december = db.reports().monthly_summary(2024, 12).await.unwrap();
        assert_eq!(december.transaction_count, 0);
    }

    #[tokio::test]
    async fn test_monthly_summary_rejects_bad_month() {
        let db = test_db().await;

        let err = db.reports().monthly_summary(2024, 0).await.unwrap_err();
        assert!(matches!(err, DbError::Validation(_)));

        let err = db.reports().monthly_summary(2024, 13).await.unwrap_err();
        assert!(matches!(err, DbError::Validation(_)));
    }

    #[tokio::test]
    async fn test_reports_are_idempotent_reads() {
        let db = test_db().await;
        gadget_fixture(&db).await;

        let reports = db.reports();

        assert_eq!(
            reports.inventory_levels().await.unwrap(),
            reports.inventory_levels().await.unwrap()
        );
        assert_eq!(
            reports.low_stock_alert().await.unwrap(),
            reports.low_stock_alert().await.unwrap()
        );
        assert_eq!(
            reports.inventory_valuation().await.unwrap(),
            reports.inventory_valuation().await.unwrap()
        );
        assert_eq!(
            reports
                .transaction_history(&TransactionFilter::default())
                .await
                .unwrap(),
            reports
                .transaction_history(&TransactionFilter::default())
                .await
                .unwrap()
        );
        assert_eq!(
            reports.category_summary().await.unwrap(),
            reports.category_summary().await.unwrap()
        );
        assert_eq!(
            reports.supplier_summary().await.unwrap(),
            reports.supplier_summary().await.unwrap()
        );
    }

    #[tokio::test]
    async fn test_levels_report_includes_transaction_free_products() {
        let db = test_db().await;

        db.products().create("Dormant", None, None, 3.5, 2).await.unwrap();

        let levels = db.reports().inventory_levels().await.unwrap();
        assert_eq!(levels.len(), 1);
        assert_eq!(levels[0].current_stock, 0);
        assert!(approx(levels[0].stock_value, 0.0));
        assert_eq!(levels[0].category_name, None);
    }
}
