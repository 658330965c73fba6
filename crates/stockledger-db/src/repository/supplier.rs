//! # Supplier Repository
//!
//! Database operations for suppliers.
//!
//! ## Key Rules
//! - Supplier names must be non-empty (duplicates between suppliers are
//!   allowed - two branches of the same vendor are distinct rows)
//! - A supplier cannot be deleted while any inventory transaction still
//!   references it: the ledger is append-only history and must keep its
//!   supplier joins resolvable

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use stockledger_core::validation::validate_name;
use stockledger_core::Supplier;

/// Repository for supplier database operations.
#[derive(Debug, Clone)]
pub struct SupplierRepository {
    pool: SqlitePool,
}

impl SupplierRepository {
    /// Creates a new SupplierRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SupplierRepository { pool }
    }

    /// Creates a new supplier.
    ///
    /// ## Errors
    /// * `Validation` - name is empty or too long
    pub async fn create(
        &self,
        name: &str,
        contact_info: Option<&str>,
        address: Option<&str>,
    ) -> DbResult<Supplier> {
        let name = validate_name(name, "supplier name")?;

        debug!(name = %name, "Creating supplier");

        let result =
            sqlx::query("INSERT INTO suppliers (name, contact_info, address) VALUES (?1, ?2, ?3)")
                .bind(&name)
                .bind(contact_info)
                .bind(address)
                .execute(&self.pool)
                .await?;

        Ok(Supplier {
            id: result.last_insert_rowid(),
            name,
            contact_info: contact_info.map(str::to_string),
            address: address.map(str::to_string),
        })
    }

    /// Gets a supplier by its id.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Supplier>> {
        let supplier = sqlx::query_as::<_, Supplier>(
            "SELECT id, name, contact_info, address FROM suppliers WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(supplier)
    }

    /// Lists all suppliers, ordered by name.
    pub async fn list(&self) -> DbResult<Vec<Supplier>> {
        let suppliers = sqlx::query_as::<_, Supplier>(
            "SELECT id, name, contact_info, address FROM suppliers ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(suppliers)
    }

    /// Updates an existing supplier.
    ///
    /// ## Errors
    /// * `Validation` - name is empty or too long
    /// * `NotFound` - no supplier with this id
    pub async fn update(
        &self,
        id: i64,
        name: &str,
        contact_info: Option<&str>,
        address: Option<&str>,
    ) -> DbResult<()> {
        let name = validate_name(name, "supplier name")?;

        debug!(id = %id, name = %name, "Updating supplier");

        let result = sqlx::query(
            "UPDATE suppliers SET name = ?2, contact_info = ?3, address = ?4 WHERE id = ?1",
        )
        .bind(id)
        .bind(&name)
        .bind(contact_info)
        .bind(address)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Supplier", id));
        }

        Ok(())
    }

    /// Deletes a supplier.
    ///
    /// ## Errors
    /// * `InUse` - one or more transactions still reference this supplier
    /// * `NotFound` - no supplier with this id
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id = %id, "Deleting supplier");

        let mut tx = self.pool.begin().await?;

        let dependents: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM inventory_transactions WHERE supplier_id = ?1",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;
        if dependents > 0 {
            return Err(DbError::in_use("Supplier", id, dependents, "transaction"));
        }

        let result = sqlx::query("DELETE FROM suppliers WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Supplier", id));
        }

        tx.commit().await?;
        Ok(())
    }

    /// Counts suppliers (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM suppliers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};
    use stockledger_core::{NewTransaction, TransactionKind};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_create_update_and_list() {
        let db = test_db().await;

        let s = db
            .suppliers()
            .create("TechCorp Inc.", Some("contact@techcorp.com"), None)
            .await
            .unwrap();
        assert_eq!(s.contact_info.as_deref(), Some("contact@techcorp.com"));

        db.suppliers()
            .update(s.id, "TechCorp Inc.", Some("sales@techcorp.com"), Some("123 Tech Street"))
            .await
            .unwrap();

        let fetched = db.suppliers().get_by_id(s.id).await.unwrap().unwrap();
        assert_eq!(fetched.contact_info.as_deref(), Some("sales@techcorp.com"));
        assert_eq!(fetched.address.as_deref(), Some("123 Tech Street"));

        assert_eq!(db.suppliers().list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_name_rejected() {
        let db = test_db().await;

        let err = db.suppliers().create("", None, None).await.unwrap_err();
        assert!(matches!(err, DbError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let db = test_db().await;

        let err = db
            .suppliers()
            .update(7, "Ghost Supplies", None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_blocked_while_transactions_reference_it() {
        let db = test_db().await;

        let supplier = db.suppliers().create("BookWorld", None, None).await.unwrap();
        let product = db
            .products()
            .create("Paperback", None, None, 12.50, 10)
            .await
            .unwrap();
        db.ledger()
            .record(
                NewTransaction::new(product.id, TransactionKind::In, 25)
                    .from_supplier(supplier.id),
            )
            .await
            .unwrap();

        let err = db.suppliers().delete(supplier.id).await.unwrap_err();
        assert!(matches!(err, DbError::InUse { .. }));
        assert!(db.suppliers().get_by_id(supplier.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_unreferenced_supplier() {
        let db = test_db().await;

        let supplier = db.suppliers().create("One-Off Vendor", None, None).await.unwrap();
        db.suppliers().delete(supplier.id).await.unwrap();
        assert!(db.suppliers().get_by_id(supplier.id).await.unwrap().is_none());
    }
}
