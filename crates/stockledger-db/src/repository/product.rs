//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Rules
//! - `category_id`, if set, must reference an existing category; the check
//!   runs inside the same storage transaction as the insert/update so a
//!   failure leaves no partial row
//! - Price is non-negative, reorder level is non-negative
//! - A product cannot be deleted while ledger transactions reference it:
//!   deleting it would orphan history and silently change every derived
//!   stock number
//!
//! Note the deliberate absence of a stock column anywhere in this file:
//! stock belongs to the ledger engine.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use stockledger_core::validation::{validate_name, validate_price, validate_reorder_level};
use stockledger_core::Product;

/// Repository for product database operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Creates a new product.
    ///
    /// ## Errors
    /// * `Validation` - name empty, price < 0, or reorder_level < 0
    /// * `UnknownReference` - `category_id` is set but no such category
    pub async fn create(
        &self,
        name: &str,
        description: Option<&str>,
        category_id: Option<i64>,
        price: f64,
        reorder_level: i64,
    ) -> DbResult<Product> {
        let name = validate_name(name, "product name")?;
        validate_price(price)?;
        validate_reorder_level(reorder_level)?;

        debug!(name = %name, category_id = ?category_id, "Creating product");

        let mut tx = self.pool.begin().await?;

        if let Some(cat_id) = category_id {
            let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM categories WHERE id = ?1")
                .bind(cat_id)
                .fetch_optional(&mut *tx)
                .await?;
            if exists.is_none() {
                return Err(DbError::unknown_reference("Category", cat_id));
            }
        }

        let result = sqlx::query(
            "INSERT INTO products (name, description, category_id, price, reorder_level) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&name)
        .bind(description)
        .bind(category_id)
        .bind(price)
        .bind(reorder_level)
        .execute(&mut *tx)
        .await?;
        let id = result.last_insert_rowid();

        tx.commit().await?;

        Ok(Product {
            id,
            name,
            description: description.map(str::to_string),
            category_id,
            price,
            reorder_level,
        })
    }

    /// Gets a product by its id.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, category_id, price, reorder_level \
             FROM products WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Lists all products, ordered by name.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, category_id, price, reorder_level \
             FROM products ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Searches products by name or description (case-insensitive LIKE).
    ///
    /// ## Arguments
    /// * `term` - Search term (matched as a substring)
    pub async fn search(&self, term: &str) -> DbResult<Vec<Product>> {
        let pattern = format!("%{}%", term.trim());

        debug!(term = %term, "Searching products");

        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, category_id, price, reorder_level \
             FROM products \
             WHERE name LIKE ?1 OR description LIKE ?1 \
             ORDER BY name",
        )
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Updates an existing product.
    ///
    /// Same validation as [`create`](Self::create), applied to an existing
    /// row.
    ///
    /// ## Errors
    /// * `Validation` - name empty, price < 0, or reorder_level < 0
    /// * `UnknownReference` - `category_id` is set but no such category
    /// * `NotFound` - no product with this id
    pub async fn update(
        &self,
        id: i64,
        name: &str,
        description: Option<&str>,
        category_id: Option<i64>,
        price: f64,
        reorder_level: i64,
    ) -> DbResult<()> {
        let name = validate_name(name, "product name")?;
        validate_price(price)?;
        validate_reorder_level(reorder_level)?;

        debug!(id = %id, name = %name, "Updating product");

        let mut tx = self.pool.begin().await?;

        if let Some(cat_id) = category_id {
            let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM categories WHERE id = ?1")
                .bind(cat_id)
                .fetch_optional(&mut *tx)
                .await?;
            if exists.is_none() {
                return Err(DbError::unknown_reference("Category", cat_id));
            }
        }

        let result = sqlx::query(
            "UPDATE products SET name = ?2, description = ?3, category_id = ?4, \
             price = ?5, reorder_level = ?6 WHERE id = ?1",
        )
        .bind(id)
        .bind(&name)
        .bind(description)
        .bind(category_id)
        .bind(price)
        .bind(reorder_level)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        tx.commit().await?;
        Ok(())
    }

    /// Deletes a product.
    ///
    /// ## Errors
    /// * `InUse` - ledger transactions still reference this product
    /// * `NotFound` - no product with this id
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id = %id, "Deleting product");

        let mut tx = self.pool.begin().await?;

        let dependents: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM inventory_transactions WHERE product_id = ?1",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;
        if dependents > 0 {
            return Err(DbError::in_use("Product", id, dependents, "transaction"));
        }

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        tx.commit().await?;
        Ok(())
    }

    /// Counts products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
