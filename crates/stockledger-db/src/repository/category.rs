//! # Category Repository
//!
//! Database operations for product categories.
//!
//! ## Key Rules
//! - Category names are unique (case-sensitive exact match)
//! - A category cannot be deleted while any product references it
//! - Every validate-then-write sequence runs in one storage transaction,
//!   so a constraint failure leaves no partial row behind

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use stockledger_core::validation::validate_name;
use stockledger_core::Category;

/// Repository for category database operations.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    /// Creates a new CategoryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CategoryRepository { pool }
    }

    /// Creates a new category.
    ///
    /// ## Errors
    /// * `Validation` - name is empty or too long
    /// * `UniqueViolation` - a category with this exact name already exists
    pub async fn create(&self, name: &str, description: Option<&str>) -> DbResult<Category> {
        let name = validate_name(name, "category name")?;

        debug!(name = %name, "Creating category");

        let mut tx = self.pool.begin().await?;

        let duplicate: Option<i64> =
            sqlx::query_scalar("SELECT id FROM categories WHERE name = ?1")
                .bind(&name)
                .fetch_optional(&mut *tx)
                .await?;
        if duplicate.is_some() {
            return Err(DbError::UniqueViolation {
                field: "category name".to_string(),
                value: name,
            });
        }

        let result = sqlx::query("INSERT INTO categories (name, description) VALUES (?1, ?2)")
            .bind(&name)
            .bind(description)
            .execute(&mut *tx)
            .await?;
        let id = result.last_insert_rowid();

        tx.commit().await?;

        Ok(Category {
            id,
            name,
            description: description.map(str::to_string),
        })
    }

    /// Gets a category by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Category))` - Category found
    /// * `Ok(None)` - Category not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT id, name, description FROM categories WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    /// Lists all categories, ordered by name.
    pub async fn list(&self) -> DbResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, name, description FROM categories ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    /// Updates an existing category.
    ///
    /// Same validation as [`create`](Self::create), applied to an existing
    /// row.
    ///
    /// ## Errors
    /// * `Validation` - name is empty or too long
    /// * `UniqueViolation` - the new name belongs to a different category
    /// * `NotFound` - no category with this id
    pub async fn update(&self, id: i64, name: &str, description: Option<&str>) -> DbResult<()> {
        let name = validate_name(name, "category name")?;

        debug!(id = %id, name = %name, "Updating category");

        let mut tx = self.pool.begin().await?;

        let duplicate: Option<i64> =
            sqlx::query_scalar("SELECT id FROM categories WHERE name = ?1 AND id != ?2")
                .bind(&name)
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if duplicate.is_some() {
            return Err(DbError::UniqueViolation {
                field: "category name".to_string(),
                value: name,
            });
        }

        let result = sqlx::query("UPDATE categories SET name = ?2, description = ?3 WHERE id = ?1")
            .bind(id)
            .bind(&name)
            .bind(description)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Category", id));
        }

        tx.commit().await?;
        Ok(())
    }

    /// Deletes a category.
    ///
    /// ## Errors
    /// * `InUse` - one or more products still reference this category
    /// * `NotFound` - no category with this id
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id = %id, "Deleting category");

        let mut tx = self.pool.begin().await?;

        let dependents: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE category_id = ?1")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;
        if dependents > 0 {
            return Err(DbError::in_use("Category", id, dependents, "product"));
        }

        let result = sqlx::query("DELETE FROM categories WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Category", id));
        }

        tx.commit().await?;
        Ok(())
    }

    /// Counts categories (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
