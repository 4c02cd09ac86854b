use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::models::category::Category;
use crate::repositories::RepositoryError;

/// Trait defining category repository operations
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Insert a new category. Name uniqueness is enforced by the store; a
    /// duplicate surfaces as a ConstraintViolation.
    async fn create(&self, name: &str) -> Result<Category, RepositoryError>;

    /// Find a category by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, RepositoryError>;

    /// List every category, in storage order
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError>;

    /// Delete a category by ID
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}

/// SQLite implementation of CategoryRepository
pub struct SqliteCategoryRepository {
    pool: SqlitePool,
}

impl SqliteCategoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    async fn create(&self, name: &str) -> Result<Category, RepositoryError> {
        let category = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name) VALUES (?) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(category)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, RepositoryError> {
        let category =
            sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(category)
    }

    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let categories = sqlx::query_as::<_, Category>("SELECT id, name FROM categories")
            .fetch_all(&self.pool)
            .await?;

        Ok(categories)
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
