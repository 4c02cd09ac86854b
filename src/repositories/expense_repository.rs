use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::models::expense::{Expense, ExpenseWithCategory};
use crate::repositories::RepositoryError;

/// Trait defining expense repository operations
#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    /// Insert a new expense row
    async fn create(
        &self,
        amount: f64,
        description: &str,
        date: NaiveDate,
        category_id: i64,
        user_id: i64,
    ) -> Result<Expense, RepositoryError>;

    /// Find an expense by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Expense>, RepositoryError>;

    /// List all expenses of a user joined with their category, in storage
    /// order. An unknown user simply yields an empty list.
    async fn find_by_user(&self, user_id: i64)
        -> Result<Vec<ExpenseWithCategory>, RepositoryError>;

    /// Delete an expense by ID
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;

    /// Whether any expense references the given user
    async fn exists_for_user(&self, user_id: i64) -> Result<bool, RepositoryError>;

    /// Whether any expense references the given category
    async fn exists_for_category(&self, category_id: i64) -> Result<bool, RepositoryError>;
}

/// SQLite implementation of ExpenseRepository
pub struct SqliteExpenseRepository {
    pool: SqlitePool,
}

impl SqliteExpenseRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExpenseRepository for SqliteExpenseRepository {
    async fn create(
        &self,
        amount: f64,
        description: &str,
        date: NaiveDate,
        category_id: i64,
        user_id: i64,
    ) -> Result<Expense, RepositoryError> {
        let expense = sqlx::query_as::<_, Expense>(
            r#"
            INSERT INTO expenses (amount, description, date, category_id, user_id)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, amount, description, date, category_id, user_id
            "#,
        )
        .bind(amount)
        .bind(description)
        .bind(date)
        .bind(category_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(expense)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Expense>, RepositoryError> {
        let expense = sqlx::query_as::<_, Expense>(
            "SELECT id, amount, description, date, category_id, user_id FROM expenses WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(expense)
    }

    async fn find_by_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<ExpenseWithCategory>, RepositoryError> {
        let rows = sqlx::query_as::<_, ExpenseWithCategory>(
            r#"
            SELECT
                e.id,
                e.amount,
                e.description,
                e.date,
                e.category_id,
                c.name AS category_name
            FROM expenses e
            JOIN categories c ON c.id = e.category_id
            WHERE e.user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn exists_for_user(&self, user_id: i64) -> Result<bool, RepositoryError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM expenses WHERE user_id = ?")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count > 0)
    }

    async fn exists_for_category(&self, category_id: i64) -> Result<bool, RepositoryError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM expenses WHERE category_id = ?")
                .bind(category_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count > 0)
    }
}
