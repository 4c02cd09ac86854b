use async_trait::async_trait;
use std::sync::Arc;

use crate::models::expense::{CreateExpenseRequest, ExpenseResponse};
use crate::repositories::category_repository::CategoryRepository;
use crate::repositories::expense_repository::ExpenseRepository;
use crate::repositories::user_repository::UserRepository;
use crate::repositories::RepositoryError;

/// Expense service errors
#[derive(Debug, thiserror::Error)]
pub enum ExpenseError {
    #[error("Category not found")]
    CategoryNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Expense not found")]
    ExpenseNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<RepositoryError> for ExpenseError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ExpenseError::ExpenseNotFound,
            RepositoryError::ConstraintViolation(msg) => ExpenseError::DatabaseError(msg),
            RepositoryError::DatabaseError(msg) => ExpenseError::DatabaseError(msg),
        }
    }
}

/// Trait defining expense service operations
#[async_trait]
pub trait ExpenseService: Send + Sync {
    /// Create an expense. The referenced category and user must both exist;
    /// the category is checked first. The response embeds the full category.
    async fn create_expense(
        &self,
        request: CreateExpenseRequest,
    ) -> Result<ExpenseResponse, ExpenseError>;

    /// List all expenses of a user. An unknown user yields an empty list,
    /// not an error.
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<ExpenseResponse>, ExpenseError>;

    /// Delete an expense by ID
    async fn delete_expense(&self, id: i64) -> Result<(), ExpenseError>;
}

/// Implementation of ExpenseService
pub struct ExpenseServiceImpl {
    expense_repository: Arc<dyn ExpenseRepository>,
    category_repository: Arc<dyn CategoryRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl ExpenseServiceImpl {
    pub fn new(
        expense_repository: Arc<dyn ExpenseRepository>,
        category_repository: Arc<dyn CategoryRepository>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            expense_repository,
            category_repository,
            user_repository,
        }
    }
}

#[async_trait]
impl ExpenseService for ExpenseServiceImpl {
    async fn create_expense(
        &self,
        request: CreateExpenseRequest,
    ) -> Result<ExpenseResponse, ExpenseError> {
        // Category check comes first when both references are invalid.
        let category = self
            .category_repository
            .find_by_id(request.category_id)
            .await
            .map_err(|e| ExpenseError::DatabaseError(e.to_string()))?
            .ok_or(ExpenseError::CategoryNotFound)?;

        let user = self
            .user_repository
            .find_by_id(request.user_id)
            .await
            .map_err(|e| ExpenseError::DatabaseError(e.to_string()))?;
        if user.is_none() {
            return Err(ExpenseError::UserNotFound);
        }

        let expense = self
            .expense_repository
            .create(
                request.amount,
                &request.description,
                request.date,
                request.category_id,
                request.user_id,
            )
            .await?;

        Ok(ExpenseResponse::from_expense(expense, category))
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<ExpenseResponse>, ExpenseError> {
        let rows = self.expense_repository.find_by_user(user_id).await?;
        Ok(rows.into_iter().map(ExpenseResponse::from).collect())
    }

    async fn delete_expense(&self, id: i64) -> Result<(), ExpenseError> {
        let existing = self.expense_repository.find_by_id(id).await?;
        if existing.is_none() {
            return Err(ExpenseError::ExpenseNotFound);
        }

        Ok(self.expense_repository.delete(id).await?)
    }
}
