use async_trait::async_trait;
use std::sync::Arc;

use crate::models::category::{Category, CreateCategoryRequest};
use crate::repositories::category_repository::CategoryRepository;
use crate::repositories::expense_repository::ExpenseRepository;
use crate::repositories::RepositoryError;

/// Category service errors
#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("Category with this name already exists")]
    DuplicateName,

    #[error("Category not found")]
    CategoryNotFound,

    #[error("Category still has expenses")]
    CategoryHasExpenses,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<RepositoryError> for CategoryError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => CategoryError::CategoryNotFound,
            RepositoryError::ConstraintViolation(_) => CategoryError::DuplicateName,
            RepositoryError::DatabaseError(msg) => CategoryError::DatabaseError(msg),
        }
    }
}

/// Trait defining category service operations
#[async_trait]
pub trait CategoryService: Send + Sync {
    /// Create a category. There is no pre-check; a duplicate name surfaces
    /// as a unique-constraint violation from the store.
    async fn create_category(
        &self,
        request: CreateCategoryRequest,
    ) -> Result<Category, CategoryError>;

    /// List every category
    async fn list_categories(&self) -> Result<Vec<Category>, CategoryError>;

    /// Delete a category by ID. Refused while expenses still reference it.
    async fn delete_category(&self, id: i64) -> Result<(), CategoryError>;
}

/// Implementation of CategoryService
pub struct CategoryServiceImpl {
    category_repository: Arc<dyn CategoryRepository>,
    expense_repository: Arc<dyn ExpenseRepository>,
}

impl CategoryServiceImpl {
    pub fn new(
        category_repository: Arc<dyn CategoryRepository>,
        expense_repository: Arc<dyn ExpenseRepository>,
    ) -> Self {
        Self {
            category_repository,
            expense_repository,
        }
    }
}

#[async_trait]
impl CategoryService for CategoryServiceImpl {
    async fn create_category(
        &self,
        request: CreateCategoryRequest,
    ) -> Result<Category, CategoryError> {
        Ok(self.category_repository.create(&request.name).await?)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, CategoryError> {
        Ok(self.category_repository.find_all().await?)
    }

    async fn delete_category(&self, id: i64) -> Result<(), CategoryError> {
        let existing = self.category_repository.find_by_id(id).await?;
        if existing.is_none() {
            return Err(CategoryError::CategoryNotFound);
        }

        // Restrict-delete: expenses keep their category row alive.
        let in_use = self
            .expense_repository
            .exists_for_category(id)
            .await
            .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;
        if in_use {
            return Err(CategoryError::CategoryHasExpenses);
        }

        Ok(self.category_repository.delete(id).await?)
    }
}
