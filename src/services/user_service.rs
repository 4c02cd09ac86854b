use async_trait::async_trait;
use std::sync::Arc;

use crate::models::auth::LoginRequest;
use crate::models::user::{CreateUserRequest, User};
use crate::password::{hash_password, verify_password};
use crate::repositories::expense_repository::ExpenseRepository;
use crate::repositories::user_repository::UserRepository;
use crate::repositories::RepositoryError;

/// User service errors
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("Email already registered")]
    DuplicateEmail,

    #[error("User not found")]
    UserNotFound,

    #[error("User still has expenses")]
    UserHasExpenses,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<RepositoryError> for UserError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => UserError::UserNotFound,
            RepositoryError::ConstraintViolation(_) => UserError::DuplicateEmail,
            RepositoryError::DatabaseError(msg) => UserError::DatabaseError(msg),
        }
    }
}

/// Trait defining user service operations
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new user, hashing the password before storage
    async fn register(&self, request: CreateUserRequest) -> Result<User, UserError>;

    /// List every registered user
    async fn list_users(&self) -> Result<Vec<User>, UserError>;

    /// Fetch a single user by ID
    async fn get_user(&self, id: i64) -> Result<User, UserError>;

    /// Delete a user by ID. Refused while expenses still reference the user.
    async fn delete_user(&self, id: i64) -> Result<(), UserError>;

    /// Check credentials and return the matching user. Unknown email and
    /// wrong password are indistinguishable to the caller.
    async fn login(&self, request: LoginRequest) -> Result<User, UserError>;
}

/// Implementation of UserService
pub struct UserServiceImpl {
    user_repository: Arc<dyn UserRepository>,
    expense_repository: Arc<dyn ExpenseRepository>,
}

impl UserServiceImpl {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        expense_repository: Arc<dyn ExpenseRepository>,
    ) -> Self {
        Self {
            user_repository,
            expense_repository,
        }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn register(&self, request: CreateUserRequest) -> Result<User, UserError> {
        let existing = self.user_repository.find_by_email(&request.email).await?;
        if existing.is_some() {
            return Err(UserError::DuplicateEmail);
        }

        let password_hash = hash_password(&request.password)
            .map_err(|e| UserError::DatabaseError(format!("Password hashing failed: {}", e)))?;

        let user = self
            .user_repository
            .create(&request.name, &request.email, &password_hash)
            .await?;

        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        Ok(self.user_repository.find_all().await?)
    }

    async fn get_user(&self, id: i64) -> Result<User, UserError> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::UserNotFound)
    }

    async fn delete_user(&self, id: i64) -> Result<(), UserError> {
        let existing = self.user_repository.find_by_id(id).await?;
        if existing.is_none() {
            return Err(UserError::UserNotFound);
        }

        // Restrict-delete: expenses keep their user row alive.
        let in_use = self
            .expense_repository
            .exists_for_user(id)
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;
        if in_use {
            return Err(UserError::UserHasExpenses);
        }

        Ok(self.user_repository.delete(id).await?)
    }

    async fn login(&self, request: LoginRequest) -> Result<User, UserError> {
        let user = self
            .user_repository
            .find_by_email(&request.email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        let is_valid = verify_password(&request.password, &user.password_hash)
            .map_err(|e| UserError::DatabaseError(format!("Password verification failed: {}", e)))?;
        if !is_valid {
            return Err(UserError::InvalidCredentials);
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::test_support::{MockExpenseRepository, MockUserRepository};

    fn service_with(
        users: Arc<MockUserRepository>,
        expenses: Arc<MockExpenseRepository>,
    ) -> UserServiceImpl {
        UserServiceImpl::new(users, expenses)
    }

    fn register_request(email: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: "Test User".to_string(),
            email: email.to_string(),
            password: "password123".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let service = service_with(
            Arc::new(MockUserRepository::new()),
            Arc::new(MockExpenseRepository::new()),
        );

        let user = service
            .register(register_request("test@example.com"))
            .await
            .unwrap();

        assert_eq!(user.name, "Test User");
        assert_eq!(user.email, "test@example.com");
        // The stored hash must never equal the plaintext
        assert_ne!(user.password_hash, "password123");
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let users = Arc::new(MockUserRepository::new());
        let service = service_with(users.clone(), Arc::new(MockExpenseRepository::new()));

        let first = service
            .register(register_request("test@example.com"))
            .await
            .unwrap();

        let result = service.register(register_request("test@example.com")).await;
        assert!(matches!(result, Err(UserError::DuplicateEmail)));

        // First user is unaffected
        let still_there = service.get_user(first.id).await.unwrap();
        assert_eq!(still_there.email, "test@example.com");
    }

    #[tokio::test]
    async fn test_login_success_returns_user() {
        let service = service_with(
            Arc::new(MockUserRepository::new()),
            Arc::new(MockExpenseRepository::new()),
        );

        let registered = service
            .register(register_request("test@example.com"))
            .await
            .unwrap();

        let user = service
            .login(LoginRequest {
                email: "test@example.com".to_string(),
                password: "password123".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(user.id, registered.id);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let service = service_with(
            Arc::new(MockUserRepository::new()),
            Arc::new(MockExpenseRepository::new()),
        );

        service
            .register(register_request("test@example.com"))
            .await
            .unwrap();

        let result = service
            .login(LoginRequest {
                email: "test@example.com".to_string(),
                password: "wrongpassword".to_string(),
            })
            .await;

        assert!(matches!(result, Err(UserError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_email_same_error() {
        let service = service_with(
            Arc::new(MockUserRepository::new()),
            Arc::new(MockExpenseRepository::new()),
        );

        let result = service
            .login(LoginRequest {
                email: "nobody@example.com".to_string(),
                password: "password123".to_string(),
            })
            .await;

        // Same variant as wrong password, so the caller cannot tell which
        assert!(matches!(result, Err(UserError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let service = service_with(
            Arc::new(MockUserRepository::new()),
            Arc::new(MockExpenseRepository::new()),
        );

        let result = service.get_user(999).await;
        assert!(matches!(result, Err(UserError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_delete_user_then_lookup_fails() {
        let service = service_with(
            Arc::new(MockUserRepository::new()),
            Arc::new(MockExpenseRepository::new()),
        );

        let user = service
            .register(register_request("test@example.com"))
            .await
            .unwrap();

        service.delete_user(user.id).await.unwrap();

        let result = service.get_user(user.id).await;
        assert!(matches!(result, Err(UserError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_delete_user_not_found() {
        let service = service_with(
            Arc::new(MockUserRepository::new()),
            Arc::new(MockExpenseRepository::new()),
        );

        let result = service.delete_user(999).await;
        assert!(matches!(result, Err(UserError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_delete_user_with_expenses_is_refused() {
        let users = Arc::new(MockUserRepository::new());
        let expenses = Arc::new(MockExpenseRepository::new());
        let service = service_with(users, expenses.clone());

        let user = service
            .register(register_request("test@example.com"))
            .await
            .unwrap();

        expenses
            .create(
                10.0,
                "mercado",
                chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                1,
                user.id,
            )
            .await
            .unwrap();

        let result = service.delete_user(user.id).await;
        assert!(matches!(result, Err(UserError::UserHasExpenses)));

        // User row survives the refused delete
        assert!(service.get_user(user.id).await.is_ok());
    }
}
