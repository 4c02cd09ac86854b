//! In-memory repository fakes shared by the unit tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Mutex;

use crate::models::category::Category;
use crate::models::expense::{Expense, ExpenseWithCategory};
use crate::models::user::User;
use crate::repositories::category_repository::CategoryRepository;
use crate::repositories::expense_repository::ExpenseRepository;
use crate::repositories::user_repository::UserRepository;
use crate::repositories::RepositoryError;

pub struct MockUserRepository {
    users: Mutex<Vec<User>>,
    next_id: Mutex<i64>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
        }
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == email) {
            return Err(RepositoryError::ConstraintViolation(
                "UNIQUE constraint failed: users.email".to_string(),
            ));
        }

        let mut next_id = self.next_id.lock().unwrap();
        let user = User {
            id: *next_id,
            name: name.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
        };
        *next_id += 1;

        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepositoryError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        let users = self.users.lock().unwrap();
        Ok(users.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

pub struct MockCategoryRepository {
    categories: Mutex<Vec<Category>>,
    next_id: Mutex<i64>,
}

impl MockCategoryRepository {
    pub fn new() -> Self {
        Self {
            categories: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
        }
    }
}

#[async_trait]
impl CategoryRepository for MockCategoryRepository {
    async fn create(&self, name: &str) -> Result<Category, RepositoryError> {
        let mut categories = self.categories.lock().unwrap();
        if categories.iter().any(|c| c.name == name) {
            return Err(RepositoryError::ConstraintViolation(
                "UNIQUE constraint failed: categories.name".to_string(),
            ));
        }

        let mut next_id = self.next_id.lock().unwrap();
        let category = Category {
            id: *next_id,
            name: name.to_string(),
        };
        *next_id += 1;

        categories.push(category.clone());
        Ok(category)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, RepositoryError> {
        let categories = self.categories.lock().unwrap();
        Ok(categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let categories = self.categories.lock().unwrap();
        Ok(categories.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut categories = self.categories.lock().unwrap();
        let before = categories.len();
        categories.retain(|c| c.id != id);
        if categories.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

pub struct MockExpenseRepository {
    expenses: Mutex<Vec<Expense>>,
    // Category names mirrored here so find_by_user can join.
    category_names: Mutex<Vec<(i64, String)>>,
    next_id: Mutex<i64>,
}

impl MockExpenseRepository {
    pub fn new() -> Self {
        Self {
            expenses: Mutex::new(Vec::new()),
            category_names: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
        }
    }

    pub fn register_category(&self, id: i64, name: &str) {
        self.category_names
            .lock()
            .unwrap()
            .push((id, name.to_string()));
    }
}

#[async_trait]
impl ExpenseRepository for MockExpenseRepository {
    async fn create(
        &self,
        amount: f64,
        description: &str,
        date: NaiveDate,
        category_id: i64,
        user_id: i64,
    ) -> Result<Expense, RepositoryError> {
        let mut next_id = self.next_id.lock().unwrap();
        let expense = Expense {
            id: *next_id,
            amount,
            description: description.to_string(),
            date,
            category_id,
            user_id,
        };
        *next_id += 1;

        self.expenses.lock().unwrap().push(expense.clone());
        Ok(expense)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Expense>, RepositoryError> {
        let expenses = self.expenses.lock().unwrap();
        Ok(expenses.iter().find(|e| e.id == id).cloned())
    }

    async fn find_by_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<ExpenseWithCategory>, RepositoryError> {
        let expenses = self.expenses.lock().unwrap();
        let names = self.category_names.lock().unwrap();

        Ok(expenses
            .iter()
            .filter(|e| e.user_id == user_id)
            .map(|e| ExpenseWithCategory {
                id: e.id,
                amount: e.amount,
                description: e.description.clone(),
                date: e.date,
                category_id: e.category_id,
                category_name: names
                    .iter()
                    .find(|(id, _)| *id == e.category_id)
                    .map(|(_, name)| name.clone())
                    .unwrap_or_default(),
            })
            .collect())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut expenses = self.expenses.lock().unwrap();
        let before = expenses.len();
        expenses.retain(|e| e.id != id);
        if expenses.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn exists_for_user(&self, user_id: i64) -> Result<bool, RepositoryError> {
        let expenses = self.expenses.lock().unwrap();
        Ok(expenses.iter().any(|e| e.user_id == user_id))
    }

    async fn exists_for_category(&self, category_id: i64) -> Result<bool, RepositoryError> {
        let expenses = self.expenses.lock().unwrap();
        Ok(expenses.iter().any(|e| e.category_id == category_id))
    }
}
