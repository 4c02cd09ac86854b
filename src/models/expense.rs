use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::category::Category;

/// Expense row as stored.
#[derive(Debug, Clone, FromRow)]
pub struct Expense {
    pub id: i64,
    pub amount: f64,
    pub description: String,
    pub date: NaiveDate,
    pub category_id: i64,
    pub user_id: i64,
}

/// Expense joined with its category, as returned by list queries.
#[derive(Debug, Clone, FromRow)]
pub struct ExpenseWithCategory {
    pub id: i64,
    pub amount: f64,
    pub description: String,
    pub date: NaiveDate,
    pub category_id: i64,
    pub category_name: String,
}

/// Request payload for creating an expense
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "valor": 42.5,
    "descricao": "mercado",
    "data": "2024-01-15",
    "categoria_id": 1,
    "usuario_id": 1
}))]
pub struct CreateExpenseRequest {
    #[serde(rename = "valor")]
    pub amount: f64,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "categoria_id")]
    pub category_id: i64,
    #[serde(rename = "usuario_id")]
    pub user_id: i64,
}

/// Expense as returned to clients: embeds the full Category, omits the user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExpenseResponse {
    pub id: i64,
    #[serde(rename = "valor")]
    pub amount: f64,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "categoria")]
    pub category: Category,
}

impl From<ExpenseWithCategory> for ExpenseResponse {
    fn from(row: ExpenseWithCategory) -> Self {
        Self {
            id: row.id,
            amount: row.amount,
            description: row.description,
            date: row.date,
            category: Category {
                id: row.category_id,
                name: row.category_name,
            },
        }
    }
}

impl ExpenseResponse {
    pub fn from_expense(expense: Expense, category: Category) -> Self {
        Self {
            id: expense.id,
            amount: expense.amount,
            description: expense.description,
            date: expense.date,
            category,
        }
    }
}
