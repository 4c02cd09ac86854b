pub mod auth;
pub mod category;
pub mod expense;
pub mod user;

pub use auth::LoginRequest;
pub use category::{Category, CreateCategoryRequest};
pub use expense::{CreateExpenseRequest, Expense, ExpenseResponse, ExpenseWithCategory};
pub use user::{CreateUserRequest, User};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Acknowledgment returned by every delete endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteConfirmation {
    pub ok: bool,
    #[serde(rename = "mensagem")]
    pub message: String,
}

impl DeleteConfirmation {
    pub fn new(message: &str) -> Self {
        Self {
            ok: true,
            message: message.to_string(),
        }
    }
}
