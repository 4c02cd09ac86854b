pub mod category_handlers;
pub mod expense_handlers;
pub mod user_handlers;

use axum::{
    routing::{delete, get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::services::category_service::CategoryService;
use crate::services::expense_service::ExpenseService;
use crate::services::user_service::UserService;

/// Storage-backed services shared by the request handlers. Constructed once
/// at startup and injected per request; no module-level singleton.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub category_service: Arc<dyn CategoryService>,
    pub expense_service: Arc<dyn ExpenseService>,
}

/// Error response structure
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(rename = "mensagem")]
    pub message: String,
}

impl ErrorResponse {
    pub(crate) fn new(error: &str, message: &str) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
        }
    }
}

/// Build the API router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/categorias",
            post(category_handlers::create_category_handler)
                .get(category_handlers::list_categories_handler),
        )
        .route(
            "/categorias/:id",
            delete(category_handlers::delete_category_handler),
        )
        .route(
            "/gastos",
            post(expense_handlers::create_expense_handler)
                .get(expense_handlers::list_expenses_handler),
        )
        .route("/gastos/:id", delete(expense_handlers::delete_expense_handler))
        .route(
            "/usuarios",
            post(user_handlers::create_user_handler).get(user_handlers::list_users_handler),
        )
        .route(
            "/usuarios/:id",
            get(user_handlers::get_user_handler).delete(user_handlers::delete_user_handler),
        )
        .route("/login", post(user_handlers::login_handler))
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
