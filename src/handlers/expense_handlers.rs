use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::handlers::{AppState, ErrorResponse};
use crate::models::expense::{CreateExpenseRequest, ExpenseResponse};
use crate::models::DeleteConfirmation;
use crate::services::expense_service::ExpenseError;

/// Convert ExpenseError to HTTP response
impl IntoResponse for ExpenseError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ExpenseError::CategoryNotFound => (
                StatusCode::NOT_FOUND,
                "category_not_found",
                "Categoria não encontrada".to_string(),
            ),
            ExpenseError::UserNotFound => (
                StatusCode::NOT_FOUND,
                "user_not_found",
                "Usuário não encontrado".to_string(),
            ),
            ExpenseError::ExpenseNotFound => (
                StatusCode::NOT_FOUND,
                "expense_not_found",
                "Gasto não encontrado".to_string(),
            ),
            ExpenseError::DatabaseError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "database_error", msg)
            }
        };

        let error_response = ErrorResponse::new(error_type, &message);
        (status, Json(error_response)).into_response()
    }
}

/// Required query filter for listing expenses
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListExpensesQuery {
    /// ID do usuário dono dos gastos
    pub usuario_id: i64,
}

/// Handler for creating an expense
///
/// The referenced category and user must both exist; the category is checked
/// first, so an invalid pair reports the missing category.
#[utoipa::path(
    post,
    path = "/gastos",
    request_body = CreateExpenseRequest,
    responses(
        (status = 200, description = "Gasto criado", body = ExpenseResponse),
        (status = 404, description = "Categoria ou usuário não encontrado", body = ErrorResponse),
        (status = 500, description = "Erro interno", body = ErrorResponse)
    ),
    tag = "gastos"
)]
pub async fn create_expense_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateExpenseRequest>,
) -> Result<Json<ExpenseResponse>, Response> {
    match state.expense_service.create_expense(request).await {
        Ok(expense) => Ok(Json(expense)),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for listing a user's expenses
///
/// `usuario_id` is required. An unknown id yields an empty list, not 404.
#[utoipa::path(
    get,
    path = "/gastos",
    params(ListExpensesQuery),
    responses(
        (status = 200, description = "Lista de gastos", body = Vec<ExpenseResponse>),
        (status = 500, description = "Erro interno", body = ErrorResponse)
    ),
    tag = "gastos"
)]
pub async fn list_expenses_handler(
    State(state): State<AppState>,
    Query(query): Query<ListExpensesQuery>,
) -> Result<Json<Vec<ExpenseResponse>>, Response> {
    match state.expense_service.list_by_user(query.usuario_id).await {
        Ok(expenses) => Ok(Json(expenses)),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for deleting an expense
#[utoipa::path(
    delete,
    path = "/gastos/{id}",
    params(("id" = i64, Path, description = "ID do gasto")),
    responses(
        (status = 200, description = "Gasto deletado", body = DeleteConfirmation),
        (status = 404, description = "Gasto não encontrado", body = ErrorResponse)
    ),
    tag = "gastos"
)]
pub async fn delete_expense_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteConfirmation>, Response> {
    match state.expense_service.delete_expense(id).await {
        Ok(()) => Ok(Json(DeleteConfirmation::new("Gasto deletado com sucesso."))),
        Err(e) => Err(e.into_response()),
    }
}
