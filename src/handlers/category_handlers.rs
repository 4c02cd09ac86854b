use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::handlers::{AppState, ErrorResponse};
use crate::models::category::{Category, CreateCategoryRequest};
use crate::models::DeleteConfirmation;
use crate::services::category_service::CategoryError;

/// Convert CategoryError to HTTP response
impl IntoResponse for CategoryError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            CategoryError::DuplicateName => (
                StatusCode::CONFLICT,
                "duplicate_name",
                "Categoria já cadastrada".to_string(),
            ),
            CategoryError::CategoryNotFound => (
                StatusCode::NOT_FOUND,
                "category_not_found",
                "Categoria não encontrada".to_string(),
            ),
            CategoryError::CategoryHasExpenses => (
                StatusCode::CONFLICT,
                "category_has_expenses",
                "Categoria possui gastos vinculados".to_string(),
            ),
            CategoryError::DatabaseError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "database_error", msg)
            }
        };

        let error_response = ErrorResponse::new(error_type, &message);
        (status, Json(error_response)).into_response()
    }
}

/// Handler for creating a category
///
/// No uniqueness pre-check here; a duplicate name comes back from the store
/// as a constraint violation and maps to 409.
#[utoipa::path(
    post,
    path = "/categorias",
    request_body = CreateCategoryRequest,
    responses(
        (status = 200, description = "Categoria criada", body = Category),
        (status = 409, description = "Categoria já cadastrada", body = ErrorResponse),
        (status = 500, description = "Erro interno", body = ErrorResponse)
    ),
    tag = "categorias"
)]
pub async fn create_category_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateCategoryRequest>,
) -> Result<Json<Category>, Response> {
    match state.category_service.create_category(request).await {
        Ok(category) => Ok(Json(category)),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for listing every category
#[utoipa::path(
    get,
    path = "/categorias",
    responses(
        (status = 200, description = "Lista de categorias", body = Vec<Category>),
        (status = 500, description = "Erro interno", body = ErrorResponse)
    ),
    tag = "categorias"
)]
pub async fn list_categories_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, Response> {
    match state.category_service.list_categories().await {
        Ok(categories) => Ok(Json(categories)),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for deleting a category
///
/// Refused with 409 while expenses still reference the category.
#[utoipa::path(
    delete,
    path = "/categorias/{id}",
    params(("id" = i64, Path, description = "ID da categoria")),
    responses(
        (status = 200, description = "Categoria deletada", body = DeleteConfirmation),
        (status = 404, description = "Categoria não encontrada", body = ErrorResponse),
        (status = 409, description = "Categoria possui gastos vinculados", body = ErrorResponse)
    ),
    tag = "categorias"
)]
pub async fn delete_category_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteConfirmation>, Response> {
    match state.category_service.delete_category(id).await {
        Ok(()) => Ok(Json(DeleteConfirmation::new(
            "Categoria deletada com sucesso.",
        ))),
        Err(e) => Err(e.into_response()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::test_support::{
        MockCategoryRepository, MockExpenseRepository, MockUserRepository,
    };
    use crate::services::category_service::CategoryServiceImpl;
    use crate::services::expense_service::ExpenseServiceImpl;
    use crate::services::user_service::UserServiceImpl;
    use std::sync::Arc;

    fn test_state() -> AppState {
        let users = Arc::new(MockUserRepository::new());
        let categories = Arc::new(MockCategoryRepository::new());
        let expenses = Arc::new(MockExpenseRepository::new());

        AppState {
            user_service: Arc::new(UserServiceImpl::new(users.clone(), expenses.clone())),
            category_service: Arc::new(CategoryServiceImpl::new(
                categories.clone(),
                expenses.clone(),
            )),
            expense_service: Arc::new(ExpenseServiceImpl::new(expenses, categories, users)),
        }
    }

    #[tokio::test]
    async fn test_create_category_handler_success() {
        let state = test_state();

        let result = create_category_handler(
            State(state),
            Json(CreateCategoryRequest {
                name: "alimentação".to_string(),
            }),
        )
        .await;
        assert!(result.is_ok());

        let Json(category) = result.unwrap();
        assert_eq!(category.name, "alimentação");
    }

    #[tokio::test]
    async fn test_create_category_handler_duplicate_name() {
        let state = test_state();

        let request = CreateCategoryRequest {
            name: "transporte".to_string(),
        };
        let _ = create_category_handler(State(state.clone()), Json(request.clone())).await;

        let result = create_category_handler(State(state), Json(request)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_delete_category_handler_not_found() {
        let state = test_state();

        let result = delete_category_handler(State(state), Path(999)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_delete_category_handler_confirmation() {
        let state = test_state();

        let Json(category) = create_category_handler(
            State(state.clone()),
            Json(CreateCategoryRequest {
                name: "lazer".to_string(),
            }),
        )
        .await
        .unwrap();

        let Json(confirmation) = delete_category_handler(State(state), Path(category.id))
            .await
            .unwrap();
        assert!(confirmation.ok);
        assert_eq!(confirmation.message, "Categoria deletada com sucesso.");
    }
}
