use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::handlers::{AppState, ErrorResponse};
use crate::models::auth::LoginRequest;
use crate::models::user::{CreateUserRequest, User};
use crate::models::DeleteConfirmation;
use crate::services::user_service::UserError;

/// Convert UserError to HTTP response
impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            UserError::DuplicateEmail => (
                StatusCode::BAD_REQUEST,
                "duplicate_email",
                "Email já cadastrado".to_string(),
            ),
            UserError::UserNotFound => (
                StatusCode::NOT_FOUND,
                "user_not_found",
                "Usuário não encontrado".to_string(),
            ),
            UserError::UserHasExpenses => (
                StatusCode::CONFLICT,
                "user_has_expenses",
                "Usuário possui gastos vinculados".to_string(),
            ),
            UserError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "invalid_credentials",
                "Email ou senha inválidos".to_string(),
            ),
            UserError::DatabaseError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "database_error", msg)
            }
        };

        let error_response = ErrorResponse::new(error_type, &message);
        (status, Json(error_response)).into_response()
    }
}

/// Handler for user registration
///
/// Stores the name, email, and a bcrypt hash of the password. The response
/// never carries the hash.
#[utoipa::path(
    post,
    path = "/usuarios",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Usuário criado", body = User),
        (status = 400, description = "Email já cadastrado", body = ErrorResponse),
        (status = 500, description = "Erro interno", body = ErrorResponse)
    ),
    tag = "usuarios"
)]
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<User>, Response> {
    match state.user_service.register(request).await {
        Ok(user) => Ok(Json(user)),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for listing every user
#[utoipa::path(
    get,
    path = "/usuarios",
    responses(
        (status = 200, description = "Lista de usuários", body = Vec<User>),
        (status = 500, description = "Erro interno", body = ErrorResponse)
    ),
    tag = "usuarios"
)]
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, Response> {
    match state.user_service.list_users().await {
        Ok(users) => Ok(Json(users)),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for fetching a single user by ID
#[utoipa::path(
    get,
    path = "/usuarios/{id}",
    params(("id" = i64, Path, description = "ID do usuário")),
    responses(
        (status = 200, description = "Usuário encontrado", body = User),
        (status = 404, description = "Usuário não encontrado", body = ErrorResponse)
    ),
    tag = "usuarios"
)]
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, Response> {
    match state.user_service.get_user(id).await {
        Ok(user) => Ok(Json(user)),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for deleting a user
///
/// Refused with 409 while expenses still reference the user.
#[utoipa::path(
    delete,
    path = "/usuarios/{id}",
    params(("id" = i64, Path, description = "ID do usuário")),
    responses(
        (status = 200, description = "Usuário deletado", body = DeleteConfirmation),
        (status = 404, description = "Usuário não encontrado", body = ErrorResponse),
        (status = 409, description = "Usuário possui gastos vinculados", body = ErrorResponse)
    ),
    tag = "usuarios"
)]
pub async fn delete_user_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteConfirmation>, Response> {
    match state.user_service.delete_user(id).await {
        Ok(()) => Ok(Json(DeleteConfirmation::new("Usuário deletado com sucesso"))),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for login
///
/// Checks credentials and returns the matching user. There is no token or
/// session; every request stands alone.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credenciais válidas", body = User),
        (status = 401, description = "Email ou senha inválidos", body = ErrorResponse)
    ),
    tag = "usuarios"
)]
pub async fn login_handler(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<User>, Response> {
    match state.user_service.login(request).await {
        Ok(user) => Ok(Json(user)),
        Err(e) => Err(e.into_response()),
    }
}
