use std::env;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use gastos_api::handlers::{self, AppState, ErrorResponse};
use gastos_api::models::auth::LoginRequest;
use gastos_api::models::category::{Category, CreateCategoryRequest};
use gastos_api::models::expense::{CreateExpenseRequest, ExpenseResponse};
use gastos_api::models::user::{CreateUserRequest, User};
use gastos_api::models::DeleteConfirmation;
use gastos_api::repositories::category_repository::SqliteCategoryRepository;
use gastos_api::repositories::expense_repository::SqliteExpenseRepository;
use gastos_api::repositories::user_repository::SqliteUserRepository;
use gastos_api::services::category_service::CategoryServiceImpl;
use gastos_api::services::expense_service::ExpenseServiceImpl;
use gastos_api::services::user_service::UserServiceImpl;
use gastos_api::db;

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        gastos_api::handlers::category_handlers::create_category_handler,
        gastos_api::handlers::category_handlers::list_categories_handler,
        gastos_api::handlers::category_handlers::delete_category_handler,
        gastos_api::handlers::expense_handlers::create_expense_handler,
        gastos_api::handlers::expense_handlers::list_expenses_handler,
        gastos_api::handlers::expense_handlers::delete_expense_handler,
        gastos_api::handlers::user_handlers::create_user_handler,
        gastos_api::handlers::user_handlers::list_users_handler,
        gastos_api::handlers::user_handlers::get_user_handler,
        gastos_api::handlers::user_handlers::delete_user_handler,
        gastos_api::handlers::user_handlers::login_handler,
    ),
    components(
        schemas(
            Category,
            CreateCategoryRequest,
            CreateExpenseRequest,
            ExpenseResponse,
            User,
            CreateUserRequest,
            LoginRequest,
            DeleteConfirmation,
            ErrorResponse
        )
    ),
    tags(
        (name = "categorias", description = "Gerenciamento de categorias"),
        (name = "gastos", description = "Gerenciamento de gastos"),
        (name = "usuarios", description = "Gerenciamento de usuários e login")
    ),
    info(
        title = "Gastos API",
        version = "0.1.0",
        description = "API REST para controle de gastos pessoais",
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gastos_api=info,tower_http=info".into()),
        )
        .init();

    // Get configuration from environment
    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://gastos.db".to_string());
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());

    // Create database connection pool and schema
    let pool = db::connect(&database_url).await?;
    db::init_schema(&pool).await?;
    tracing::info!(%database_url, "connected to database");

    // Initialize repositories
    let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
    let category_repository = Arc::new(SqliteCategoryRepository::new(pool.clone()));
    let expense_repository = Arc::new(SqliteExpenseRepository::new(pool.clone()));

    // Initialize services
    let state = AppState {
        user_service: Arc::new(UserServiceImpl::new(
            user_repository.clone(),
            expense_repository.clone(),
        )),
        category_service: Arc::new(CategoryServiceImpl::new(
            category_repository.clone(),
            expense_repository.clone(),
        )),
        expense_service: Arc::new(ExpenseServiceImpl::new(
            expense_repository,
            category_repository,
            user_repository,
        )),
    };

    // Build router with routes, Swagger UI and middleware
    let app = handlers::router(state)
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("server running on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
