use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Category entity, a named tag for expenses. Names are globally unique.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
}

/// Request payload for creating a category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"nome": "alimentação"}))]
pub struct CreateCategoryRequest {
    #[serde(rename = "nome")]
    pub name: String,
}
