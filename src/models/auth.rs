use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request payload for login. Login only checks credentials; there is no
/// token or session in this API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
}
