use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Pool member. The wider user profile lives with the identity provider;
/// standings only need an id and a display name.
#[derive(Clone, Debug, Default, FromRow, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub username: String,
}
