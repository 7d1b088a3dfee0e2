use crate::models::users::User;
use sqlx::PgPool;
use std::sync::Arc;

pub struct UserRepository {
    db: Arc<PgPool>,
}

impl UserRepository {
    pub fn new(db: Arc<PgPool>) -> Self {
        UserRepository { db }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, sqlx::Error> {
        let query = r#"
        SELECT u.id, u.username
        FROM public.user u
        "#;
        sqlx::query_as::<_, User>(query)
            .fetch_all(self.db.as_ref())
            .await
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error> {
        let query = r#"
        SELECT u.id, u.username
        FROM public.user u
        WHERE u.username = $1
        "#;
        sqlx::query_as::<_, User>(query)
            .bind(username)
            .fetch_optional(self.db.as_ref())
            .await
    }
}
