use crate::models::picks::{Pick, PickResult};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

pub struct PickRepository {
    db: Arc<PgPool>,
}

impl PickRepository {
    pub fn new(db: Arc<PgPool>) -> Self {
        PickRepository { db }
    }

    pub async fn list_picks_for_game(&self, game_id: Uuid) -> Result<Vec<Pick>, sqlx::Error> {
        let query = r#"
        SELECT p.*
        FROM picks.pick p
        WHERE p.game_id = $1 AND p.submitted = TRUE
        "#;
        sqlx::query_as::<_, Pick>(query)
            .bind(game_id)
            .fetch_all(self.db.as_ref())
            .await
    }

    pub async fn list_graded_picks(&self) -> Result<Vec<Pick>, sqlx::Error> {
        let query = r#"
        SELECT p.*
        FROM picks.pick p
        WHERE p.submitted = TRUE AND p.result IS NOT NULL
        "#;
        sqlx::query_as::<_, Pick>(query)
            .fetch_all(self.db.as_ref())
            .await
    }

    /// Write back grading results in one transaction so standings never
    /// observe a half-graded game. Overwrites any prior result, which makes
    /// re-grading after a score correction safe.
    pub async fn update_results(
        &self,
        results: &[(Uuid, PickResult)],
    ) -> Result<(), sqlx::Error> {
        let mut tx = self.db.begin().await?;

        for (pick_id, result) in results {
            sqlx::query("UPDATE picks.pick SET result = $1 WHERE id = $2")
                .bind(*result)
                .bind(*pick_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(())
    }
}
