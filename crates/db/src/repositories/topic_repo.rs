//! Repository for the `topics` table.

use learning_log_core::types::DbId;
use learning_log_core::visibility::TopicScope;
use sqlx::PgPool;

use crate::models::topic::{CreateTopic, Topic};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, text, public, owner_id, created_at";

/// Provides create/read operations for topics. Topics are never updated or
/// deleted through this repository.
pub struct TopicRepo;

impl TopicRepo {
    /// Insert a new topic, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTopic) -> Result<Topic, sqlx::Error> {
        let query = format!(
            "INSERT INTO topics (text, public, owner_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Topic>(&query)
            .bind(&input.text)
            .bind(input.public)
            .bind(input.owner_id)
            .fetch_one(pool)
            .await
    }

    /// Find a topic by its internal ID.
    ///
    /// No ownership filtering happens here; callers apply the ownership guard.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Topic>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM topics WHERE id = $1");
        sqlx::query_as::<_, Topic>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the topics visible in `scope`, oldest first.
    pub async fn list_visible(
        pool: &PgPool,
        scope: TopicScope,
    ) -> Result<Vec<Topic>, sqlx::Error> {
        match scope {
            TopicScope::PublicOnly => {
                let query = format!(
                    "SELECT {COLUMNS} FROM topics
                     WHERE public = TRUE
                     ORDER BY created_at ASC, id ASC"
                );
                sqlx::query_as::<_, Topic>(&query).fetch_all(pool).await
            }
            TopicScope::PublicOrOwnedBy(owner_id) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM topics
                     WHERE public = TRUE OR owner_id = $1
                     ORDER BY created_at ASC, id ASC"
                );
                sqlx::query_as::<_, Topic>(&query)
                    .bind(owner_id)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Count topics owned by a user.
    pub async fn count_by_owner(pool: &PgPool, owner_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM topics WHERE owner_id = $1")
            .bind(owner_id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
