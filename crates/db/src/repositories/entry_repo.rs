//! Repository for the `entries` table.

use learning_log_core::types::DbId;
use sqlx::PgPool;

use crate::models::entry::{CreateEntry, Entry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, topic_id, text, created_at, updated_at";

/// Provides create/read/update operations for entries.
pub struct EntryRepo;

impl EntryRepo {
    /// Insert a new entry, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEntry) -> Result<Entry, sqlx::Error> {
        let query = format!(
            "INSERT INTO entries (topic_id, text)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Entry>(&query)
            .bind(input.topic_id)
            .bind(&input.text)
            .fetch_one(pool)
            .await
    }

    /// Find an entry by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Entry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM entries WHERE id = $1");
        sqlx::query_as::<_, Entry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all entries of a topic, most recent first.
    pub async fn list_by_topic(pool: &PgPool, topic_id: DbId) -> Result<Vec<Entry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM entries
             WHERE topic_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Entry>(&query)
            .bind(topic_id)
            .fetch_all(pool)
            .await
    }

    /// Replace the body of an existing entry. The row keeps its id and
    /// parent topic.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_text(
        pool: &PgPool,
        id: DbId,
        text: &str,
    ) -> Result<Option<Entry>, sqlx::Error> {
        let query = format!(
            "UPDATE entries SET text = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Entry>(&query)
            .bind(id)
            .bind(text)
            .fetch_optional(pool)
            .await
    }

    /// Count entries attached to a topic.
    pub async fn count_by_topic(pool: &PgPool, topic_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM entries WHERE topic_id = $1")
            .bind(topic_id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
