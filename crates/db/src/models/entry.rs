//! Entry entity model and DTOs.

use learning_log_core::entry::excerpt;
use learning_log_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An entry row from the `entries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Entry {
    pub id: DbId,
    pub topic_id: DbId,
    pub text: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Entry {
    /// Preview of the body for list views.
    pub fn excerpt(&self) -> String {
        excerpt(&self.text)
    }
}

/// DTO for inserting an entry. `topic_id` is always the topic resolved by
/// the handler, never a submitted value.
#[derive(Debug, Clone)]
pub struct CreateEntry {
    pub topic_id: DbId,
    pub text: String,
}
