//! Topic entity model and DTOs.

use learning_log_core::ownership::Owned;
use learning_log_core::topic::TopicForm;
use learning_log_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A topic row from the `topics` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Topic {
    pub id: DbId,
    pub text: String,
    pub public: bool,
    pub owner_id: DbId,
    pub created_at: Timestamp,
}

impl Owned for Topic {
    fn owner_id(&self) -> DbId {
        self.owner_id
    }
}

/// DTO for inserting a topic.
///
/// Only constructible from a validated form plus the requester's id, so the
/// owner can never come from the submission.
#[derive(Debug, Clone)]
pub struct CreateTopic {
    pub owner_id: DbId,
    pub text: String,
    pub public: bool,
}

impl CreateTopic {
    pub fn from_form(owner_id: DbId, form: &TopicForm) -> Self {
        Self {
            owner_id,
            text: form.cleaned_text().to_string(),
            public: form.is_public(),
        }
    }
}
