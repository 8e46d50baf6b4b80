//! Handlers for the new-entry and edit-entry forms.
//!
//! Both are guarded by the owner of the topic the entry belongs to. The
//! parent topic always comes from the path (new) or the stored row (edit).

use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use learning_log_core::entry::{EntryForm, ENTRY_ENTITY};
use learning_log_core::error::CoreError;
use learning_log_core::forms::{validate_form, FormOutcome};
use learning_log_core::ownership::ensure_owner;
use learning_log_core::types::DbId;
use learning_log_db::models::entry::{CreateEntry, Entry};
use learning_log_db::models::topic::Topic;
use learning_log_db::repositories::{EntryRepo, TopicRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppForm, ResourceId};
use crate::handlers::topics::find_owned_topic;
use crate::middleware::auth::AuthUser;
use crate::response::FormPage;
use crate::routes::paths;
use crate::state::AppState;

/// Context rendered alongside the new-entry form.
#[derive(Debug, Serialize)]
pub struct NewEntryContext {
    pub topic: Topic,
}

/// Context rendered alongside the edit-entry form.
#[derive(Debug, Serialize)]
pub struct EditEntryContext {
    pub entry: Entry,
    pub topic: Topic,
}

fn entry_not_found(entry_id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: ENTRY_ENTITY,
        id: entry_id,
    })
}

/// Fetch an entry and its topic, guarded by the topic's owner.
///
/// Every failure (missing entry, missing topic, foreign topic) reads as
/// "entry not found".
async fn find_owned_entry(
    state: &AppState,
    entry_id: DbId,
    auth: &AuthUser,
) -> AppResult<(Entry, Topic)> {
    let entry = EntryRepo::find_by_id(&state.pool, entry_id)
        .await?
        .ok_or_else(|| entry_not_found(entry_id))?;
    let topic = TopicRepo::find_by_id(&state.pool, entry.topic_id)
        .await?
        .ok_or_else(|| entry_not_found(entry_id))?;
    ensure_owner(&topic, auth.user_id, ENTRY_ENTITY, entry_id)?;
    Ok((entry, topic))
}

// ---------------------------------------------------------------------------
// New entry
// ---------------------------------------------------------------------------

/// GET /new_entry/{topic_id}/
pub async fn new_entry_form(
    auth: AuthUser,
    State(state): State<AppState>,
    ResourceId(topic_id): ResourceId,
) -> AppResult<FormPage<EntryForm, NewEntryContext>> {
    let topic = find_owned_topic(&state, topic_id, &auth).await?;
    Ok(FormPage::initial(
        EntryForm::default(),
        NewEntryContext { topic },
    ))
}

/// POST /new_entry/{topic_id}/
pub async fn create_entry(
    auth: AuthUser,
    State(state): State<AppState>,
    ResourceId(topic_id): ResourceId,
    AppForm(form): AppForm<EntryForm>,
) -> AppResult<Response> {
    let topic = find_owned_topic(&state, topic_id, &auth).await?;

    match validate_form(form) {
        FormOutcome::Invalid { input, errors } => {
            Ok(FormPage::invalid(input, errors, NewEntryContext { topic }).into_response())
        }
        FormOutcome::Valid(form) => {
            let input = CreateEntry {
                topic_id: topic.id,
                text: form.text,
            };
            let entry = EntryRepo::create(&state.pool, &input).await?;

            tracing::info!(
                entry_id = entry.id,
                topic_id = topic.id,
                user_id = auth.user_id,
                "Entry created",
            );

            Ok(Redirect::to(&paths::topic(topic.id)).into_response())
        }
    }
}

// ---------------------------------------------------------------------------
// Edit entry
// ---------------------------------------------------------------------------

/// GET /edit_entry/{entry_id}/
///
/// The form comes back pre-populated with the current body.
pub async fn edit_entry_form(
    auth: AuthUser,
    State(state): State<AppState>,
    ResourceId(entry_id): ResourceId,
) -> AppResult<FormPage<EntryForm, EditEntryContext>> {
    let (entry, topic) = find_owned_entry(&state, entry_id, &auth).await?;
    let form = EntryForm {
        text: entry.text.clone(),
    };
    Ok(FormPage::initial(form, EditEntryContext { entry, topic }))
}

/// POST /edit_entry/{entry_id}/
///
/// Only the body changes; the entry keeps its id and topic.
pub async fn update_entry(
    auth: AuthUser,
    State(state): State<AppState>,
    ResourceId(entry_id): ResourceId,
    AppForm(form): AppForm<EntryForm>,
) -> AppResult<Response> {
    let (entry, topic) = find_owned_entry(&state, entry_id, &auth).await?;

    match validate_form(form) {
        FormOutcome::Invalid { input, errors } => {
            Ok(FormPage::invalid(input, errors, EditEntryContext { entry, topic }).into_response())
        }
        FormOutcome::Valid(form) => {
            let updated = EntryRepo::update_text(&state.pool, entry.id, &form.text)
                .await?
                .ok_or_else(|| entry_not_found(entry_id))?;

            tracing::info!(
                entry_id = updated.id,
                topic_id = updated.topic_id,
                user_id = auth.user_id,
                "Entry updated",
            );

            Ok(Redirect::to(&paths::topic(topic.id)).into_response())
        }
    }
}
