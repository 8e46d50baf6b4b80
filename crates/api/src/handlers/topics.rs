//! Handlers for topics: list, detail, and the new-topic form.

use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use learning_log_core::error::CoreError;
use learning_log_core::forms::{validate_form, FormOutcome};
use learning_log_core::ownership::ensure_owner;
use learning_log_core::topic::{TopicForm, TOPIC_ENTITY};
use learning_log_core::types::DbId;
use learning_log_core::visibility::TopicScope;
use learning_log_db::models::entry::Entry;
use learning_log_db::models::topic::{CreateTopic, Topic};
use learning_log_db::repositories::{EntryRepo, TopicRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppForm, ResourceId};
use crate::middleware::auth::{AuthUser, MaybeAuthUser};
use crate::response::{DataResponse, FormPage, NoContext};
use crate::routes::paths;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// An entry as shown on its topic page.
#[derive(Debug, Serialize)]
pub struct EntryItem {
    #[serde(flatten)]
    pub entry: Entry,
    pub excerpt: String,
}

impl From<Entry> for EntryItem {
    fn from(entry: Entry) -> Self {
        let excerpt = entry.excerpt();
        Self { entry, excerpt }
    }
}

/// A topic with its entries, most recent first.
#[derive(Debug, Serialize)]
pub struct TopicDetail {
    pub topic: Topic,
    pub entries: Vec<EntryItem>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fetch a topic by id and apply the ownership guard.
///
/// Absent and foreign topics both yield `NotFound`.
pub(crate) async fn find_owned_topic(
    state: &AppState,
    topic_id: DbId,
    auth: &AuthUser,
) -> AppResult<Topic> {
    let topic = TopicRepo::find_by_id(&state.pool, topic_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: TOPIC_ENTITY,
            id: topic_id,
        }))?;
    ensure_owner(&topic, auth.user_id, TOPIC_ENTITY, topic_id)?;
    Ok(topic)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /topics/
///
/// Anonymous visitors see public topics; authenticated users also see their
/// own private topics. Oldest first.
pub async fn list_topics(
    requester: MaybeAuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Topic>>>> {
    let scope = TopicScope::for_requester(requester.user_id());
    let topics = TopicRepo::list_visible(&state.pool, scope).await?;
    Ok(Json(DataResponse { data: topics }))
}

/// GET /topics/{topic_id}/
pub async fn show_topic(
    auth: AuthUser,
    State(state): State<AppState>,
    ResourceId(topic_id): ResourceId,
) -> AppResult<Json<DataResponse<TopicDetail>>> {
    let topic = find_owned_topic(&state, topic_id, &auth).await?;
    let entries = EntryRepo::list_by_topic(&state.pool, topic.id)
        .await?
        .into_iter()
        .map(EntryItem::from)
        .collect();

    Ok(Json(DataResponse {
        data: TopicDetail { topic, entries },
    }))
}

/// GET /new_topic/
pub async fn new_topic_form(_auth: AuthUser) -> FormPage<TopicForm> {
    FormPage::initial(TopicForm::default(), NoContext {})
}

/// POST /new_topic/
///
/// The owner is always the requester; the form has no owner field.
pub async fn create_topic(
    auth: AuthUser,
    State(state): State<AppState>,
    AppForm(form): AppForm<TopicForm>,
) -> AppResult<Response> {
    match validate_form(form) {
        FormOutcome::Invalid { input, errors } => {
            Ok(FormPage::invalid(input, errors, NoContext {}).into_response())
        }
        FormOutcome::Valid(form) => {
            let input = CreateTopic::from_form(auth.user_id, &form);
            let topic = TopicRepo::create(&state.pool, &input).await?;

            tracing::info!(
                topic_id = topic.id,
                user_id = auth.user_id,
                public = topic.public,
                "Topic created",
            );

            Ok(Redirect::to(paths::TOPICS).into_response())
        }
    }
}
