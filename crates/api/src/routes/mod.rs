pub mod health;
pub mod users;

use axum::routing::get;
use axum::Router;

use crate::handlers::{entries, pages, topics};
use crate::state::AppState;

/// Canonical paths used for redirects.
pub mod paths {
    use learning_log_core::types::DbId;

    pub const TOPICS: &str = "/topics/";

    /// Detail page of one topic.
    pub fn topic(topic_id: DbId) -> String {
        format!("/topics/{topic_id}/")
    }

    /// Pages reachable without an id segment.
    const STATIC_PAGES: [&str; 4] = ["/topics", "/new_topic", "/users/register", "/users/login"];

    /// Pages followed by exactly one id segment.
    const ID_PAGES: [&str; 3] = ["/topics/", "/new_entry/", "/edit_entry/"];

    /// The slash-terminated form of `path`, when that form is a known page.
    pub fn with_trailing_slash(path: &str) -> Option<String> {
        if path.ends_with('/') {
            return None;
        }
        let known = STATIC_PAGES.contains(&path)
            || ID_PAGES.iter().any(|prefix| {
                path.strip_prefix(prefix)
                    .is_some_and(|id| !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()))
            });
        known.then(|| format!("{path}/"))
    }

}

/// Build the site route tree.
///
/// ```text
/// GET        /                          -> landing page
/// GET        /topics/                   -> list visible topics (auth optional)
/// GET        /topics/{topic_id}/        -> topic + entries (auth)
/// GET, POST  /new_topic/                -> new topic form (auth)
/// GET, POST  /new_entry/{topic_id}/     -> new entry form (auth)
/// GET, POST  /edit_entry/{entry_id}/    -> edit entry form (auth)
///
/// POST       /users/register/           -> register
/// POST       /users/login/              -> login
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/topics/", get(topics::list_topics))
        .route("/topics/{topic_id}/", get(topics::show_topic))
        .route(
            "/new_topic/",
            get(topics::new_topic_form).post(topics::create_topic),
        )
        .route(
            "/new_entry/{topic_id}/",
            get(entries::new_entry_form).post(entries::create_entry),
        )
        .route(
            "/edit_entry/{entry_id}/",
            get(entries::edit_entry_form).post(entries::update_entry),
        )
        .nest("/users", users::router())
}
