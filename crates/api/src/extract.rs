//! Path and form extractors.

use axum::extract::{FromRequest, FromRequestParts, Path};
use axum::http::request::Parts;
use learning_log_core::types::DbId;

use crate::error::AppError;

/// A single numeric id taken from the request path.
///
/// Only ASCII digits forming a positive integer are accepted. Anything else
/// is answered as an unknown route (404), never as a bad request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceId(pub DbId);

impl<S: Send + Sync> FromRequestParts<S> for ResourceId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::RouteNotFound)?;
        parse_resource_id(&raw)
            .map(ResourceId)
            .ok_or(AppError::RouteNotFound)
    }
}

/// `application/x-www-form-urlencoded` body whose rejection is answered with
/// the JSON error body instead of axum's plain-text one.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Form), rejection(AppError))]
pub struct AppForm<T>(pub T);

/// Parse a path segment as a positive id.
pub fn parse_resource_id(raw: &str) -> Option<DbId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<DbId>().ok().filter(|id| *id > 0)
}
