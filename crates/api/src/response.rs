//! Shared response types for API handlers.
//!
//! Read endpoints use a `{ "data": ... }` envelope via [`DataResponse`].
//! Form endpoints render a [`FormPage`]: the field values, per-field errors
//! and whatever context the form is displayed with.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use learning_log_core::forms::{FieldErrors, FormState};
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Context for forms displayed on their own.
#[derive(Debug, Default, Serialize)]
pub struct NoContext {}

/// A rendered form.
///
/// `initial` pages answer 200; `invalid` pages answer 422 and carry the
/// submitted values back so the client can redisplay them.
#[derive(Debug, Serialize)]
pub struct FormPage<F: Serialize, C: Serialize = NoContext> {
    pub state: FormState,
    pub form: F,
    pub errors: FieldErrors,
    #[serde(flatten)]
    pub context: C,
}

impl<F: Serialize, C: Serialize> FormPage<F, C> {
    /// A blank or pre-populated form for a non-write request.
    pub fn initial(form: F, context: C) -> Self {
        Self {
            state: FormState::Initial,
            form,
            errors: FieldErrors::new(),
            context,
        }
    }

    /// A rejected submission with its validation messages.
    pub fn invalid(form: F, errors: FieldErrors, context: C) -> Self {
        Self {
            state: FormState::Invalid,
            form,
            errors,
            context,
        }
    }
}

impl<F: Serialize, C: Serialize> IntoResponse for FormPage<F, C> {
    fn into_response(self) -> Response {
        let status = match self.state {
            FormState::Initial => StatusCode::OK,
            FormState::Invalid => StatusCode::UNPROCESSABLE_ENTITY,
        };
        (status, Json(self)).into_response()
    }
}
