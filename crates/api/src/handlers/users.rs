//! Handlers for account registration and login.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use learning_log_core::account::{validate_registration, LoginForm, RegisterForm};
use learning_log_core::error::CoreError;
use learning_log_core::forms::{FieldErrors, FormOutcome};
use learning_log_db::models::user::{CreateUser, User, UserResponse};
use learning_log_db::repositories::UserRepo;
use serde::Serialize;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_login};
use crate::error::{AppError, AppResult};
use crate::extract::AppForm;
use crate::response::{FormPage, NoContext};
use crate::state::AppState;

/// Message for every failed login, whatever the cause.
const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Successful authentication response returned by login and registration.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

/// POST /users/register/
///
/// Creates the account and logs it in. A rejected form is rendered back
/// without its password fields.
pub async fn register(
    State(state): State<AppState>,
    AppForm(form): AppForm<RegisterForm>,
) -> AppResult<Response> {
    let mut taken = FieldErrors::new();
    if UserRepo::find_by_username(&state.pool, form.username.trim())
        .await?
        .is_some()
    {
        taken.add("username", "A user with that username already exists.");
    }

    match validate_registration(form, state.config.min_password_length).with_errors(taken) {
        FormOutcome::Invalid { input, errors } => {
            Ok(FormPage::invalid(input.redacted(), errors, NoContext {}).into_response())
        }
        FormOutcome::Valid(form) => {
            let password_hash = hash_password(&form.password)
                .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
            let input = CreateUser {
                username: form.username.trim().to_string(),
                password_hash,
            };
            // A concurrent registration of the same name surfaces as a 409.
            let user = UserRepo::create(&state.pool, &input).await?;

            tracing::info!(user_id = user.id, username = %user.username, "User registered");

            let response = auth_response(&state, &user)?;
            Ok((StatusCode::CREATED, Json(response)).into_response())
        }
    }
}

/// POST /users/login/
pub async fn login(
    State(state): State<AppState>,
    AppForm(form): AppForm<LoginForm>,
) -> AppResult<Json<AuthResponse>> {
    let invalid = || AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into()));

    let user = UserRepo::find_by_username(&state.pool, form.username.trim()).await?;

    let password_valid = verify_login(
        &form.password,
        user.as_ref().map(|u| u.password_hash.as_str()),
    )
    .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    let user = match user {
        Some(user) if password_valid && user.is_active => user,
        Some(user) => {
            tracing::info!(user_id = user.id, "Rejected login attempt");
            return Err(invalid());
        }
        None => return Err(invalid()),
    };

    Ok(Json(auth_response(&state, &user)?))
}

fn auth_response(state: &AppState, user: &User) -> AppResult<AuthResponse> {
    let access_token = generate_access_token(user.id, &user.username, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(AuthResponse {
        access_token,
        token_type: "Bearer",
        expires_in: state.config.jwt.expires_in_secs(),
        user: UserResponse::from(user),
    })
}
