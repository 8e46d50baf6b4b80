//! JWT-based authentication extractors for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use learning_log_core::error::CoreError;
use learning_log_core::types::DbId;
use learning_log_db::repositories::UserRepo;

use crate::auth::jwt::{validate_token, JwtConfig};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from a JWT Bearer token in the `Authorization` header.
///
/// The token must verify and its account must still exist and be active, so
/// deactivating a user revokes tokens already handed out.
///
/// Use this as an extractor parameter in any handler that requires authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
    pub username: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        resolve(auth_header, state).await
    }
}

/// Optional authentication for pages open to anonymous visitors.
///
/// `MaybeAuthUser(None)` when no `Authorization` header is sent. A header
/// that is present but malformed or expired is still rejected with 401, so
/// a stale client is told to log in again instead of silently seeing less.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<AuthUser>);

impl MaybeAuthUser {
    pub fn user_id(&self) -> Option<DbId> {
        self.0.as_ref().map(|u| u.user_id)
    }
}

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match parts.headers.get("authorization") {
            None => Ok(MaybeAuthUser(None)),
            Some(value) => {
                let header = value.to_str().map_err(|_| {
                    AppError::Core(CoreError::Unauthorized(
                        "Invalid Authorization header".into(),
                    ))
                })?;
                resolve(header, state).await.map(|user| MaybeAuthUser(Some(user)))
            }
        }
    }
}

/// Verify the bearer token, then confirm its account is still active.
async fn resolve(auth_header: &str, state: &AppState) -> Result<AuthUser, AppError> {
    let claimed = authenticate(auth_header, &state.config.jwt)?;

    match UserRepo::find_by_id(&state.pool, claimed.user_id).await? {
        Some(user) if user.is_active => Ok(AuthUser {
            user_id: user.id,
            username: user.username,
        }),
        _ => {
            tracing::info!(user_id = claimed.user_id, "Token for missing or inactive account");
            Err(AppError::Core(CoreError::Unauthorized(
                "Account is not active".into(),
            )))
        }
    }
}

/// Check the header format and token signature. No database access.
fn authenticate(auth_header: &str, jwt: &JwtConfig) -> Result<AuthUser, AppError> {
    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::Core(CoreError::Unauthorized(
            "Invalid Authorization format. Expected: Bearer <token>".into(),
        ))
    })?;

    let claims = validate_token(token, jwt).map_err(|e| {
        tracing::debug!(error = %e, "Rejected bearer token");
        AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
    })?;

    Ok(AuthUser {
        user_id: claims.sub,
        username: claims.username,
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::auth::jwt::generate_access_token;

    fn jwt() -> JwtConfig {
        JwtConfig {
            secret: "middleware-test-secret".into(),
            access_token_expiry_mins: 5,
        }
    }

    #[test]
    fn bearer_token_yields_user() {
        let token = generate_access_token(9, "ada", &jwt()).unwrap();
        let user = authenticate(&format!("Bearer {token}"), &jwt()).unwrap();
        assert_eq!(user.user_id, 9);
        assert_eq!(user.username, "ada");
    }

    #[test]
    fn other_schemes_are_rejected() {
        let token = generate_access_token(9, "ada", &jwt()).unwrap();
        let err = authenticate(&format!("Token {token}"), &jwt()).unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::Unauthorized(_)));
    }

    #[test]
    fn garbage_token_is_rejected() {
        let err = authenticate("Bearer not.a.jwt", &jwt()).unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::Unauthorized(_)));
    }
}
