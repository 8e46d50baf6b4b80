//! Authentication extractors.
//!
//! - [`auth::AuthUser`] -- Requires a valid JWT Bearer token.
//! - [`auth::MaybeAuthUser`] -- Accepts anonymous requests, but still rejects
//!   a token that is present and invalid.

pub mod auth;
