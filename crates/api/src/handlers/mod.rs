//! Request handlers.
//!
//! Each submodule provides the async handler functions for one area of the
//! site. Handlers delegate persistence to the repositories in
//! `learning_log_db` and map errors via [`crate::error::AppError`].

pub mod entries;
pub mod pages;
pub mod topics;
pub mod users;
