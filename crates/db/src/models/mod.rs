//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts, built server-side from a validated form

pub mod entry;
pub mod topic;
pub mod user;
