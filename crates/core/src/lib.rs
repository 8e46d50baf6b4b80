//! Domain building blocks for the Learning Log service.
//!
//! Nothing in this crate performs I/O. The database crate and the HTTP layer
//! both depend on it for shared identifiers, the error taxonomy, the
//! ownership policy and the validated form types.

pub mod account;
pub mod entry;
pub mod error;
pub mod forms;
pub mod ownership;
pub mod topic;
pub mod types;
pub mod visibility;
