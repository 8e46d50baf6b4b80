//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod entry_repo;
pub mod topic_repo;
pub mod user_repo;

pub use entry_repo::EntryRepo;
pub use topic_repo::TopicRepo;
pub use user_repo::UserRepo;
