use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The resource is absent, or exists but is not visible to the requester.
    ///
    /// Both cases deliberately produce the same error; see
    /// [`crate::ownership`].
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}
