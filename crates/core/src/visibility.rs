//! Which topics a requester may see in the topic list.

use crate::types::DbId;

/// Filter applied when listing topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicScope {
    /// Anonymous requester: public topics only.
    PublicOnly,
    /// Authenticated requester: public topics plus everything they own.
    PublicOrOwnedBy(DbId),
}

impl TopicScope {
    /// Pick the scope for a requester, `None` meaning anonymous.
    pub fn for_requester(requester_id: Option<DbId>) -> Self {
        match requester_id {
            Some(id) => Self::PublicOrOwnedBy(id),
            None => Self::PublicOnly,
        }
    }
}
