//! Ownership guard for user-owned resources.
//!
//! Policy: a requester who does not own a resource receives exactly the
//! error an absent resource would produce ([`CoreError::NotFound`]). The
//! guard never answers with a forbidden-style error, so probing ids cannot
//! reveal which topics or entries exist.
//!
//! Every handler that returns or mutates a topic, or an entry belonging to
//! one, must run [`ensure_owner`] first.

use crate::error::CoreError;
use crate::types::DbId;

/// A resource with exactly one owning user.
pub trait Owned {
    /// The id of the user that owns this resource.
    fn owner_id(&self) -> DbId;
}

/// Check that `requester_id` owns `resource`.
///
/// `entity` and `id` name what the client asked for. They may differ from
/// the resource checked: an entry is guarded by its parent topic's owner,
/// but a failure must still read as "entry not found".
pub fn ensure_owner<R: Owned + ?Sized>(
    resource: &R,
    requester_id: DbId,
    entity: &'static str,
    id: DbId,
) -> Result<(), CoreError> {
    if resource.owner_id() == requester_id {
        Ok(())
    } else {
        Err(CoreError::NotFound { entity, id })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    struct Thing {
        owner: DbId,
    }

    impl Owned for Thing {
        fn owner_id(&self) -> DbId {
            self.owner
        }
    }

    #[test]
    fn owner_passes() {
        let thing = Thing { owner: 7 };
        assert!(ensure_owner(&thing, 7, "Topic", 1).is_ok());
    }

    #[test]
    fn non_owner_gets_not_found() {
        let thing = Thing { owner: 7 };
        let err = ensure_owner(&thing, 8, "Topic", 1).unwrap_err();
        assert_matches!(err, CoreError::NotFound { entity: "Topic", id: 1 });
    }

    #[test]
    fn mismatch_is_indistinguishable_from_absence() {
        let thing = Thing { owner: 7 };
        let denied = ensure_owner(&thing, 8, "Entry", 3).unwrap_err();
        let absent = CoreError::NotFound {
            entity: "Entry",
            id: 3,
        };
        assert_eq!(denied.to_string(), absent.to_string());
    }

    #[test]
    fn reports_requested_entity_not_checked_one() {
        // Entry 12 is guarded through its topic, but the error names the entry.
        let topic = Thing { owner: 1 };
        let err = ensure_owner(&topic, 2, "Entry", 12).unwrap_err();
        assert_matches!(err, CoreError::NotFound { entity: "Entry", id: 12 });
    }
}
