//! Entry form and display helpers.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::forms::not_blank;

/// Entity name used in not-found errors.
pub const ENTRY_ENTITY: &str = "Entry";

/// Number of characters kept by [`excerpt`].
pub const EXCERPT_LENGTH: usize = 50;

/// Submitted fields for the new-entry and edit-entry forms.
///
/// The parent topic is never read from the submission; it comes from the
/// request path (new entry) or the stored row (edit).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct EntryForm {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub text: String,
}

/// Short preview of an entry body: the first [`EXCERPT_LENGTH`] characters,
/// followed by `...` when the body is longer.
pub fn excerpt(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(EXCERPT_LENGTH).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
