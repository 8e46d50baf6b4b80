//! Topic form and its validation rules.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::forms::{not_blank, parse_checkbox};

/// Maximum length of a topic label, in characters.
pub const MAX_TOPIC_TEXT_LENGTH: usize = 200;

/// Entity name used in not-found errors.
pub const TOPIC_ENTITY: &str = "Topic";

/// Submitted fields for the new-topic form.
///
/// There is intentionally no owner field: the owner always comes from the
/// authenticated requester, and unknown submitted fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct TopicForm {
    #[serde(default)]
    #[validate(custom(function = "valid_label"))]
    pub text: String,

    /// Raw checkbox value. Absent means private.
    #[serde(default)]
    #[validate(custom(function = "valid_visibility"))]
    pub public: Option<String>,
}

impl TopicForm {
    /// The label with surrounding whitespace removed.
    pub fn cleaned_text(&self) -> &str {
        self.text.trim()
    }

    /// The visibility flag. Only meaningful on a validated form; anything
    /// unparseable reads as private.
    pub fn is_public(&self) -> bool {
        self.public
            .as_deref()
            .and_then(parse_checkbox)
            .unwrap_or(false)
    }
}

/// The label is stored trimmed, so both rules apply to the trimmed value.
fn valid_label(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    if value.trim().chars().count() > MAX_TOPIC_TEXT_LENGTH {
        return Err(ValidationError::new("max_length").with_message(Cow::Owned(format!(
            "Ensure this value has at most {MAX_TOPIC_TEXT_LENGTH} characters."
        ))));
    }
    Ok(())
}

fn valid_visibility(value: &str) -> Result<(), ValidationError> {
    match parse_checkbox(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("invalid_choice")
            .with_message(Cow::Borrowed("Enter a valid visibility flag."))),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::forms::{validate_form, FormOutcome, REQUIRED_MESSAGE};

    fn form(text: &str, public: Option<&str>) -> TopicForm {
        TopicForm {
            text: text.to_string(),
            public: public.map(str::to_string),
        }
    }

    #[test]
    fn accepts_label_and_checkbox() {
        let outcome = validate_form(form("  Chess  ", Some("on")));
        assert_matches!(outcome, FormOutcome::Valid(f) => {
            assert_eq!(f.cleaned_text(), "Chess");
            assert!(f.is_public());
        });
    }

    #[test]
    fn missing_checkbox_means_private() {
        let f = form("Rock climbing", None);
        assert!(!f.is_public());
        assert_matches!(validate_form(f), FormOutcome::Valid(_));
    }

    #[test]
    fn empty_label_is_rejected() {
        let outcome = validate_form(form("", None));
        assert_matches!(outcome, FormOutcome::Invalid { errors, .. } => {
            assert_eq!(errors.get("text"), [REQUIRED_MESSAGE.to_string()]);
        });
    }

    #[test]
    fn overlong_label_is_rejected() {
        let long = "x".repeat(MAX_TOPIC_TEXT_LENGTH + 1);
        let outcome = validate_form(form(&long, None));
        assert_matches!(outcome, FormOutcome::Invalid { errors, .. } => {
            assert!(errors.contains("text"));
        });
    }

    #[test]
    fn padding_does_not_count_towards_the_limit() {
        let padded = format!("   {}   ", "x".repeat(MAX_TOPIC_TEXT_LENGTH - 2));
        assert_matches!(validate_form(form(&padded, None)), FormOutcome::Valid(f) => {
            assert_eq!(f.cleaned_text().chars().count(), MAX_TOPIC_TEXT_LENGTH - 2);
        });

        let exact = format!(" {} ", "y".repeat(MAX_TOPIC_TEXT_LENGTH));
        assert_matches!(validate_form(form(&exact, None)), FormOutcome::Valid(_));
    }

    #[test]
    fn garbage_visibility_is_rejected() {
        let outcome = validate_form(form("Go", Some("sometimes")));
        assert_matches!(outcome, FormOutcome::Invalid { input, errors } => {
            assert!(errors.contains("public"));
            assert_eq!(input.public.as_deref(), Some("sometimes"));
        });
    }

    #[test]
    fn submitted_owner_field_is_ignored() {
        let json = serde_json::json!({ "text": "Mine", "owner_id": 99 });
        let f: TopicForm = serde_json::from_value(json).unwrap();
        assert_eq!(f, form("Mine", None));
    }
}
