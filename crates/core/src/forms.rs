//! Form validation outcome shared by every create/edit operation.
//!
//! A submitted form is either accepted as a whole or handed back together
//! with its original values and per-field messages so the client can
//! redisplay it. Nothing is persisted in the second case.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors};

/// Message used when a required field is missing or blank.
pub const REQUIRED_MESSAGE: &str = "This field is required.";

// ---------------------------------------------------------------------------
// Field errors
// ---------------------------------------------------------------------------

/// Human-readable validation messages keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against `field`.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for `field`, empty if none.
    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, errs) in errors.field_errors() {
            for err in errs.iter() {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                out.add(&field, message);
            }
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Result of validating a submitted form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome<F> {
    /// Every field passed; the form may be persisted.
    Valid(F),
    /// At least one field failed. `input` is the submission as received.
    Invalid { input: F, errors: FieldErrors },
}

impl<F> FormOutcome<F> {
    /// Fold extra errors (cross-field or uniqueness checks) into the outcome.
    pub fn with_errors(self, extra: FieldErrors) -> Self {
        if extra.is_empty() {
            return self;
        }
        match self {
            FormOutcome::Valid(input) => FormOutcome::Invalid {
                input,
                errors: extra,
            },
            FormOutcome::Invalid { input, mut errors } => {
                for (field, messages) in extra.0 {
                    for message in messages {
                        errors.add(&field, message);
                    }
                }
                FormOutcome::Invalid { input, errors }
            }
        }
    }
}

/// Run the derived `validator` rules on `form`.
pub fn validate_form<F: Validate>(form: F) -> FormOutcome<F> {
    match form.validate() {
        Ok(()) => FormOutcome::Valid(form),
        Err(errors) => FormOutcome::Invalid {
            errors: FieldErrors::from(&errors),
            input: form,
        },
    }
}

/// Which display state a rendered form is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormState {
    /// Non-write request: blank or pre-populated form.
    Initial,
    /// Write request that failed validation.
    Invalid,
}

// ---------------------------------------------------------------------------
// Field rules
// ---------------------------------------------------------------------------

/// Reject empty and whitespace-only values.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::Borrowed(REQUIRED_MESSAGE)));
    }
    Ok(())
}

/// Interpret an HTML checkbox value.
///
/// Returns `None` for values that are not a recognised boolean spelling.
pub fn parse_checkbox(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" => Some(true),
        "off" | "false" | "0" | "" => Some(false),
        _ => None,
    }
}
