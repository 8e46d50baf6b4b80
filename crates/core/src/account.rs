//! Registration and login forms.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::forms::{not_blank, validate_form, FieldErrors, FormOutcome};

/// Maximum username length, in characters.
pub const MAX_USERNAME_LENGTH: u64 = 150;

/// Submitted fields for `POST /users/register/`.
///
/// Passwords are never echoed back: [`RegisterForm::redacted`] clears them
/// before a rejected form is rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct RegisterForm {
    #[serde(default)]
    #[validate(
        custom(function = "valid_username"),
        length(
            max = 150,
            message = "Ensure this value has at most 150 characters."
        )
    )]
    pub username: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub password: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub password_confirmation: String,
}

impl RegisterForm {
    /// Copy of the form without password material.
    pub fn redacted(&self) -> Self {
        Self {
            username: self.username.clone(),
            password: String::new(),
            password_confirmation: String::new(),
        }
    }
}

/// Submitted fields for `POST /users/login/`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Validate a registration: field rules, minimum password length and
/// matching confirmation. Username uniqueness is checked by the caller.
pub fn validate_registration(
    form: RegisterForm,
    min_password_length: usize,
) -> FormOutcome<RegisterForm> {
    let mut extra = FieldErrors::new();
    if !form.password.is_empty() && form.password.chars().count() < min_password_length {
        extra.add(
            "password",
            format!(
                "This password is too short. \
                 It must contain at least {min_password_length} characters."
            ),
        );
    }
    if form.password != form.password_confirmation {
        extra.add(
            "password_confirmation",
            "The two password fields didn't match.",
        );
    }
    validate_form(form).with_errors(extra)
}

fn valid_username(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    let ok = value
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'));
    if ok {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_username").with_message(Cow::Borrowed(
            "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.",
        )))
    }
}
