//! Contact form validation.
//!
//! Each field is trimmed before it is checked. Lengths are counted in
//! UTF-16 code units, matching what the browser reports for the same
//! input.

use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::expect_used)] // literal pattern, covered by tests
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

const MIN_NAME_LEN: usize = 2;
const MIN_MESSAGE_LEN: usize = 20;

/// A contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// `id` of the field's input element.
    #[must_use]
    pub const fn input_id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// `id` of the element that shows the field's error message.
    #[must_use]
    pub const fn error_id(self) -> &'static str {
        match self {
            Self::Name => "nameError",
            Self::Email => "emailError",
            Self::Message => "messageError",
        }
    }

    /// Check a raw field value.
    ///
    /// # Errors
    ///
    /// Returns the [`FieldError`] to show next to the field.
    pub fn validate(self, value: &str) -> Result<(), FieldError> {
        match self {
            Self::Name => validate_name(value),
            Self::Email => validate_email(value),
            Self::Message => validate_message(value),
        }
    }
}

/// Why a field was rejected. `Display` is the message shown to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Please enter your full name.")]
    NameMissing,
    #[error("Name must be at least 2 characters.")]
    NameTooShort,
    #[error("Please enter your email address.")]
    EmailMissing,
    #[error("Please enter a valid email address.")]
    EmailInvalid,
    #[error("Please describe your project or inquiry.")]
    MessageMissing,
    #[error("Please provide at least 20 characters of detail.")]
    MessageTooShort,
}

fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// # Errors
///
/// [`FieldError::NameMissing`] or [`FieldError::NameTooShort`].
pub fn validate_name(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FieldError::NameMissing)
    } else if utf16_len(value) < MIN_NAME_LEN {
        Err(FieldError::NameTooShort)
    } else {
        Ok(())
    }
}

/// # Errors
///
/// [`FieldError::EmailMissing`] or [`FieldError::EmailInvalid`].
pub fn validate_email(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FieldError::EmailMissing)
    } else if !is_valid_email(value) {
        Err(FieldError::EmailInvalid)
    } else {
        Ok(())
    }
}

/// # Errors
///
/// [`FieldError::MessageMissing`] or [`FieldError::MessageTooShort`].
pub fn validate_message(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FieldError::MessageMissing)
    } else if utf16_len(value) < MIN_MESSAGE_LEN {
        Err(FieldError::MessageTooShort)
    } else {
        Ok(())
    }
}

/// Loose shape check: `something@something.something`, no whitespace.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// The three field values of one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Raw value of `field`.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Validate every field, collecting all failures in field order.
    ///
    /// An empty result means the submission can be sent.
    #[must_use]
    pub fn validate(&self) -> Vec<(Field, FieldError)> {
        Field::ALL
            .into_iter()
            .filter_map(|field| field.validate(self.value(field)).err().map(|e| (field, e)))
            .collect()
    }
}

/// Whether losing focus should clear the field's error.
#[must_use]
pub fn clears_on_blur(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Whether typing should clear the field's error.
#[must_use]
pub fn clears_on_input(has_error: bool, value: &str) -> bool {
    has_error && !value.trim().is_empty()
}
