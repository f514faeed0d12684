//! Account validation utilities

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Errors that can occur during account validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AccountValidationError {
    #[error("Please enter a valid email")]
    InvalidEmail,

    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),

    #[error("Password exceeds maximum length of {0} characters")]
    PasswordTooLong(usize),

    #[error("{0} is required")]
    MissingField(&'static str),
}

const MIN_PASSWORD_LENGTH: usize = 6;
const MAX_PASSWORD_LENGTH: usize = 128;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// Validate an email address
///
/// The check is intentionally permissive: one `@`, no whitespace, and a
/// dotted domain. Normalization (trim + lowercase) happens in `EmailAddress`.
pub fn validate_email(email: &str) -> Result<(), AccountValidationError> {
    if EMAIL_RE.is_match(email.trim()) {
        Ok(())
    } else {
        Err(AccountValidationError::InvalidEmail)
    }
}

/// Validate a password
///
/// Rules:
/// - Minimum 6 characters
/// - Maximum 128 characters
pub fn validate_password(password: &str) -> Result<(), AccountValidationError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AccountValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH));
    }

    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(AccountValidationError::PasswordTooLong(MAX_PASSWORD_LENGTH));
    }

    Ok(())
}

/// Validate that a required free-text field is non-empty after trimming
pub fn validate_required(
    value: &str,
    field: &'static str,
) -> Result<(), AccountValidationError> {
    if value.trim().is_empty() {
        return Err(AccountValidationError::MissingField(field));
    }

    Ok(())
}
