//! Account domain
//!
//! This module provides the account entity, its value types (id, email,
//! role), validation rules, and the repository trait.

mod entity;
mod repository;
mod validation;

pub use entity::{Account, AccountId, EmailAddress, Role};
pub use repository::AccountRepository;
pub use validation::{
    validate_email, validate_password, validate_required, AccountValidationError,
};
