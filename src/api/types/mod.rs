//! Shared request/response plumbing for the HTTP layer

pub mod error;
pub mod json;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType, FieldError};
pub use json::Json;
