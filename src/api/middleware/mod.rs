//! Request middleware and extractors

mod auth;

pub use auth::{extract_bearer_token, RequireAccount};
