//! Infrastructure layer - concrete implementations of domain ports

pub mod account;
pub mod auth;
pub mod logging;
