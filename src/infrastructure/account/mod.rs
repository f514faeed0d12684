//! Account infrastructure: credential hashing, persistence and the service

mod password;
mod postgres_repository;
mod repository;
mod service;

pub use password::{Argon2Hasher, PasswordHasher};
pub use postgres_repository::PostgresAccountRepository;
pub use repository::InMemoryAccountRepository;
pub use service::{AccountService, ChangePasswordRequest, RegisterEmployerRequest};
