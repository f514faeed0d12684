//! Job board account service
//!
//! Account registration and authentication for a job platform, with:
//! - Candidate and employer registration flows
//! - Stateless token sessions (HS256)
//! - A shared profile with sparse partial updates
//! - Identity-addressed experience and education collections

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::{AccountServiceTrait, AppState};
use infrastructure::account::{
    AccountService, Argon2Hasher, InMemoryAccountRepository, PostgresAccountRepository,
};
use infrastructure::auth::{JwtConfig, JwtService};

/// Create the application state from configuration
///
/// The storage backend is selected by `storage.backend`: "postgres" connects
/// via `DATABASE_URL`, anything else runs on the in-memory store.
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let hasher = Arc::new(Argon2Hasher::new());

    let account_service: Arc<dyn AccountServiceTrait> =
        if config.storage.backend.eq_ignore_ascii_case("postgres") {
            let database_url = std::env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

            info!("Connecting to PostgreSQL...");
            let pool = sqlx::PgPool::connect(&database_url)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to connect to PostgreSQL: {}", e))?;
            info!("PostgreSQL connection established");

            let repository = Arc::new(PostgresAccountRepository::new(pool));
            Arc::new(AccountService::new(repository, hasher))
        } else {
            info!("Using in-memory account storage");
            let repository = Arc::new(InMemoryAccountRepository::new());
            Arc::new(AccountService::new(repository, hasher))
        };

    let token_issuer = Arc::new(JwtService::new(JwtConfig::new(
        config.auth.secret.clone(),
        config.auth.token_expiration_days,
    )));

    Ok(AppState::new(account_service, token_issuer))
}
