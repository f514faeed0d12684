//! Account repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Account, AccountId, EmailAddress};
use crate::domain::DomainError;

/// Repository trait for account storage
///
/// `create` must treat the email-uniqueness check and the insert as a single
/// atomic decision; two concurrent creations for the same normalized email
/// must never both succeed. `update` is last-writer-wins: concurrent writers
/// to the same account race with undefined ordering beyond whichever write
/// lands last.
#[async_trait]
pub trait AccountRepository: Send + Sync + Debug {
    /// Get an account by its ID
    async fn get(&self, id: &AccountId) -> Result<Option<Account>, DomainError>;

    /// Get an account by its normalized email (for login)
    async fn get_by_email(&self, email: &EmailAddress) -> Result<Option<Account>, DomainError>;

    /// Create a new account, failing with Conflict when the email is taken
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Persist the full current state of an existing account
    async fn update(&self, account: &Account) -> Result<Account, DomainError>;
}
