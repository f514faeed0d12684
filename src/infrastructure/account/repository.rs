//! In-memory account repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::account::{Account, AccountId, AccountRepository, EmailAddress};
use crate::domain::DomainError;

#[derive(Debug, Default)]
struct Store {
    accounts: HashMap<AccountId, Account>,
    /// Index for normalized email -> account ID lookup
    email_index: HashMap<EmailAddress, AccountId>,
}

/// In-memory implementation of AccountRepository
///
/// Both maps live under one lock, so the uniqueness check and the insert in
/// `create` are a single atomic decision.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryAccountRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn get(&self, id: &AccountId) -> Result<Option<Account>, DomainError> {
        let store = self.store.read().await;
        Ok(store.accounts.get(id).cloned())
    }

    async fn get_by_email(&self, email: &EmailAddress) -> Result<Option<Account>, DomainError> {
        let store = self.store.read().await;

        Ok(store
            .email_index
            .get(email)
            .and_then(|id| store.accounts.get(id))
            .cloned())
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let mut store = self.store.write().await;

        if store.email_index.contains_key(account.email()) {
            return Err(DomainError::conflict("User already exists"));
        }

        store
            .email_index
            .insert(account.email().clone(), *account.id());
        store.accounts.insert(*account.id(), account.clone());

        Ok(account)
    }

    async fn update(&self, account: &Account) -> Result<Account, DomainError> {
        let mut store = self.store.write().await;

        if !store.accounts.contains_key(account.id()) {
            return Err(DomainError::not_found(format!(
                "Account '{}' not found",
                account.id()
            )));
        }

        store.accounts.insert(*account.id(), account.clone());

        Ok(account.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::Role;

    fn create_test_account(email: &str) -> Account {
        let email = EmailAddress::new(email).unwrap();
        Account::new(email, "hashed_password", Role::Candidate)
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryAccountRepository::new();
        let account = create_test_account("jo@acme.com");

        repo.create(account.clone()).await.unwrap();

        let retrieved = repo.get(account.id()).await.unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().email().as_str(), "jo@acme.com");
    }

    #[tokio::test]
    async fn test_get_by_email() {
        let repo = InMemoryAccountRepository::new();
        let account = create_test_account("jo@acme.com");

        repo.create(account.clone()).await.unwrap();

        let retrieved = repo
            .get_by_email(&EmailAddress::new("jo@acme.com").unwrap())
            .await
            .unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().id(), account.id());
    }

    #[tokio::test]
    async fn test_email_uniqueness() {
        let repo = InMemoryAccountRepository::new();

        repo.create(create_test_account("jo@acme.com")).await.unwrap();

        let result = repo.create(create_test_account("jo@acme.com")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_email_uniqueness_is_case_insensitive() {
        let repo = InMemoryAccountRepository::new();

        repo.create(create_test_account("jo@acme.com")).await.unwrap();

        // Casing and whitespace variants normalize to the same identity
        let result = repo.create(create_test_account("  JO@Acme.COM ")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_update() {
        let repo = InMemoryAccountRepository::new();
        let mut account = create_test_account("jo@acme.com");

        repo.create(account.clone()).await.unwrap();

        account.profile_mut().bio = "Updated bio".to_string();
        repo.update(&account).await.unwrap();

        let retrieved = repo.get(account.id()).await.unwrap().unwrap();
        assert_eq!(retrieved.profile().bio, "Updated bio");
    }

    #[tokio::test]
    async fn test_update_missing_account() {
        let repo = InMemoryAccountRepository::new();
        let account = create_test_account("jo@acme.com");

        let result = repo.update(&account).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }
}
