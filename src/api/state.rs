//! Application state for shared services

use std::sync::Arc;

use crate::domain::account::{Account, AccountId, AccountRepository};
use crate::domain::profile::{
    Education, EducationPatch, EntryId, Experience, ExperiencePatch, ProfilePatch,
};
use crate::domain::DomainError;
use crate::infrastructure::account::{
    AccountService, ChangePasswordRequest, PasswordHasher, RegisterEmployerRequest,
};
use crate::infrastructure::auth::TokenIssuer;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<dyn AccountServiceTrait>,
    pub token_issuer: Arc<dyn TokenIssuer>,
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(
        account_service: Arc<dyn AccountServiceTrait>,
        token_issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            account_service,
            token_issuer,
        }
    }
}

/// Trait for account service operations
#[async_trait::async_trait]
pub trait AccountServiceTrait: Send + Sync {
    async fn register_candidate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Account, DomainError>;
    async fn register_employer(
        &self,
        request: RegisterEmployerRequest,
    ) -> Result<Account, DomainError>;
    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Account>, DomainError>;
    async fn get(&self, id: &AccountId) -> Result<Option<Account>, DomainError>;
    async fn update_profile(
        &self,
        id: &AccountId,
        patch: ProfilePatch,
    ) -> Result<Account, DomainError>;
    async fn change_password(
        &self,
        id: &AccountId,
        request: ChangePasswordRequest,
    ) -> Result<Account, DomainError>;
    async fn add_experience(
        &self,
        id: &AccountId,
        entry: Experience,
    ) -> Result<Account, DomainError>;
    async fn update_experience(
        &self,
        id: &AccountId,
        entry_id: &EntryId,
        patch: ExperiencePatch,
    ) -> Result<Account, DomainError>;
    async fn remove_experience(
        &self,
        id: &AccountId,
        entry_id: &EntryId,
    ) -> Result<Account, DomainError>;
    async fn add_education(
        &self,
        id: &AccountId,
        entry: Education,
    ) -> Result<Account, DomainError>;
    async fn update_education(
        &self,
        id: &AccountId,
        entry_id: &EntryId,
        patch: EducationPatch,
    ) -> Result<Account, DomainError>;
    async fn remove_education(
        &self,
        id: &AccountId,
        entry_id: &EntryId,
    ) -> Result<Account, DomainError>;
}

#[async_trait::async_trait]
impl<R, H> AccountServiceTrait for AccountService<R, H>
where
    R: AccountRepository + 'static,
    H: PasswordHasher + 'static,
{
    async fn register_candidate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Account, DomainError> {
        AccountService::register_candidate(self, email, password).await
    }

    async fn register_employer(
        &self,
        request: RegisterEmployerRequest,
    ) -> Result<Account, DomainError> {
        AccountService::register_employer(self, request).await
    }

    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Account>, DomainError> {
        AccountService::authenticate(self, email, password).await
    }

    async fn get(&self, id: &AccountId) -> Result<Option<Account>, DomainError> {
        AccountService::get(self, id).await
    }

    async fn update_profile(
        &self,
        id: &AccountId,
        patch: ProfilePatch,
    ) -> Result<Account, DomainError> {
        AccountService::update_profile(self, id, patch).await
    }

    async fn change_password(
        &self,
        id: &AccountId,
        request: ChangePasswordRequest,
    ) -> Result<Account, DomainError> {
        AccountService::change_password(self, id, request).await
    }

    async fn add_experience(
        &self,
        id: &AccountId,
        entry: Experience,
    ) -> Result<Account, DomainError> {
        AccountService::add_experience(self, id, entry).await
    }

    async fn update_experience(
        &self,
        id: &AccountId,
        entry_id: &EntryId,
        patch: ExperiencePatch,
    ) -> Result<Account, DomainError> {
        AccountService::update_experience(self, id, entry_id, patch).await
    }

    async fn remove_experience(
        &self,
        id: &AccountId,
        entry_id: &EntryId,
    ) -> Result<Account, DomainError> {
        AccountService::remove_experience(self, id, entry_id).await
    }

    async fn add_education(
        &self,
        id: &AccountId,
        entry: Education,
    ) -> Result<Account, DomainError> {
        AccountService::add_education(self, id, entry).await
    }

    async fn update_education(
        &self,
        id: &AccountId,
        entry_id: &EntryId,
        patch: EducationPatch,
    ) -> Result<Account, DomainError> {
        AccountService::update_education(self, id, entry_id, patch).await
    }

    async fn remove_education(
        &self,
        id: &AccountId,
        entry_id: &EntryId,
    ) -> Result<Account, DomainError> {
        AccountService::remove_education(self, id, entry_id).await
    }
}
