//! Account service for registration, authentication and profile mutations

use std::sync::Arc;

use tracing::debug;

use crate::domain::account::{
    validate_password, validate_required, Account, AccountId, AccountRepository, EmailAddress,
    Role,
};
use crate::domain::profile::{
    Education, EducationPatch, EntryId, Experience, ExperiencePatch, Profile, ProfilePatch,
};
use crate::domain::DomainError;

use super::password::PasswordHasher;

/// Request for employer registration - every field is required
#[derive(Debug, Clone)]
pub struct RegisterEmployerRequest {
    pub company_name: String,
    pub hiring_manager_first_name: String,
    pub hiring_manager_last_name: String,
    pub hiring_manager_email: String,
    pub hiring_manager_phone: String,
    pub password: String,
}

/// Request for changing an account's password
#[derive(Debug, Clone)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Account service coordinating the credential store and the repository
#[derive(Debug)]
pub struct AccountService<R: AccountRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: AccountRepository, H: PasswordHasher> AccountService<R, H> {
    /// Create a new account service
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Register a candidate account
    ///
    /// The plaintext is hashed exactly once here; the conflict check happens
    /// atomically inside the repository's `create`.
    pub async fn register_candidate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Account, DomainError> {
        let email =
            EmailAddress::new(email).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_password(password).map_err(|e| DomainError::validation(e.to_string()))?;

        let password_hash = self.hasher.hash(password)?;
        let account = Account::new(email, password_hash, Role::Candidate);

        debug!(account_id = %account.id(), "Registering candidate");

        self.repository.create(account).await
    }

    /// Register an employer account
    ///
    /// Hiring-manager name and phone map onto the shared profile's name and
    /// phone fields; the company name lands in the employer field.
    pub async fn register_employer(
        &self,
        request: RegisterEmployerRequest,
    ) -> Result<Account, DomainError> {
        validate_required(&request.company_name, "companyName")
            .map_err(|e| DomainError::validation(e.to_string()))?;
        validate_required(&request.hiring_manager_first_name, "hiringManagerFirstName")
            .map_err(|e| DomainError::validation(e.to_string()))?;
        validate_required(&request.hiring_manager_last_name, "hiringManagerLastName")
            .map_err(|e| DomainError::validation(e.to_string()))?;
        validate_required(&request.hiring_manager_phone, "hiringManagerPhone")
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let email = EmailAddress::new(&request.hiring_manager_email)
            .map_err(|e| DomainError::validation(e.to_string()))?;
        validate_password(&request.password)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let profile = Profile {
            company_name: request.company_name,
            first_name: request.hiring_manager_first_name,
            last_name: request.hiring_manager_last_name,
            phone: request.hiring_manager_phone,
            ..Default::default()
        };

        let password_hash = self.hasher.hash(&request.password)?;
        let account = Account::with_profile(email, password_hash, Role::Employer, profile);

        debug!(account_id = %account.id(), "Registering employer");

        // The employer flow reports duplicates with its own wording
        self.repository.create(account).await.map_err(|e| match e {
            DomainError::Conflict { .. } => {
                DomainError::conflict("User with this email already exists")
            }
            other => other,
        })
    }

    /// Authenticate with email and password
    ///
    /// Unknown email, malformed email and wrong password all return `None`;
    /// callers surface a single undifferentiated failure to avoid a
    /// user-enumeration oracle.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Account>, DomainError> {
        let email = match EmailAddress::new(email) {
            Ok(e) => e,
            Err(_) => return Ok(None),
        };

        let account = match self.repository.get_by_email(&email).await? {
            Some(a) => a,
            None => return Ok(None),
        };

        if !self.hasher.verify(password, account.password_hash()) {
            return Ok(None);
        }

        Ok(Some(account))
    }

    /// Get an account by ID
    pub async fn get(&self, id: &AccountId) -> Result<Option<Account>, DomainError> {
        self.repository.get(id).await
    }

    /// Apply a sparse profile patch and persist the result
    pub async fn update_profile(
        &self,
        id: &AccountId,
        patch: ProfilePatch,
    ) -> Result<Account, DomainError> {
        let mut account = self.get_required(id).await?;

        account.profile_mut().apply(patch);

        self.repository.update(&account).await
    }

    /// Change the account's password
    ///
    /// The only path that rehashes an existing credential; it requires the
    /// current plaintext to verify first.
    pub async fn change_password(
        &self,
        id: &AccountId,
        request: ChangePasswordRequest,
    ) -> Result<Account, DomainError> {
        let mut account = self.get_required(id).await?;

        if !self
            .hasher
            .verify(&request.current_password, account.password_hash())
        {
            return Err(DomainError::unauthorized("Current password is incorrect"));
        }

        validate_password(&request.new_password)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let new_hash = self.hasher.hash(&request.new_password)?;
        account.set_password_hash(new_hash);

        self.repository.update(&account).await
    }

    // Experience operations

    /// Append an experience entry; a fresh identity is assigned
    pub async fn add_experience(
        &self,
        id: &AccountId,
        entry: Experience,
    ) -> Result<Account, DomainError> {
        let mut account = self.get_required(id).await?;

        account.profile_mut().experience.append(entry);

        self.repository.update(&account).await
    }

    /// Overwrite exactly the fields present in the patch on the addressed
    /// entry, preserving its position and identity
    pub async fn update_experience(
        &self,
        id: &AccountId,
        entry_id: &EntryId,
        patch: ExperiencePatch,
    ) -> Result<Account, DomainError> {
        let mut account = self.get_required(id).await?;

        match account.profile_mut().experience.get_mut(entry_id) {
            Some(entry) => entry.apply(patch),
            None => return Err(DomainError::not_found("Experience not found")),
        }

        self.repository.update(&account).await
    }

    /// Remove an experience entry; removing a non-existent identity is a
    /// no-op that still persists and returns the unchanged account
    pub async fn remove_experience(
        &self,
        id: &AccountId,
        entry_id: &EntryId,
    ) -> Result<Account, DomainError> {
        let mut account = self.get_required(id).await?;

        account.profile_mut().experience.remove(entry_id);

        self.repository.update(&account).await
    }

    // Education operations

    /// Append an education entry; a fresh identity is assigned
    pub async fn add_education(
        &self,
        id: &AccountId,
        entry: Education,
    ) -> Result<Account, DomainError> {
        let mut account = self.get_required(id).await?;

        account.profile_mut().education.append(entry);

        self.repository.update(&account).await
    }

    /// Overwrite exactly the fields present in the patch on the addressed
    /// entry, preserving its position and identity
    pub async fn update_education(
        &self,
        id: &AccountId,
        entry_id: &EntryId,
        patch: EducationPatch,
    ) -> Result<Account, DomainError> {
        let mut account = self.get_required(id).await?;

        match account.profile_mut().education.get_mut(entry_id) {
            Some(entry) => entry.apply(patch),
            None => return Err(DomainError::not_found("Education not found")),
        }

        self.repository.update(&account).await
    }

    /// Remove an education entry; removing a non-existent identity is a no-op
    pub async fn remove_education(
        &self,
        id: &AccountId,
        entry_id: &EntryId,
    ) -> Result<Account, DomainError> {
        let mut account = self.get_required(id).await?;

        account.profile_mut().education.remove(entry_id);

        self.repository.update(&account).await
    }

    async fn get_required(&self, id: &AccountId) -> Result<Account, DomainError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Account '{}' not found", id)))
    }
}
