//! Account entity and related value types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{validate_email, AccountValidationError};
use crate::domain::profile::Profile;

/// Account identifier - UUID v4 assigned at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Generate a fresh account identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an account identifier from its string form
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalized email address - trimmed and lowercased on construction
///
/// Uniqueness of accounts is defined over this normalized form, so
/// `Jo@Acme.com` and ` jo@acme.com ` identify the same account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new email address after normalization and validation
    pub fn new(email: impl AsRef<str>) -> Result<Self, AccountValidationError> {
        let normalized = email.as_ref().trim().to_ascii_lowercase();
        validate_email(&normalized)?;
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = AccountValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role of an account on the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Role {
    #[default]
    Candidate,
    Recruiter,
    Employer,
    #[serde(rename = "Hiring Manager")]
    HiringManager,
    Interviewer,
}

/// Account entity - one persisted identity with credential, role and profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    id: AccountId,
    /// Normalized login email - globally unique
    email: EmailAddress,
    /// Argon2 password hash - never exposed in serialization
    #[serde(skip_serializing, default)]
    password_hash: String,
    /// Role tag, defaults to Candidate
    role: Role,
    /// Embedded candidate/employer profile
    profile: Profile,
    /// Creation timestamp
    created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with an empty profile
    pub fn new(email: EmailAddress, password_hash: impl Into<String>, role: Role) -> Self {
        Self {
            id: AccountId::new(),
            email,
            password_hash: password_hash.into(),
            role,
            profile: Profile::default(),
            created_at: Utc::now(),
        }
    }

    /// Create a new account with a pre-populated profile (employer registration)
    pub fn with_profile(
        email: EmailAddress,
        password_hash: impl Into<String>,
        role: Role,
        profile: Profile,
    ) -> Self {
        Self {
            id: AccountId::new(),
            email,
            password_hash: password_hash.into(),
            role,
            profile,
            created_at: Utc::now(),
        }
    }

    /// Restore an account from persisted state
    pub fn restore(
        id: AccountId,
        email: EmailAddress,
        password_hash: String,
        role: Role,
        profile: Profile,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            password_hash,
            role,
            profile,
            created_at,
        }
    }

    // Getters

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut Profile {
        &mut self.profile
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    // Mutators

    /// Replace the stored credential hash
    ///
    /// Only called when the plaintext actually changed; re-saving an account
    /// without touching the password never rehashes.
    pub fn set_password_hash(&mut self, password_hash: impl Into<String>) {
        self.password_hash = password_hash.into();
    }
}
