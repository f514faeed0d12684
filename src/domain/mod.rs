//! Domain layer - Core business logic and entities

pub mod account;
pub mod error;
pub mod profile;

pub use account::{
    validate_email, validate_password, validate_required, Account, AccountId,
    AccountRepository, AccountValidationError, EmailAddress, Role,
};
pub use error::DomainError;
pub use profile::{
    CommunicationMode, Education, EducationPatch, Entry, EntryId, EntryList, Experience,
    ExperiencePatch, Profile, ProfilePatch,
};
