//! Profile domain
//!
//! The role-polymorphic profile record embedded in every account, its
//! partial-update semantics, and the identity-addressed experience and
//! education collections.

mod education;
mod entity;
mod entry;
mod experience;
mod patch;
mod presence;

pub use education::{Education, EducationPatch};
pub use entity::{CommunicationMode, Profile};
pub use entry::{Entry, EntryId, EntryList};
pub use experience::{Experience, ExperiencePatch};
pub use patch::ProfilePatch;
