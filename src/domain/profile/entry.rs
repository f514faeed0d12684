//! Identity-addressed ordered collections for profile sub-entities

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity of a sub-entity, assigned at creation
///
/// Independent of the entry's position in its sequence, so update and
/// delete by id stay correct after insertions or removals elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A sub-entity together with its stable identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry<T> {
    pub id: EntryId,
    #[serde(flatten)]
    pub data: T,
}

/// Insertion-ordered collection of sub-entities addressed by [`EntryId`]
///
/// Serializes as a plain JSON array with each entry's `id` inlined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryList<T> {
    entries: Vec<Entry<T>>,
}

impl<T> EntryList<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Assign a fresh identity and append to the end of the sequence
    pub fn append(&mut self, data: T) -> EntryId {
        let id = EntryId::new();
        self.entries.push(Entry { id, data });
        id
    }

    /// Look up an entry by identity
    pub fn get(&self, id: &EntryId) -> Option<&T> {
        self.entries.iter().find(|e| e.id == *id).map(|e| &e.data)
    }

    /// Look up an entry by identity for in-place mutation
    ///
    /// Position and identity are preserved across mutation; the replace
    /// operation never reorders.
    pub fn get_mut(&mut self, id: &EntryId) -> Option<&mut T> {
        self.entries
            .iter_mut()
            .find(|e| e.id == *id)
            .map(|e| &mut e.data)
    }

    /// Remove the entry with the given identity if present
    ///
    /// Removing a non-existent identity is a no-op returning `false`. The
    /// replace path reports NotFound instead; callers rely on the asymmetry.
    pub fn remove(&mut self, id: &EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != *id);
        self.entries.len() < before
    }

    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry<T>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for EntryList<T> {
    fn default() -> Self {
        Self::new()
    }
}
