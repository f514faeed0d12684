//! Partial-update semantics for the profile record

use serde::Deserialize;

use super::education::Education;
use super::entity::{CommunicationMode, Profile};
use super::entry::EntryList;
use super::experience::Experience;

/// Sparse patch across the full candidate + employer field superset
///
/// Merging uses field presence, not value truthiness: a field is overwritten
/// if and only if the patch supplies its key - including an explicit empty
/// string or empty collection - and left untouched when the key is absent.
/// This distinguishes "clear this field" from "don't touch this field".
///
/// No role-based filtering happens here; the patch may set any field on any
/// account.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    // Candidate fields
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    #[serde(rename = "previousexperience")]
    pub previous_experience: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
    /// Whole-collection replacement; each element receives a fresh identity
    pub experience: Option<Vec<Experience>>,
    pub education: Option<Vec<Education>>,

    // Employer fields
    pub company_name: Option<String>,
    pub company_website: Option<String>,
    pub company_phone: Option<String>,
    pub company_address: Option<String>,
    pub organization: Option<String>,
    pub cost_center: Option<String>,
    pub department: Option<String>,
    pub project_sponsors: Option<String>,
    pub preferred_communication_mode: Option<CommunicationMode>,
    pub projects: Option<Vec<String>>,
}

impl Profile {
    /// Merge a sparse patch into this profile in place
    ///
    /// Idempotent: applying the same patch twice yields the same end state
    /// as applying it once.
    pub fn apply(&mut self, patch: ProfilePatch) {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(city) = patch.city {
            self.city = city;
        }
        if let Some(state) = patch.state {
            self.state = state;
        }
        if let Some(zip_code) = patch.zip_code {
            self.zip_code = zip_code;
        }
        if let Some(previous_experience) = patch.previous_experience {
            self.previous_experience = previous_experience;
        }
        if let Some(bio) = patch.bio {
            self.bio = bio;
        }
        if let Some(skills) = patch.skills {
            self.skills = skills;
        }
        if let Some(experience) = patch.experience {
            self.experience = rebuild(experience);
        }
        if let Some(education) = patch.education {
            self.education = rebuild(education);
        }
        if let Some(company_name) = patch.company_name {
            self.company_name = company_name;
        }
        if let Some(company_website) = patch.company_website {
            self.company_website = company_website;
        }
        if let Some(company_phone) = patch.company_phone {
            self.company_phone = company_phone;
        }
        if let Some(company_address) = patch.company_address {
            self.company_address = company_address;
        }
        if let Some(organization) = patch.organization {
            self.organization = organization;
        }
        if let Some(cost_center) = patch.cost_center {
            self.cost_center = cost_center;
        }
        if let Some(department) = patch.department {
            self.department = department;
        }
        if let Some(project_sponsors) = patch.project_sponsors {
            self.project_sponsors = project_sponsors;
        }
        if let Some(mode) = patch.preferred_communication_mode {
            self.preferred_communication_mode = mode;
        }
        if let Some(projects) = patch.projects {
            self.projects = projects;
        }
    }
}

fn rebuild<T>(items: Vec<T>) -> EntryList<T> {
    let mut list = EntryList::new();
    for item in items {
        list.append(item);
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated_profile() -> Profile {
        Profile {
            first_name: "Jo".to_string(),
            last_name: "Lee".to_string(),
            bio: "Experienced engineer".to_string(),
            skills: vec!["rust".to_string(), "sql".to_string()],
            company_name: "Acme".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_present_key_overwrites() {
        let mut profile = populated_profile();
        let patch: ProfilePatch =
            serde_json::from_str(r#"{"firstName": "Sam"}"#).unwrap();

        profile.apply(patch);

        assert_eq!(profile.first_name, "Sam");
        assert_eq!(profile.last_name, "Lee");
    }

    #[test]
    fn test_explicit_empty_string_clears_bio() {
        let mut profile = populated_profile();
        let patch: ProfilePatch = serde_json::from_str(r#"{"bio": ""}"#).unwrap();

        profile.apply(patch);

        assert_eq!(profile.bio, "");
        // Siblings untouched
        assert_eq!(profile.first_name, "Jo");
        assert_eq!(profile.skills.len(), 2);
    }

    #[test]
    fn test_explicit_empty_collection_clears_skills() {
        let mut profile = populated_profile();
        let patch: ProfilePatch = serde_json::from_str(r#"{"skills": []}"#).unwrap();

        profile.apply(patch);

        assert!(profile.skills.is_empty());
        assert_eq!(profile.bio, "Experienced engineer");
    }

    #[test]
    fn test_empty_patch_leaves_profile_unchanged() {
        let mut profile = populated_profile();
        let before = profile.clone();

        let patch: ProfilePatch = serde_json::from_str("{}").unwrap();
        profile.apply(patch);

        assert_eq!(profile, before);
    }

    #[test]
    fn test_patch_is_idempotent() {
        let json = r#"{"bio": "new bio", "skills": ["go"], "companyName": ""}"#;

        let mut once = populated_profile();
        once.apply(serde_json::from_str(json).unwrap());

        let mut twice = populated_profile();
        twice.apply(serde_json::from_str(json).unwrap());
        twice.apply(serde_json::from_str(json).unwrap());

        assert_eq!(once, twice);
    }

    #[test]
    fn test_cross_role_fields_are_permitted() {
        // A candidate profile accepts employer fields; no filtering happens
        let mut profile = Profile::default();
        let patch: ProfilePatch = serde_json::from_str(
            r#"{"companyName": "Acme", "costCenter": "CC-7", "firstName": "Jo"}"#,
        )
        .unwrap();

        profile.apply(patch);

        assert_eq!(profile.company_name, "Acme");
        assert_eq!(profile.cost_center, "CC-7");
        assert_eq!(profile.first_name, "Jo");
    }

    #[test]
    fn test_collection_replacement_assigns_fresh_ids() {
        let mut profile = Profile::default();
        let original_id = profile.experience.append(super::Experience {
            company: "Old Co".to_string(),
            ..Default::default()
        });

        let patch: ProfilePatch = serde_json::from_str(
            r#"{"experience": [{"company": "New Co", "position": "Dev"}]}"#,
        )
        .unwrap();
        profile.apply(patch);

        assert_eq!(profile.experience.len(), 1);
        assert!(profile.experience.get(&original_id).is_none());
        let entry = profile.experience.iter().next().unwrap();
        assert_eq!(entry.data.company, "New Co");
    }
}
