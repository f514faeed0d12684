//! Profile entity - the unified candidate/employer attribute record

use serde::{Deserialize, Serialize};

use super::education::Education;
use super::entry::EntryList;
use super::experience::Experience;

/// Preferred way an employer wants to be contacted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CommunicationMode {
    Email,
    Phone,
    #[default]
    #[serde(rename = "")]
    Unspecified,
}

/// The profile embedded in every account
///
/// One flat record holds the union of candidate and employer fields; role
/// only determines which fields the presentation layer surfaces. Fields not
/// relevant to an account's role stay at their defaults, and a patch may
/// legally set employer fields on a candidate account and vice versa -
/// enforcing role-appropriate field sets is deliberately left to callers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    // Candidate fields
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip_code: String,
    // Wire name kept from the original schema
    #[serde(default, rename = "previousexperience")]
    pub previous_experience: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: EntryList<Experience>,
    #[serde(default)]
    pub education: EntryList<Education>,

    // Employer fields
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub company_website: String,
    #[serde(default)]
    pub company_phone: String,
    #[serde(default)]
    pub company_address: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub cost_center: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub project_sponsors: String,
    #[serde(default)]
    pub preferred_communication_mode: CommunicationMode,
    #[serde(default)]
    pub projects: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_has_a_defined_default() {
        let profile = Profile::default();

        assert_eq!(profile.first_name, "");
        assert_eq!(profile.bio, "");
        assert!(profile.skills.is_empty());
        assert!(profile.experience.is_empty());
        assert!(profile.education.is_empty());
        assert_eq!(profile.company_name, "");
        assert_eq!(
            profile.preferred_communication_mode,
            CommunicationMode::Unspecified
        );
        assert!(profile.projects.is_empty());
    }

    #[test]
    fn test_communication_mode_wire_format() {
        assert_eq!(
            serde_json::to_string(&CommunicationMode::Email).unwrap(),
            "\"Email\""
        );
        assert_eq!(
            serde_json::to_string(&CommunicationMode::Unspecified).unwrap(),
            "\"\""
        );

        let mode: CommunicationMode = serde_json::from_str("\"\"").unwrap();
        assert_eq!(mode, CommunicationMode::Unspecified);
    }

    #[test]
    fn test_previous_experience_wire_name() {
        let profile: Profile =
            serde_json::from_str(r#"{"previousexperience": "5 years"}"#).unwrap();
        assert_eq!(profile.previous_experience, "5 years");

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["previousexperience"], "5 years");
    }

    #[test]
    fn test_empty_json_deserializes_to_defaults() {
        let profile: Profile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile, Profile::default());
    }
}
