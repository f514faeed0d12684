//! Work experience sub-entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single work-experience record inside a candidate profile
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub current: bool,
}

/// Sparse patch over [`Experience`] fields
///
/// A field is overwritten if and only if its key is present in the patch;
/// absent keys leave the stored value untouched. The date fields track
/// presence separately from nullability, so `{"endDate": null}` clears the
/// date while an absent key keeps it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperiencePatch {
    pub company: Option<String>,
    pub position: Option<String>,
    #[serde(default, deserialize_with = "super::presence::double_option")]
    pub start_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "super::presence::double_option")]
    pub end_date: Option<Option<DateTime<Utc>>>,
    pub description: Option<String>,
    pub current: Option<bool>,
}

impl Experience {
    /// Merge a sparse patch into this record in place
    pub fn apply(&mut self, patch: ExperiencePatch) {
        if let Some(company) = patch.company {
            self.company = company;
        }
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(start_date) = patch.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            self.end_date = end_date;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(current) = patch.current {
            self.current = current;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Experience {
        Experience {
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            start_date: Some("2020-01-01T00:00:00Z".parse().unwrap()),
            end_date: None,
            description: "Built things".to_string(),
            current: true,
        }
    }

    #[test]
    fn test_patch_only_present_fields() {
        let mut exp = sample();
        let patch = ExperiencePatch {
            position: Some("Senior Engineer".to_string()),
            ..Default::default()
        };

        exp.apply(patch);

        assert_eq!(exp.position, "Senior Engineer");
        assert_eq!(exp.company, "Acme");
        assert_eq!(exp.description, "Built things");
        assert!(exp.current);
    }

    #[test]
    fn test_empty_patch_changes_nothing() {
        let mut exp = sample();
        let before = exp.clone();

        exp.apply(ExperiencePatch::default());

        assert_eq!(exp, before);
    }

    #[test]
    fn test_explicit_empty_string_clears() {
        let mut exp = sample();
        let patch: ExperiencePatch =
            serde_json::from_str(r#"{"description": ""}"#).unwrap();

        exp.apply(patch);

        assert_eq!(exp.description, "");
        assert_eq!(exp.company, "Acme");
    }

    #[test]
    fn test_explicit_null_clears_end_date() {
        let mut exp = sample();
        exp.end_date = Some("2023-01-01T00:00:00Z".parse().unwrap());
        exp.current = false;

        let patch: ExperiencePatch =
            serde_json::from_str(r#"{"endDate": null, "current": true}"#).unwrap();
        exp.apply(patch);

        assert_eq!(exp.end_date, None);
        assert!(exp.current);
        assert_eq!(exp.company, "Acme");
    }

    #[test]
    fn test_absent_date_keys_leave_dates_untouched() {
        let mut exp = sample();
        exp.end_date = Some("2023-01-01T00:00:00Z".parse().unwrap());

        let patch: ExperiencePatch =
            serde_json::from_str(r#"{"position": "Lead"}"#).unwrap();
        exp.apply(patch);

        assert!(exp.end_date.is_some());
        assert!(exp.start_date.is_some());
    }

    #[test]
    fn test_present_date_value_overwrites() {
        let mut exp = sample();

        let patch: ExperiencePatch =
            serde_json::from_str(r#"{"endDate": "2024-06-01T00:00:00Z"}"#).unwrap();
        exp.apply(patch);

        assert_eq!(exp.end_date, Some("2024-06-01T00:00:00Z".parse().unwrap()));
    }

    #[test]
    fn test_deserialize_defaults() {
        let exp: Experience = serde_json::from_str("{}").unwrap();
        assert_eq!(exp.company, "");
        assert!(exp.start_date.is_none());
        assert!(!exp.current);
    }
}
