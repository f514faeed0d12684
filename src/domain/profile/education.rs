//! Education sub-entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single education record inside a candidate profile
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub current: bool,
}

/// Sparse patch over [`Education`] fields, field-presence semantics
///
/// The date fields track presence separately from nullability: a present
/// `null` clears the stored date, an absent key keeps it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationPatch {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    #[serde(default, deserialize_with = "super::presence::double_option")]
    pub start_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "super::presence::double_option")]
    pub end_date: Option<Option<DateTime<Utc>>>,
    pub current: Option<bool>,
}

impl Education {
    /// Merge a sparse patch into this record in place
    pub fn apply(&mut self, patch: EducationPatch) {
        if let Some(institution) = patch.institution {
            self.institution = institution;
        }
        if let Some(degree) = patch.degree {
            self.degree = degree;
        }
        if let Some(field) = patch.field {
            self.field = field;
        }
        if let Some(start_date) = patch.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            self.end_date = end_date;
        }
        if let Some(current) = patch.current {
            self.current = current;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_only_present_fields() {
        let mut edu = Education {
            institution: "State University".to_string(),
            degree: "BSc".to_string(),
            field: "Computer Science".to_string(),
            start_date: None,
            end_date: None,
            current: false,
        };

        let patch = EducationPatch {
            degree: Some("MSc".to_string()),
            ..Default::default()
        };

        edu.apply(patch);

        assert_eq!(edu.degree, "MSc");
        assert_eq!(edu.institution, "State University");
        assert_eq!(edu.field, "Computer Science");
    }

    #[test]
    fn test_explicit_null_clears_end_date() {
        let mut edu = Education {
            institution: "State University".to_string(),
            end_date: Some("2022-06-01T00:00:00Z".parse().unwrap()),
            ..Default::default()
        };

        let patch: EducationPatch =
            serde_json::from_str(r#"{"endDate": null, "current": true}"#).unwrap();
        edu.apply(patch);

        assert_eq!(edu.end_date, None);
        assert!(edu.current);
        assert_eq!(edu.institution, "State University");
    }

    #[test]
    fn test_empty_patch_changes_nothing() {
        let mut edu = Education {
            institution: "State University".to_string(),
            ..Default::default()
        };
        let before = edu.clone();

        edu.apply(EducationPatch::default());

        assert_eq!(edu, before);
    }
}
