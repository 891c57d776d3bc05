use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Pipeline stage of a lead. Serialized snake_case to match the store's
/// status column values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    #[default]
    OnProcess,
    Positive,
    Completed,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 3] = [Self::OnProcess, Self::Positive, Self::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnProcess => "on_process",
            Self::Positive => "positive",
            Self::Completed => "completed",
        }
    }

    /// Human form used on badges and tabs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::OnProcess => "On Process",
            Self::Positive => "Positive",
            Self::Completed => "Completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lead {
    pub id: Uuid,
    pub name: String,
    pub age: u32,
    pub location: Option<String>,
    pub course_preferred: Option<String>,
    pub qualification: Option<String>,
    pub phone_no: String,
    pub fees: Option<String>,
    pub date: NaiveDate,
    pub queries: Option<String>,
    pub status: LeadStatus,
}

/// A lead without its store-assigned id: the create payload, and the
/// wholesale-overwrite update payload.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLead {
    pub name: String,
    pub age: u32,
    pub location: Option<String>,
    pub course_preferred: Option<String>,
    pub qualification: Option<String>,
    pub phone_no: String,
    pub fees: Option<String>,
    pub date: NaiveDate,
    pub queries: Option<String>,
    pub status: LeadStatus,
}

impl Lead {
    /// Mutable fields of this lead, ready to send back as an update.
    pub fn to_new(&self) -> NewLead {
        NewLead {
            name: self.name.clone(),
            age: self.age,
            location: self.location.clone(),
            course_preferred: self.course_preferred.clone(),
            qualification: self.qualification.clone(),
            phone_no: self.phone_no.clone(),
            fees: self.fees.clone(),
            date: self.date,
            queries: self.queries.clone(),
            status: self.status,
        }
    }

    /// Update payload for an inline status change: everything kept as-is
    /// except the status.
    pub fn with_status(&self, status: LeadStatus) -> NewLead {
        NewLead {
            status,
            ..self.to_new()
        }
    }
}

/// Raw form state. Every input is a string until `parse` turns it into a
/// `NewLead`; a draft that fails to parse triggers no store call.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadDraft {
    pub name: String,
    pub age: String,
    pub location: String,
    pub course_preferred: String,
    pub qualification: String,
    pub phone_no: String,
    pub fees: String,
    pub date: String,
    pub queries: String,
    pub status: LeadStatus,
}

impl LeadDraft {
    /// Empty draft with the date prefilled, matching the form's default.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            age: String::new(),
            location: String::new(),
            course_preferred: String::new(),
            qualification: String::new(),
            phone_no: String::new(),
            fees: String::new(),
            date: today.to_string(),
            queries: String::new(),
            status: LeadStatus::default(),
        }
    }

    /// Draft prefilled from an existing lead, for the edit dialog.
    pub fn from_lead(lead: &Lead) -> Self {
        Self {
            name: lead.name.clone(),
            age: lead.age.to_string(),
            location: lead.location.clone().unwrap_or_default(),
            course_preferred: lead.course_preferred.clone().unwrap_or_default(),
            qualification: lead.qualification.clone().unwrap_or_default(),
            phone_no: lead.phone_no.clone(),
            fees: lead.fees.clone().unwrap_or_default(),
            date: lead.date.to_string(),
            queries: lead.queries.clone().unwrap_or_default(),
            status: lead.status,
        }
    }

    pub fn parse(&self) -> Result<NewLead, ValidationError> {
        if self.name.is_empty() || self.age.is_empty() || self.phone_no.is_empty() {
            return Err(ValidationError::MissingRequired);
        }
        let age = self
            .age
            .parse::<u32>()
            .map_err(|_| ValidationError::InvalidAge)?;
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate)?;

        Ok(NewLead {
            name: self.name.clone(),
            age,
            location: optional(&self.location),
            course_preferred: optional(&self.course_preferred),
            qualification: optional(&self.qualification),
            phone_no: self.phone_no.clone(),
            fees: optional(&self.fees),
            date,
            queries: optional(&self.queries),
            status: self.status,
        })
    }
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    fn valid_draft() -> LeadDraft {
        let mut draft = LeadDraft::new(today());
        draft.name = "Ann".to_string();
        draft.age = "25".to_string();
        draft.phone_no = "+1 234 567 8900".to_string();
        draft
    }

    #[test]
    fn status_defaults_to_on_process() {
        assert_eq!(LeadStatus::default(), LeadStatus::OnProcess);
    }

    #[test]
    fn status_parse_round_trips() {
        for status in LeadStatus::ALL {
            assert_eq!(LeadStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(LeadStatus::parse("negative"), None);
        assert_eq!(LeadStatus::parse(""), None);
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&LeadStatus::OnProcess).unwrap();
        assert_eq!(json, "\"on_process\"");
        let back: LeadStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(back, LeadStatus::Completed);
    }

    #[test]
    fn new_draft_prefills_today() {
        let draft = LeadDraft::new(today());
        assert_eq!(draft.date, "2026-08-06");
        assert_eq!(draft.status, LeadStatus::OnProcess);
    }

    #[test]
    fn valid_draft_parses_with_age_coerced() {
        let lead = valid_draft().parse().unwrap();
        assert_eq!(lead.name, "Ann");
        assert_eq!(lead.age, 25);
        assert_eq!(lead.phone_no, "+1 234 567 8900");
        assert_eq!(lead.date, today());
        assert_eq!(lead.status, LeadStatus::OnProcess);
        assert_eq!(lead.location, None);
        assert_eq!(lead.queries, None);
    }

    #[test]
    fn filled_optional_fields_survive_parsing() {
        let mut draft = valid_draft();
        draft.location = "New York, USA".to_string();
        draft.course_preferred = "Web Development".to_string();
        draft.qualification = "B.Sc".to_string();
        draft.fees = "15k negotiable".to_string();
        draft.queries = "Evening batches?".to_string();

        let lead = draft.parse().unwrap();
        assert_eq!(lead.location.as_deref(), Some("New York, USA"));
        assert_eq!(lead.course_preferred.as_deref(), Some("Web Development"));
        assert_eq!(lead.qualification.as_deref(), Some("B.Sc"));
        assert_eq!(lead.fees.as_deref(), Some("15k negotiable"));
        assert_eq!(lead.queries.as_deref(), Some("Evening batches?"));
    }

    #[test]
    fn missing_required_fields_block_parsing() {
        let cases: [fn(&mut LeadDraft); 3] = [
            |d| d.name.clear(),
            |d| d.age.clear(),
            |d| d.phone_no.clear(),
        ];
        for clear in cases {
            let mut draft = valid_draft();
            clear(&mut draft);
            assert_eq!(draft.parse(), Err(ValidationError::MissingRequired));
        }
    }

    #[test]
    fn non_numeric_age_is_rejected() {
        for bad in ["abc", "-3", "25.5", "1e3"] {
            let mut draft = valid_draft();
            draft.age = bad.to_string();
            assert_eq!(draft.parse(), Err(ValidationError::InvalidAge), "{bad}");
        }
    }

    #[test]
    fn malformed_date_is_rejected() {
        let mut draft = valid_draft();
        draft.date = "06/08/2026".to_string();
        assert_eq!(draft.parse(), Err(ValidationError::InvalidDate));
    }

    #[test]
    fn with_status_alters_only_the_status() {
        let lead = Lead {
            id: Uuid::new_v4(),
            name: "Ann".to_string(),
            age: 25,
            location: Some("Chennai".to_string()),
            course_preferred: Some("Data Science".to_string()),
            qualification: None,
            phone_no: "9876543210".to_string(),
            fees: Some("20000".to_string()),
            date: today(),
            queries: Some("Weekend classes".to_string()),
            status: LeadStatus::OnProcess,
        };

        let update = lead.with_status(LeadStatus::Completed);
        let expected = NewLead {
            status: LeadStatus::Completed,
            ..lead.to_new()
        };
        assert_eq!(update, expected);
        assert_eq!(update.name, lead.name);
        assert_eq!(update.date, lead.date);
    }

    #[test]
    fn draft_from_lead_parses_back_unchanged() {
        let lead = Lead {
            id: Uuid::new_v4(),
            name: "Bob".to_string(),
            age: 31,
            location: None,
            course_preferred: Some("DevOps".to_string()),
            qualification: Some("Diploma".to_string()),
            phone_no: "044-555012".to_string(),
            fees: None,
            date: today(),
            queries: None,
            status: LeadStatus::Positive,
        };

        let parsed = LeadDraft::from_lead(&lead).parse().unwrap();
        assert_eq!(parsed, lead.to_new());
    }
}
