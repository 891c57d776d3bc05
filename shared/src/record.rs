//! Row shapes for the hosted record store.
//!
//! Column names here are the store's snake_case schema. The mapping to the
//! domain types is total in both directions: every domain field has exactly
//! one column and vice versa, so nothing is silently dropped at the boundary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::lead::{Lead, LeadStatus, NewLead};

/// One stored row, as returned by a select. Server-managed columns the UI
/// never reads (created_at, the ownership column) are ignored on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadRecord {
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

/// Insert/update body: a row without its server-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewLeadRecord {
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

impl From<LeadRecord> for Lead {
    fn from(row: LeadRecord) -> Self {
        Lead {
            id: row.id,
            name: row.name,
            age: row.age,
            location: row.location,
            course_preferred: row.course_preferred,
            qualification: row.qualification,
            phone_no: row.phone_no,
            fees: row.fees,
            date: row.date,
            queries: row.queries,
            status: row.status,
        }
    }
}

impl From<Lead> for LeadRecord {
    fn from(lead: Lead) -> Self {
        LeadRecord {
            id: lead.id,
            name: lead.name,
            age: lead.age,
            location: lead.location,
            course_preferred: lead.course_preferred,
            qualification: lead.qualification,
            phone_no: lead.phone_no,
            fees: lead.fees,
            date: lead.date,
            queries: lead.queries,
            status: lead.status,
        }
    }
}

impl From<&NewLead> for NewLeadRecord {
    fn from(lead: &NewLead) -> Self {
        NewLeadRecord {
            name: lead.name.clone(),
            age: lead.age,
            location: lead.location.clone(),
            course_preferred: lead.course_preferred.clone(),
            qualification: lead.qualification.clone(),
            phone_no: lead.phone_no.clone(),
            fees: lead.fees.clone(),
            date: lead.date,
            queries: lead.queries.clone(),
            status: lead.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample(full: bool) -> Lead {
        Lead {
            id: Uuid::parse_str("4b1e7c52-9d3a-4f06-9a41-0c2f7a60d8ee").unwrap(),
            name: "Ann".to_string(),
            age: 25,
            location: full.then(|| "Chennai".to_string()),
            course_preferred: full.then(|| "Web Development".to_string()),
            qualification: full.then(|| "B.E".to_string()),
            phone_no: "9876543210".to_string(),
            fees: full.then(|| "15000".to_string()),
            date: NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
            queries: full.then(|| "Placement support?".to_string()),
            status: LeadStatus::Positive,
        }
    }

    #[test]
    fn round_trip_is_identity() {
        for full in [true, false] {
            let lead = sample(full);
            let back: Lead = LeadRecord::from(lead.clone()).into();
            assert_eq!(back, lead);
        }
    }

    #[test]
    fn insert_body_uses_store_column_names_and_no_id() {
        let lead = sample(true);
        let body = serde_json::to_value(NewLeadRecord::from(&lead.to_new())).unwrap();

        let mut keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "age",
                "course_preferred",
                "date",
                "fees",
                "location",
                "name",
                "phone_no",
                "qualification",
                "queries",
                "status",
            ]
        );
        assert_eq!(body["status"], json!("positive"));
        assert_eq!(body["date"], json!("2026-08-06"));
        assert_eq!(body["age"], json!(25));
    }

    #[test]
    fn decodes_rows_with_server_managed_columns() {
        let row: LeadRecord = serde_json::from_value(json!({
            "id": "4b1e7c52-9d3a-4f06-9a41-0c2f7a60d8ee",
            "user_id": "f3a0b7cc-1111-4222-8333-944445555666",
            "created_at": "2026-08-06T09:30:00.000Z",
            "name": "Ann",
            "age": 25,
            "location": null,
            "course_preferred": "Web Development",
            "qualification": null,
            "phone_no": "9876543210",
            "fees": null,
            "date": "2026-08-06",
            "queries": null,
            "status": "on_process"
        }))
        .unwrap();

        assert_eq!(row.name, "Ann");
        assert_eq!(row.location, None);
        assert_eq!(row.course_preferred.as_deref(), Some("Web Development"));
        assert_eq!(row.status, LeadStatus::OnProcess);

        let lead: Lead = row.into();
        assert_eq!(lead.age, 25);
    }

    #[test]
    fn unknown_status_value_fails_to_decode() {
        let result: Result<LeadRecord, _> = serde_json::from_value(json!({
            "id": "4b1e7c52-9d3a-4f06-9a41-0c2f7a60d8ee",
            "name": "Ann",
            "age": 25,
            "location": null,
            "course_preferred": null,
            "qualification": null,
            "phone_no": "9876543210",
            "fees": null,
            "date": "2026-08-06",
            "queries": null,
            "status": "negative"
        }));
        assert!(result.is_err());
    }
}
