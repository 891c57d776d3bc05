//! Client-side search and status filtering for the leads list.

use crate::lead::{Lead, LeadStatus};

/// The two independent list filters: a free-text query and a status
/// category (`None` = the "All" tab). The displayed set is the
/// intersection of both.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadFilter {
    pub query: String,
    pub status: Option<LeadStatus>,
}

impl LeadFilter {
    /// Whether any filter narrows the list. Drives the distinction between
    /// "no leads at all" and "nothing matches the current filters".
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.status.is_some()
    }

    pub fn matches(&self, lead: &Lead) -> bool {
        let status_ok = self.status.is_none_or(|status| lead.status == status);
        status_ok && matches_query(lead, &self.query)
    }

    /// Filtered view over the fetched set, store order preserved.
    pub fn apply<'a>(&self, leads: &'a [Lead]) -> Vec<&'a Lead> {
        leads.iter().filter(|lead| self.matches(lead)).collect()
    }
}

/// Case-insensitive substring match over the searchable text fields:
/// name, phone number, preferred course, location, qualification.
fn matches_query(lead: &Lead, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    let hit = |field: &str| field.to_lowercase().contains(&query);
    hit(&lead.name)
        || hit(&lead.phone_no)
        || lead.course_preferred.as_deref().is_some_and(hit)
        || lead.location.as_deref().is_some_and(hit)
        || lead.qualification.as_deref().is_some_and(hit)
}

/// Tab badge count for one status, over the full fetched set. Counts stay
/// independent of the text query so the badges do not jump while typing.
pub fn count_by_status(leads: &[Lead], status: LeadStatus) -> usize {
    leads.iter().filter(|lead| lead.status == status).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    fn lead(name: &str, status: LeadStatus) -> Lead {
        Lead {
            id: Uuid::new_v4(),
            name: name.to_string(),
            age: 25,
            location: None,
            course_preferred: None,
            qualification: None,
            phone_no: "9876543210".to_string(),
            fees: None,
            date: NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
            queries: None,
            status,
        }
    }

    fn names<'a>(leads: Vec<&'a Lead>) -> Vec<&'a str> {
        leads.into_iter().map(|l| l.name.as_str()).collect()
    }

    fn pipeline() -> Vec<Lead> {
        vec![
            lead("Ann", LeadStatus::Positive),
            lead("Bob", LeadStatus::Completed),
        ]
    }

    #[test]
    fn query_intersects_with_all_statuses() {
        let leads = pipeline();
        let filter = LeadFilter {
            query: "an".to_string(),
            status: None,
        };
        assert_eq!(names(filter.apply(&leads)), vec!["Ann"]);
    }

    #[test]
    fn status_filter_alone_selects_exactly() {
        let leads = pipeline();
        let filter = LeadFilter {
            query: String::new(),
            status: Some(LeadStatus::Completed),
        };
        assert_eq!(names(filter.apply(&leads)), vec!["Bob"]);
    }

    #[test]
    fn unmatched_query_yields_empty_but_active() {
        let leads = pipeline();
        for status in [None, Some(LeadStatus::Positive)] {
            let filter = LeadFilter {
                query: "zz".to_string(),
                status,
            };
            assert!(filter.apply(&leads).is_empty());
            // Active filter on a non-empty set: "no results matching search",
            // not "no leads yet".
            assert!(filter.is_active());
        }
        assert!(!LeadFilter::default().is_active());
    }

    #[test]
    fn search_is_case_insensitive() {
        let leads = pipeline();
        let filter = LeadFilter {
            query: "ANN".to_string(),
            status: None,
        };
        assert_eq!(names(filter.apply(&leads)), vec!["Ann"]);
    }

    #[test]
    fn search_covers_phone_course_location_qualification() {
        let mut target = lead("Carol", LeadStatus::OnProcess);
        target.phone_no = "044-1234".to_string();
        target.course_preferred = Some("Data Science".to_string());
        target.location = Some("Chennai".to_string());
        target.qualification = Some("M.Sc".to_string());
        let leads = vec![lead("Ann", LeadStatus::Positive), target];

        for query in ["044", "science", "chennai", "m.sc"] {
            let filter = LeadFilter {
                query: query.to_string(),
                status: None,
            };
            assert_eq!(names(filter.apply(&leads)), vec!["Carol"], "{query}");
        }
    }

    #[test]
    fn search_ignores_queries_and_fees() {
        let mut target = lead("Dave", LeadStatus::OnProcess);
        target.queries = Some("wants hostel".to_string());
        target.fees = Some("18000".to_string());
        let leads = vec![target];

        for query in ["hostel", "18000"] {
            let filter = LeadFilter {
                query: query.to_string(),
                status: None,
            };
            assert!(filter.apply(&leads).is_empty(), "{query}");
        }
    }

    #[test]
    fn filters_intersect() {
        let leads = vec![
            lead("Ann", LeadStatus::Positive),
            lead("Anna", LeadStatus::Completed),
        ];
        let filter = LeadFilter {
            query: "ann".to_string(),
            status: Some(LeadStatus::Completed),
        };
        assert_eq!(names(filter.apply(&leads)), vec!["Anna"]);
    }

    #[test]
    fn counts_cover_the_full_set_regardless_of_query() {
        let leads = vec![
            lead("Ann", LeadStatus::Positive),
            lead("Bob", LeadStatus::Completed),
            lead("Carol", LeadStatus::Completed),
        ];
        // A query that matches only Ann must not change the badge counts.
        assert_eq!(count_by_status(&leads, LeadStatus::OnProcess), 0);
        assert_eq!(count_by_status(&leads, LeadStatus::Positive), 1);
        assert_eq!(count_by_status(&leads, LeadStatus::Completed), 2);
    }

    #[test]
    fn apply_preserves_store_order() {
        let leads = vec![
            lead("Newest", LeadStatus::Positive),
            lead("Older", LeadStatus::Positive),
            lead("Oldest", LeadStatus::Positive),
        ];
        let filter = LeadFilter::default();
        assert_eq!(names(filter.apply(&leads)), vec!["Newest", "Older", "Oldest"]);
    }
}
