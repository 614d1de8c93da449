//! Demo project catalog served by the listing

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::Serialize;
use sl_db::{SortKey, SortValue};

/// Fields a project can be ordered by
pub const SORTABLE_FIELDS: &[&str] = &["id", "name", "status", "created_at", "archived"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub status: Option<String>,
    pub archived: bool,
    pub created_at: DateTime<Utc>,
}

impl SortKey for Project {
    fn sort_key(&self, field: &str) -> Option<SortValue> {
        match field {
            "id" => Some(self.id.into()),
            "name" => Some(self.name.as_str().into()),
            "status" => Some(self.status.clone().into()),
            "archived" => Some(self.archived.into()),
            "created_at" => Some(self.created_at.into()),
            _ => None,
        }
    }
}

pub fn is_sortable(field: &str) -> bool {
    SORTABLE_FIELDS.contains(&field)
}

/// A fixed set of projects with staggered creation dates
pub fn projects() -> Vec<Project> {
    const NAMES: &[(&str, Option<&str>)] = &[
        ("Website relaunch", Some("on track")),
        ("Billing migration", Some("at risk")),
        ("Mobile app", Some("on track")),
        ("Data warehouse", None),
        ("Customer portal", Some("off track")),
        ("Internal wiki", Some("finished")),
        ("Search revamp", None),
        ("Onboarding flow", Some("at risk")),
    ];

    // 2024-01-01 09:00 UTC
    let epoch = Utc.timestamp_opt(1_704_099_600, 0).single().unwrap_or_default();
    NAMES
        .iter()
        .enumerate()
        .map(|(i, (name, status))| Project {
            id: i as i64 + 1,
            name: name.to_string(),
            status: status.map(str::to_string),
            archived: status == &Some("finished"),
            // not monotonic in id so that id and created_at orders differ
            created_at: epoch + Duration::days(((i * 5) % 8) as i64),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_field_has_a_key() {
        for project in projects() {
            for field in SORTABLE_FIELDS {
                assert!(project.sort_key(field).is_some(), "missing {}", field);
            }
            assert!(project.sort_key("budget").is_none());
        }
    }

    #[test]
    fn test_created_at_is_unique() {
        let mut dates: Vec<_> = projects().iter().map(|p| p.created_at).collect();
        dates.sort();
        dates.dedup();
        assert_eq!(dates.len(), projects().len());
    }
}
