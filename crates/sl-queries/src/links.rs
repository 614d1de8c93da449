//! Column links
//!
//! One link per allowed sort field, carrying the URL a click should load,
//! whether the column is the active sort, and the header title.

use serde::{Serialize, Serializer};

use crate::sorts::{SortDirection, SortSpec};

/// Active-sort marker for a column header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortIndicator {
    /// Column is not the active sort
    #[default]
    None,
    Asc,
    Desc,
}

impl SortIndicator {
    /// Indicator for `field` under the current sort: only the active
    /// column gets one, mirroring the current direction.
    pub fn for_field(field: &str, current: &SortSpec) -> Self {
        if field != current.field {
            return Self::None;
        }
        match current.direction {
            SortDirection::Asc => Self::Asc,
            SortDirection::Desc => Self::Desc,
        }
    }

    /// CSS class used by header templates
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Asc => "sort-asc",
            Self::Desc => "sort-desc",
        }
    }

    pub fn is_active(&self) -> bool {
        *self != Self::None
    }
}

impl Serialize for SortIndicator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.css_class())
    }
}

/// Everything a template needs to render one sortable column header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkDescriptor {
    pub field: String,
    /// Target of the header link
    pub url: String,
    pub indicator: SortIndicator,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_only_for_active_field() {
        let current = SortSpec::desc("name");
        assert_eq!(SortIndicator::for_field("name", &current), SortIndicator::Desc);
        assert_eq!(SortIndicator::for_field("id", &current), SortIndicator::None);
        assert_eq!(
            SortIndicator::for_field("name", &SortSpec::asc("name")),
            SortIndicator::Asc
        );
    }

    #[test]
    fn test_css_class() {
        assert_eq!(SortIndicator::None.css_class(), "");
        assert_eq!(SortIndicator::Asc.css_class(), "sort-asc");
        assert_eq!(SortIndicator::Desc.css_class(), "sort-desc");
        assert!(!SortIndicator::None.is_active());
        assert!(SortIndicator::Asc.is_active());
    }

    #[test]
    fn test_link_serialization() {
        let link = LinkDescriptor {
            field: "name".into(),
            url: "/projects?sort=-name".into(),
            indicator: SortIndicator::Asc,
            title: "Name".into(),
        };
        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "field": "name",
                "url": "/projects?sort=-name",
                "indicator": "sort-asc",
                "title": "Name",
            })
        );
    }
}
