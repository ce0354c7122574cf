//! Filtering, sorting and paging of the draft list.
//!
//! Criteria and paging are small values; every toolbar action returns an
//! updated copy rather than mutating in place.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shown in place of a missing summary.
pub const NO_SUMMARY: &str = "(Design or schema with no summary)";

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// A locally held draft as shown in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub summary: String,
    /// Registry artifact type, e.g. `OPENAPI`.
    #[serde(rename = "type")]
    pub artifact_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<DateTime<Utc>>,
}

impl Draft {
    #[must_use]
    pub fn display_summary(&self) -> &str {
        if self.summary.trim().is_empty() {
            NO_SUMMARY
        } else {
            &self.summary
        }
    }

    fn matches_filter(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.summary.to_lowercase().contains(needle)
    }

    fn cmp_by_name(&self, other: &Self) -> Ordering {
        self.name
            .to_lowercase()
            .cmp(&other.name.to_lowercase())
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// Filter text and sort direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCriteria {
    pub filter_value: String,
    pub ascending: bool,
}

impl Default for ListCriteria {
    fn default() -> Self {
        Self {
            filter_value: String::new(),
            ascending: true,
        }
    }
}

impl ListCriteria {
    #[must_use]
    pub fn toggle_ascending(&self) -> Self {
        Self {
            ascending: !self.ascending,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn search(&self, filter_value: impl Into<String>) -> Self {
        Self {
            filter_value: filter_value.into(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn clear(&self) -> Self {
        self.search(String::new())
    }
}

/// 1-based page position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    pub page: usize,
    pub page_size: usize,
}

impl Default for Paging {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Paging {
    /// Page and page size are clamped to at least 1.
    #[must_use]
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Move to `page`, optionally changing the page size too.
    #[must_use]
    pub fn set_page(self, page: usize, per_page: Option<usize>) -> Self {
        Self::new(page, per_page.unwrap_or(self.page_size))
    }

    /// Change the page size, staying on the current page.
    #[must_use]
    pub fn set_page_size(self, page_size: usize) -> Self {
        Self::new(self.page, page_size)
    }

    /// Index of the first item on this page.
    #[must_use]
    pub fn offset(self) -> usize {
        self.page.max(1).saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Number of pages needed for `count` items; at least 1.
    #[must_use]
    pub fn page_count(self, count: usize) -> usize {
        count.div_ceil(self.page_size.max(1)).max(1)
    }
}

/// One page of the filtered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftPage {
    pub drafts: Vec<Draft>,
    /// Number of drafts matching the filter, across all pages.
    pub count: usize,
}

/// Apply filter, sort order and paging to `drafts`.
///
/// The filter is a case-insensitive substring match on name or summary.
/// Drafts sort by name (case-insensitive), ties broken by id.
#[must_use]
pub fn list_drafts(drafts: &[Draft], criteria: &ListCriteria, paging: Paging) -> DraftPage {
    let needle = criteria.filter_value.trim().to_lowercase();
    let mut matching: Vec<&Draft> = drafts.iter().filter(|d| d.matches_filter(&needle)).collect();

    matching.sort_by(|a, b| {
        let ord = a.cmp_by_name(b);
        if criteria.ascending { ord } else { ord.reverse() }
    });

    let count = matching.len();
    let page = matching
        .into_iter()
        .skip(paging.offset())
        .take(paging.page_size.max(1))
        .cloned()
        .collect();

    DraftPage {
        drafts: page,
        count,
    }
}
