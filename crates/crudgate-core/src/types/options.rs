//! Baseline and resolved query options for a route.

use serde::{Deserialize, Serialize};

use super::filter::FilterField;
use super::sorting::SortField;

/// Query options attached to a route.
///
/// The same type serves two roles: the static baseline configured at route
/// registration, and the per-request resolved value whose filter list has
/// been extended with request-derived entries. The baseline is never
/// mutated; resolution always clones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryOptions {
    /// Filter conditions. `None` means the field is absent entirely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Vec<FilterField>>,
    /// Default sort order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Vec<SortField>>,
    /// Default result limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    /// Hard cap on the result limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_limit: Option<u64>,
    /// Response cache lifetime in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_seconds: Option<u64>,
}

impl QueryOptions {
    /// Create empty options (no filter, no sort, no limits).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the baseline filter list.
    pub fn with_filter(mut self, filter: Vec<FilterField>) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Set the default sort order.
    pub fn with_sort(mut self, sort: Vec<SortField>) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Set the default result limit.
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the hard cap on the result limit.
    pub fn with_max_limit(mut self, max_limit: u64) -> Self {
        self.max_limit = Some(max_limit);
        self
    }

    /// Set the response cache lifetime.
    pub fn with_cache_seconds(mut self, cache_seconds: u64) -> Self {
        self.cache_seconds = Some(cache_seconds);
        self
    }

    /// Returns a resolved copy whose filter list is the baseline filters
    /// followed by `extra`, in that order.
    ///
    /// When both the baseline list and `extra` are empty the filter field
    /// stays exactly as it was (absent stays absent).
    pub fn resolve_with(&self, extra: &[FilterField]) -> Self {
        let mut resolved = self.clone();

        let mut combined = self.filter.clone().unwrap_or_default();
        combined.extend_from_slice(extra);

        if !combined.is_empty() {
            resolved.filter = Some(combined);
        }

        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_keeps_filter_absent_when_empty() {
        let baseline = QueryOptions::new().with_limit(10);
        let resolved = baseline.resolve_with(&[]);
        assert_eq!(resolved, baseline);
        assert!(resolved.filter.is_none());
    }

    #[test]
    fn test_resolve_appends_after_baseline() {
        let baseline = QueryOptions::new().with_filter(vec![FilterField::eq_bool("deleted", false)]);
        let resolved = baseline.resolve_with(&[FilterField::eq_int("id", 3)]);

        let filter = resolved.filter.unwrap();
        assert_eq!(filter.len(), 2);
        assert_eq!(filter[0].field, "deleted");
        assert_eq!(filter[1].field, "id");
        // baseline untouched
        assert_eq!(baseline.filter.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_resolve_carries_non_filter_fields_untouched() {
        let baseline = QueryOptions::new()
            .with_limit(25)
            .with_max_limit(100)
            .with_cache_seconds(60);

        let resolved = baseline.resolve_with(&[FilterField::eq_int("id", 1)]);

        assert_eq!(resolved.limit, Some(25));
        assert_eq!(resolved.max_limit, Some(100));
        assert_eq!(resolved.cache_seconds, Some(60));
    }

    #[test]
    fn test_resolve_sets_filter_from_extra_only() {
        let baseline = QueryOptions::new();
        let resolved = baseline.resolve_with(&[FilterField::eq("slug", "intro")]);
        assert_eq!(resolved.filter.unwrap().len(), 1);
    }
}
