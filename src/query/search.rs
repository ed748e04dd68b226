use super::QueryError;

/// A normalized, lowercase free-text search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// For endpoints that cannot run without a term: empty or blank input is
    /// rejected.
    pub fn required(raw: Option<&str>) -> Result<SearchTerm, QueryError> {
        Self::optional(raw)
            .ok_or_else(|| QueryError::InvalidQuery("Search query required".to_owned()))
    }

    /// For filtering: empty or blank input means "no search".
    pub fn optional(raw: Option<&str>) -> Option<SearchTerm> {
        let trimmed = raw?.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(SearchTerm(trimmed.to_lowercase()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn found_in(&self, haystack: &str) -> bool {
        contains_ignore_case(haystack, &self.0)
    }
}

pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// `needle` must already be lowercase.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
