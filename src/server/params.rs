//! Typed request parameters. Unknown keys are rejected.

use crate::query::{
    PageLimits, Pagination, QueryError, RecordingEra, RecordingQuery, RecordingSort, SearchTerm,
    WorkQuery, WorkSort,
};
use serde::{de, Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Numeric query-string value where `key=` means the key is absent.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WorkParams {
    pub composer: Option<String>,
    #[serde(alias = "genre")]
    pub category: Option<String>,
    pub key: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub year_from: Option<i32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub year_to: Option<i32>,
    pub instrumentation: Option<String>,
    pub q: Option<String>,
    pub sort: Option<WorkSort>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<i64>,
    #[serde(default, alias = "limit", deserialize_with = "empty_as_none")]
    pub page_size: Option<i64>,
}

impl WorkParams {
    pub fn into_query(self, limits: PageLimits) -> Result<(WorkQuery, Pagination), QueryError> {
        let pagination = Pagination::new(self.page, self.page_size, limits)?;
        let query = WorkQuery {
            composer: non_empty(self.composer),
            category: non_empty(self.category),
            key: non_empty(self.key),
            year: self.year,
            year_from: self.year_from,
            year_to: self.year_to,
            search: SearchTerm::optional(self.q.as_deref()),
            instrumentation: non_empty(self.instrumentation),
            sort: self.sort.unwrap_or_default(),
        };
        Ok((query, pagination))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RecordingParams {
    #[serde(alias = "workId")]
    pub work: Option<String>,
    pub composer: Option<String>,
    pub performer: Option<String>,
    pub platform: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub year_from: Option<i32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub year_to: Option<i32>,
    pub era: Option<RecordingEra>,
    pub q: Option<String>,
    pub sort: Option<RecordingSort>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<i64>,
    #[serde(default, alias = "limit", deserialize_with = "empty_as_none")]
    pub page_size: Option<i64>,
}

impl RecordingParams {
    pub fn into_query(
        self,
        limits: PageLimits,
    ) -> Result<(RecordingQuery, Pagination), QueryError> {
        let pagination = Pagination::new(self.page, self.page_size, limits)?;
        let query = RecordingQuery {
            work_id: non_empty(self.work),
            composer: non_empty(self.composer),
            platform: non_empty(self.platform),
            year: self.year,
            performer: SearchTerm::optional(self.performer.as_deref()),
            search: SearchTerm::optional(self.q.as_deref()),
            year_from: self.year_from,
            year_to: self.year_to,
            era: self.era,
            sort: self.sort.unwrap_or_default(),
        };
        Ok((query, pagination))
    }
}

/// Catalogue ids repeat across composers, `composer` picks one.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkLookupParams {
    pub composer: Option<String>,
}

impl WorkLookupParams {
    pub fn composer(&self) -> Option<&str> {
        self.composer
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

/// Keyword search: `q` is mandatory.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SearchParams {
    pub q: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<i64>,
    #[serde(default, alias = "pageSize", deserialize_with = "empty_as_none")]
    pub limit: Option<i64>,
}

impl SearchParams {
    pub fn into_term(self, limits: PageLimits) -> Result<(SearchTerm, Pagination), QueryError> {
        let term = SearchTerm::required(self.q.as_deref())?;
        let pagination = Pagination::new(self.page, self.limit, limits)?;
        Ok((term, pagination))
    }
}

/// Body of the advanced works search.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AdvancedSearchBody {
    pub composer: Option<String>,
    #[serde(alias = "category")]
    pub genre: Option<String>,
    pub key: Option<String>,
    pub year: Option<i32>,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
    pub instrumentation: Option<String>,
    pub q: Option<String>,
    pub sort: Option<WorkSort>,
    pub page: Option<i64>,
    #[serde(alias = "pageSize")]
    pub limit: Option<i64>,
}

impl From<AdvancedSearchBody> for WorkParams {
    fn from(body: AdvancedSearchBody) -> Self {
        WorkParams {
            composer: body.composer,
            category: body.genre,
            key: body.key,
            year: body.year,
            year_from: body.year_from,
            year_to: body.year_to,
            instrumentation: body.instrumentation,
            q: body.q,
            sort: body.sort,
            page: body.page,
            page_size: body.limit,
        }
    }
}
