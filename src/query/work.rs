use super::search::{contains_ignore_case, eq_ignore_case};
use super::{within_years, CollectionQuery, SearchTerm};
use crate::catalog::Work;
use serde::Deserialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkSort {
    #[default]
    Catalog,
    Year,
    Title,
}

#[derive(Debug, Clone, Default)]
pub struct WorkQuery {
    pub composer: Option<String>,
    pub category: Option<String>,
    pub key: Option<String>,
    pub year: Option<i32>,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
    pub search: Option<SearchTerm>,
    pub instrumentation: Option<String>,
    pub sort: WorkSort,
}

fn equals(filter: &Option<String>, value: &str) -> bool {
    filter.as_deref().map_or(true, |f| eq_ignore_case(value, f))
}

impl CollectionQuery for WorkQuery {
    type Item = Work;

    fn matches(&self, work: &Work) -> bool {
        equals(&self.composer, &work.composer_id)
            && equals(&self.category, &work.category)
            && self.key.as_deref().map_or(true, |k| {
                work.key.as_deref().is_some_and(|wk| eq_ignore_case(wk, k))
            })
            && self.year.map_or(true, |y| work.year_composed == Some(y))
            && within_years(work.year_composed, self.year_from, self.year_to)
            && self.search.as_ref().map_or(true, |term| {
                term.found_in(&work.title)
                    || work
                        .localized_title
                        .as_deref()
                        .is_some_and(|t| term.found_in(t))
                    || term.found_in(&work.catalog_id)
                    || term.found_in(&work.category)
            })
            && self.instrumentation.as_deref().map_or(true, |i| {
                let needle = i.to_lowercase();
                work.instrumentation
                    .as_deref()
                    .is_some_and(|wi| contains_ignore_case(wi, &needle))
            })
    }

    fn compare(&self, a: &Work, b: &Work) -> Ordering {
        match self.sort {
            WorkSort::Catalog => a.catalog_id.cmp(&b.catalog_id),
            WorkSort::Year => a.sort_year().cmp(&b.sort_year()),
            WorkSort::Title => a.title.cmp(&b.title),
        }
    }
}
