//! JSON envelopes shared by all endpoints.

use crate::catalog::{ComposerEntry, Period};
use crate::query::PageResult;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Serialize)]
pub struct ItemResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ItemResponse<T> {
    pub fn new(data: T) -> Self {
        ItemResponse {
            success: true,
            data,
        }
    }
}

/// An unpaginated collection.
#[derive(Serialize)]
pub struct CollectionResponse<T> {
    pub success: bool,
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> CollectionResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        CollectionResponse {
            success: true,
            count: data.len(),
            data,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub count: usize,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn from_page<'a, U, F>(page: PageResult<'a, U>, view: F) -> Self
    where
        F: Fn(&'a U) -> T,
    {
        ListResponse {
            success: true,
            query: None,
            count: page.count(),
            total: page.total_matched,
            page: page.page,
            page_size: page.page_size,
            total_pages: page.total_pages,
            data: page.items.into_iter().map(view).collect(),
        }
    }

    pub fn with_query(mut self, query: &str) -> Self {
        self.query = Some(query.to_owned());
        self
    }
}

/// The compact composer shape used in listings and search results.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposerSummary<'a> {
    pub id: &'a str,
    pub full_name: &'a str,
    pub birth_date: NaiveDate,
    pub death_date: NaiveDate,
    pub nationality: &'a str,
    pub period: Period,
    pub catalog_system: &'a str,
    pub total_works: usize,
}

impl<'a> ComposerSummary<'a> {
    pub fn new(entry: &'a ComposerEntry, total_works: usize) -> Self {
        let composer = &entry.composer;
        ComposerSummary {
            id: &composer.id,
            full_name: &composer.full_name,
            birth_date: composer.birth_date,
            death_date: composer.death_date,
            nationality: &composer.nationality,
            period: composer.period,
            catalog_system: &entry.catalog_system.abbreviation,
            total_works,
        }
    }
}
