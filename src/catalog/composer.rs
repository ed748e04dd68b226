use super::Work;
use chrono::{Datelike, NaiveDate};
use crate::query::eq_ignore_case;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Period {
    Renaissance,
    Baroque,
    Classical,
    #[serde(rename = "Early Romantic")]
    EarlyRomantic,
    Romantic,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Composer {
    pub id: String,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub birth_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_place: Option<String>,
    pub death_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_place: Option<String>,
    pub nationality: String,
    pub period: Period,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_works: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
}

impl Composer {
    pub fn birth_year(&self) -> i32 {
        self.birth_date.year()
    }

    pub fn death_year(&self) -> i32 {
        self.death_date.year()
    }

    /// Whether `year` falls within the composer's lifetime, bounds included.
    pub fn lived_in(&self, year: i32) -> bool {
        year >= self.birth_year() && year <= self.death_year()
    }

    /// Whether a free-text composer name (as found on recordings) refers to
    /// this composer: its id, full name or last name, ignoring case.
    pub fn is_named(&self, name: &str) -> bool {
        let name = name.trim();
        eq_ignore_case(&self.id, name)
            || eq_ignore_case(&self.full_name, name)
            || self
                .last_name
                .as_deref()
                .is_some_and(|last| eq_ignore_case(last, name))
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSystem {
    pub name: String,
    pub abbreviation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub name: String,
    #[serde(
        default,
        alias = "bwvRange",
        skip_serializing_if = "Option::is_none"
    )]
    pub catalog_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

/// One composer's source document, as found on disk.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ComposerCatalogue {
    pub composer: Composer,
    pub catalog_system: CatalogSystem,
    #[serde(default)]
    pub categories: BTreeMap<String, Category>,
    #[serde(default)]
    pub works: Vec<Work>,
}

/// A composer with its catalogue metadata, minus the works (which live in the
/// flattened works collection of the snapshot).
#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ComposerEntry {
    #[serde(flatten)]
    pub composer: Composer,
    pub catalog_system: CatalogSystem,
    pub categories: BTreeMap<String, Category>,
}

impl ComposerCatalogue {
    /// Splits the document into its composer entry and its works, stamping
    /// every work with the composer id.
    pub fn split(self) -> (ComposerEntry, Vec<Work>) {
        let ComposerCatalogue {
            composer,
            catalog_system,
            categories,
            works,
        } = self;
        let works = works
            .into_iter()
            .map(|mut work| {
                work.composer_id = composer.id.clone();
                work
            })
            .collect();
        (
            ComposerEntry {
                composer,
                catalog_system,
                categories,
            },
            works,
        )
    }
}
