use super::{ComposerEntry, Recording, Work};
use crate::query::eq_ignore_case;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};

/// Immutable, fully-loaded copy of every catalogue collection.
#[derive(Debug)]
pub struct Snapshot {
    composers: Vec<ComposerEntry>,
    works: Vec<Work>,
    recordings: Vec<Recording>,
    platforms: BTreeMap<String, Value>,
    loaded_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(
        composers: Vec<ComposerEntry>,
        works: Vec<Work>,
        recordings: Vec<Recording>,
        platforms: BTreeMap<String, Value>,
    ) -> Snapshot {
        Snapshot {
            composers,
            works,
            recordings,
            platforms,
            loaded_at: Utc::now(),
        }
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn composers(&self) -> &[ComposerEntry] {
        &self.composers
    }

    pub fn composer(&self, id: &str) -> Option<&ComposerEntry> {
        self.composers
            .iter()
            .find(|c| eq_ignore_case(&c.composer.id, id))
    }

    pub fn works(&self) -> &[Work] {
        &self.works
    }

    /// First work with `catalog_id`, in load order. Catalogue ids are only
    /// unique within one composer's catalogue, see [`Snapshot::work_of`].
    pub fn work(&self, catalog_id: &str) -> Option<&Work> {
        self.works.iter().find(|w| w.catalog_id == catalog_id)
    }

    pub fn work_of(&self, composer_id: &str, catalog_id: &str) -> Option<&Work> {
        self.works
            .iter()
            .find(|w| w.catalog_id == catalog_id && eq_ignore_case(&w.composer_id, composer_id))
    }

    /// Works of a single composer, in catalogue order.
    pub fn works_of<'a>(&'a self, composer_id: &'a str) -> impl Iterator<Item = &'a Work> {
        self.works
            .iter()
            .filter(move |w| eq_ignore_case(&w.composer_id, composer_id))
    }

    pub fn recordings(&self) -> &[Recording] {
        &self.recordings
    }

    pub fn recording(&self, id: &str) -> Option<&Recording> {
        self.recordings.iter().find(|r| r.id == id)
    }

    /// Recordings of works that belong to the given composer's catalogue.
    /// When another catalogue uses the same catalogue id, the recording's
    /// `composer` name decides which composer it belongs to.
    pub fn recordings_of(&self, composer_id: &str) -> Vec<&Recording> {
        let Some(entry) = self.composer(composer_id) else {
            return vec![];
        };
        let own_id = entry.composer.id.as_str();
        let catalog_ids: HashSet<&str> = self
            .works_of(own_id)
            .map(|w| w.catalog_id.as_str())
            .collect();
        let shared: HashSet<&str> = self
            .works
            .iter()
            .filter(|w| !eq_ignore_case(&w.composer_id, own_id))
            .map(|w| w.catalog_id.as_str())
            .filter(|id| catalog_ids.contains(id))
            .collect();
        self.recordings
            .iter()
            .filter(|r| {
                let work_id = r.work_id.as_str();
                catalog_ids.contains(work_id)
                    && (!shared.contains(work_id) || entry.composer.is_named(&r.composer))
            })
            .collect()
    }

    pub fn platforms(&self) -> &BTreeMap<String, Value> {
        &self.platforms
    }

    pub fn categories_count(&self) -> usize {
        self.composers.iter().map(|c| c.categories.len()).sum()
    }
}
