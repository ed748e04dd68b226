//! Aggregations over catalogue collections. Everything here is pure.

mod periods;

pub use periods::{composition_periods, YearPeriod};

use crate::catalog::{ComposerEntry, Recording, Snapshot, Work};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Mean of the present ratings rounded to 2 decimals, 0 when nothing is rated.
pub fn average_rating<'a, I>(recordings: I) -> f64
where
    I: IntoIterator<Item = &'a Recording>,
{
    let (sum, count) = recordings
        .into_iter()
        .filter_map(Recording::rating)
        .fold((0.0, 0usize), |(sum, count), r| (sum + r, count + 1));
    if count == 0 {
        return 0.0;
    }
    (sum / count as f64 * 100.0).round() / 100.0
}

pub fn count_by_category<'a, I>(works: I) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = &'a Work>,
{
    let mut counts = BTreeMap::new();
    for work in works {
        *counts.entry(work.category.clone()).or_insert(0) += 1;
    }
    counts
}

pub fn decade_of(year: i32) -> i32 {
    year.div_euclid(10) * 10
}

pub fn count_by_decade<'a, I>(recordings: I) -> BTreeMap<i32, usize>
where
    I: IntoIterator<Item = &'a Recording>,
{
    let mut counts = BTreeMap::new();
    for recording in recordings {
        *counts.entry(decade_of(recording.year())).or_insert(0) += 1;
    }
    counts
}

/// Distinct soloist, conductor and ensemble names. Entries of the `soloists`
/// list are not counted.
pub fn unique_performer_count<'a, I>(recordings: I) -> usize
where
    I: IntoIterator<Item = &'a Recording>,
{
    let mut names = HashSet::new();
    for recording in recordings {
        let p = &recording.performers;
        names.extend(
            [&p.soloist, &p.conductor, &p.ensemble]
                .into_iter()
                .filter_map(|name| name.as_deref()),
        );
    }
    names.len()
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueOverview {
    pub composers: usize,
    pub works: usize,
    pub recordings: usize,
    pub categories: usize,
    pub streaming_platforms: usize,
    pub unique_performers: usize,
    pub average_rating: f64,
    pub works_by_category: BTreeMap<String, usize>,
    pub recordings_by_decade: BTreeMap<i32, usize>,
}

pub fn catalogue_overview(snapshot: &Snapshot) -> CatalogueOverview {
    CatalogueOverview {
        composers: snapshot.composers().len(),
        works: snapshot.works().len(),
        recordings: snapshot.recordings().len(),
        categories: snapshot.categories_count(),
        streaming_platforms: snapshot.platforms().len(),
        unique_performers: unique_performer_count(snapshot.recordings()),
        average_rating: average_rating(snapshot.recordings()),
        works_by_category: count_by_category(snapshot.works()),
        recordings_by_decade: count_by_decade(snapshot.recordings()),
    }
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComposerOverview {
    pub composer_id: String,
    pub full_name: String,
    pub works: usize,
    pub recordings: usize,
    pub categories: usize,
    pub dated_works: usize,
    pub earliest_year: Option<i32>,
    pub latest_year: Option<i32>,
    pub unique_performers: usize,
    pub average_rating: f64,
    pub works_by_category: BTreeMap<String, usize>,
    pub recordings_by_decade: BTreeMap<i32, usize>,
}

pub fn composer_overview(
    entry: &ComposerEntry,
    works: &[&Work],
    recordings: &[&Recording],
) -> ComposerOverview {
    let years: Vec<i32> = works.iter().filter_map(|w| w.year_composed).collect();
    ComposerOverview {
        composer_id: entry.composer.id.clone(),
        full_name: entry.composer.full_name.clone(),
        works: works.len(),
        recordings: recordings.len(),
        categories: entry.categories.len(),
        dated_works: years.len(),
        earliest_year: years.iter().min().copied(),
        latest_year: years.iter().max().copied(),
        unique_performers: unique_performer_count(recordings.iter().copied()),
        average_rating: average_rating(recordings.iter().copied()),
        works_by_category: count_by_category(works.iter().copied()),
        recordings_by_decade: count_by_decade(recordings.iter().copied()),
    }
}
