use super::search::eq_ignore_case;
use super::{within_years, CollectionQuery, SearchTerm};
use crate::catalog::Recording;
use serde::Deserialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordingSort {
    /// Order of the recordings document.
    #[default]
    Default,
    Year,
    /// Best rated first, unrated recordings last.
    Rating,
    Work,
}

/// Recording year buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RecordingEra {
    #[serde(rename = "historical")]
    Historical,
    #[serde(rename = "1980s")]
    Eighties,
    #[serde(rename = "1990s")]
    Nineties,
    #[serde(rename = "2000s")]
    Noughties,
    #[serde(rename = "2010s")]
    Tens,
    #[serde(rename = "2020s")]
    Twenties,
}

impl RecordingEra {
    pub fn contains(&self, year: i32) -> bool {
        match self {
            RecordingEra::Historical => year < 1980,
            RecordingEra::Eighties => (1980..1990).contains(&year),
            RecordingEra::Nineties => (1990..2000).contains(&year),
            RecordingEra::Noughties => (2000..2010).contains(&year),
            RecordingEra::Tens => (2010..2020).contains(&year),
            RecordingEra::Twenties => year >= 2020,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingQuery {
    pub work_id: Option<String>,
    pub composer: Option<String>,
    pub platform: Option<String>,
    pub year: Option<i32>,
    pub performer: Option<SearchTerm>,
    pub search: Option<SearchTerm>,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
    pub era: Option<RecordingEra>,
    pub sort: RecordingSort,
}

impl CollectionQuery for RecordingQuery {
    type Item = Recording;

    fn matches(&self, recording: &Recording) -> bool {
        let year = recording.year();
        self.work_id
            .as_deref()
            .map_or(true, |id| eq_ignore_case(&recording.work_id, id))
            && self
                .composer
                .as_deref()
                .map_or(true, |c| eq_ignore_case(&recording.composer, c))
            && self
                .platform
                .as_deref()
                .map_or(true, |p| recording.is_on_platform(p))
            && self.year.map_or(true, |y| year == y)
            && self.performer.as_ref().map_or(true, |term| {
                recording.performers.names().any(|name| term.found_in(name))
            })
            && self.search.as_ref().map_or(true, |term| {
                term.found_in(&recording.work_title)
                    || recording.performers.names().any(|name| term.found_in(name))
            })
            && within_years(Some(year), self.year_from, self.year_to)
            && self.era.map_or(true, |era| era.contains(year))
    }

    fn compare(&self, a: &Recording, b: &Recording) -> Ordering {
        match self.sort {
            RecordingSort::Default => Ordering::Equal,
            RecordingSort::Year => a.year().cmp(&b.year()),
            RecordingSort::Rating => match (a.rating(), b.rating()) {
                (Some(x), Some(y)) => y.total_cmp(&x),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            RecordingSort::Work => a.work_id.cmp(&b.work_id),
        }
    }
}
