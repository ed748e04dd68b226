//! Catalogue loading from a data directory of JSON documents.

use super::{ComposerCatalogue, ComposerEntry, Recording, RecordingsDocument, Snapshot, Work};
use regex::Regex;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

pub const RECORDINGS_FILE_NAME: &str = "recordings-database.json";

const MIN_RECORDING_YEAR: i32 = 1900;
const MAX_RECORDING_YEAR: i32 = 2030;
const MAX_RATING: f64 = 5.0;

/// Errors that prevent a catalogue from being loaded at all.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid catalogue layout: {0}")]
    Layout(String),
}

/// Non-fatal integrity issues found while loading.
#[derive(Debug, Clone, PartialEq)]
pub enum Problem {
    LifespanInverted {
        composer_id: String,
        birth_year: i32,
        death_year: i32,
    },
    DuplicateCatalogId {
        composer_id: String,
        catalog_id: String,
    },
    YearOutsideLifetime {
        composer_id: String,
        catalog_id: String,
        year: i32,
    },
    UnknownCategory {
        composer_id: String,
        catalog_id: String,
        category: String,
    },
    DuplicateRecordingId(String),
    RecordingYearOutOfRange {
        recording_id: String,
        year: i32,
    },
    RatingOutOfRange {
        recording_id: String,
        rating: f64,
    },
    UnknownWork {
        recording_id: String,
        work_id: String,
    },
    NoPerformers(String),
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::LifespanInverted {
                composer_id,
                birth_year,
                death_year,
            } => write!(
                f,
                "Composer '{}' is born in {} but died in {}",
                composer_id, birth_year, death_year
            ),
            Problem::DuplicateCatalogId {
                composer_id,
                catalog_id,
            } => write!(
                f,
                "Catalogue of '{}' lists '{}' more than once",
                composer_id, catalog_id
            ),
            Problem::YearOutsideLifetime {
                composer_id,
                catalog_id,
                year,
            } => write!(
                f,
                "Work '{}' of '{}' is dated {}, outside the composer's lifetime",
                catalog_id, composer_id, year
            ),
            Problem::UnknownCategory {
                composer_id,
                catalog_id,
                category,
            } => write!(
                f,
                "Work '{}' of '{}' has category '{}' which is not in the categories map",
                catalog_id, composer_id, category
            ),
            Problem::DuplicateRecordingId(id) => {
                write!(f, "Recording id '{}' is used more than once", id)
            }
            Problem::RecordingYearOutOfRange { recording_id, year } => write!(
                f,
                "Recording '{}' has year {}, expected {}-{}",
                recording_id, year, MIN_RECORDING_YEAR, MAX_RECORDING_YEAR
            ),
            Problem::RatingOutOfRange {
                recording_id,
                rating,
            } => write!(
                f,
                "Recording '{}' has rating {}, expected 0-{}",
                recording_id, rating, MAX_RATING
            ),
            Problem::UnknownWork {
                recording_id,
                work_id,
            } => write!(
                f,
                "Recording '{}' references unknown work '{}'",
                recording_id, work_id
            ),
            Problem::NoPerformers(id) => write!(f, "Recording '{}' lists no performers", id),
        }
    }
}

#[derive(Debug)]
pub struct LoadedCatalog {
    pub snapshot: Snapshot,
    pub problems: Vec<Problem>,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CatalogError::Parse {
        path: path.to_owned(),
        source,
    })
}

fn parse_composer_catalogues(dir: &Path) -> Result<Vec<ComposerCatalogue>, CatalogError> {
    let catalogue_filename_regex = Regex::new(r"^([a-z0-9_]+)-[a-z0-9_]+-catalogue\.json$")
        .expect("Invalid Regex, this should be fixed at compile time.");

    let io_error = |source| CatalogError::Io {
        path: dir.to_owned(),
        source,
    };
    let mut matching: Vec<(String, PathBuf)> = vec![];
    for dir_entry_result in std::fs::read_dir(dir).map_err(io_error)? {
        let path = dir_entry_result.map_err(io_error)?.path();
        let filename = match path.file_name() {
            Some(name) => name.to_string_lossy().to_string(),
            None => continue,
        };
        if let Some(captures) = catalogue_filename_regex.captures(&filename) {
            matching.push((captures[1].to_owned(), path));
        }
    }
    matching.sort_by(|a, b| a.1.cmp(&b.1));

    if matching.is_empty() {
        return Err(CatalogError::Layout(format!(
            "No composer catalogue found in {}",
            dir.display()
        )));
    }

    let mut out = Vec::with_capacity(matching.len());
    for (filename_composer_id, path) in matching {
        let catalogue: ComposerCatalogue = read_json(&path)?;
        if catalogue.composer.id != filename_composer_id {
            return Err(CatalogError::Layout(format!(
                "File {} implies composer id '{}', but the parsed composer has id '{}'",
                path.display(),
                filename_composer_id,
                catalogue.composer.id
            )));
        }
        out.push(catalogue);
    }
    Ok(out)
}

fn check_catalogue(entry: &ComposerEntry, works: &[Work]) -> Vec<Problem> {
    let mut problems = vec![];
    let composer = &entry.composer;

    if composer.birth_year() >= composer.death_year() {
        problems.push(Problem::LifespanInverted {
            composer_id: composer.id.clone(),
            birth_year: composer.birth_year(),
            death_year: composer.death_year(),
        });
    }

    let mut seen = HashSet::new();
    for work in works {
        if !seen.insert(work.catalog_id.as_str()) {
            problems.push(Problem::DuplicateCatalogId {
                composer_id: composer.id.clone(),
                catalog_id: work.catalog_id.clone(),
            });
        }
        if let Some(year) = work.year_composed {
            if !composer.lived_in(year) {
                problems.push(Problem::YearOutsideLifetime {
                    composer_id: composer.id.clone(),
                    catalog_id: work.catalog_id.clone(),
                    year,
                });
            }
        }
        if !entry.categories.contains_key(&work.category) {
            problems.push(Problem::UnknownCategory {
                composer_id: composer.id.clone(),
                catalog_id: work.catalog_id.clone(),
                category: work.category.clone(),
            });
        }
    }
    problems
}

fn check_recordings(recordings: &[Recording], works: &[Work]) -> Vec<Problem> {
    let mut problems = vec![];
    let known_works: HashSet<&str> = works.iter().map(|w| w.catalog_id.as_str()).collect();
    let mut seen = HashSet::new();

    for recording in recordings {
        if !seen.insert(recording.id.as_str()) {
            problems.push(Problem::DuplicateRecordingId(recording.id.clone()));
        }
        let year = recording.year();
        if !(MIN_RECORDING_YEAR..=MAX_RECORDING_YEAR).contains(&year) {
            problems.push(Problem::RecordingYearOutOfRange {
                recording_id: recording.id.clone(),
                year,
            });
        }
        if let Some(rating) = recording.rating() {
            if !(0.0..=MAX_RATING).contains(&rating) {
                problems.push(Problem::RatingOutOfRange {
                    recording_id: recording.id.clone(),
                    rating,
                });
            }
        }
        if !known_works.contains(recording.work_id.as_str()) {
            problems.push(Problem::UnknownWork {
                recording_id: recording.id.clone(),
                work_id: recording.work_id.clone(),
            });
        }
        if recording.performers.is_empty() {
            problems.push(Problem::NoPerformers(recording.id.clone()));
        }
    }
    problems
}

/// Reads every composer catalogue and the recordings document found in `dir`.
///
/// Fails on unreadable or malformed files. Integrity issues that do not stop
/// the catalogue from being served are returned as problems.
pub fn load_catalog<P: AsRef<Path>>(dir: P) -> Result<LoadedCatalog, CatalogError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(CatalogError::Layout(format!(
            "{} is not a valid directory.",
            dir.display()
        )));
    }

    let catalogues = parse_composer_catalogues(dir)?;
    let recordings_doc: RecordingsDocument = read_json(&dir.join(RECORDINGS_FILE_NAME))?;

    let mut problems = vec![];
    let mut composers = Vec::with_capacity(catalogues.len());
    let mut works = vec![];
    for catalogue in catalogues {
        let (entry, mut composer_works) = catalogue.split();
        if cfg!(not(feature = "no_checks")) {
            problems.append(&mut check_catalogue(&entry, &composer_works));
        }
        composers.push(entry);
        works.append(&mut composer_works);
    }

    let RecordingsDocument {
        recordings,
        platforms,
    } = recordings_doc;
    if cfg!(not(feature = "no_checks")) {
        problems.append(&mut check_recordings(&recordings, &works));
    }

    if problems.is_empty() {
        info!("Catalogue checked, no issues found.");
    } else {
        warn!("Found {} non-fatal catalogue problems:", problems.len());
        for problem in problems.iter() {
            warn!("- {}", problem);
        }
    }
    info!(
        "Catalogue has: {} composers, {} works, {} recordings",
        composers.len(),
        works.len(),
        recordings.len()
    );

    Ok(LoadedCatalog {
        snapshot: Snapshot::new(composers, works, recordings, platforms),
        problems,
    })
}
