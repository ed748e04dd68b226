use crate::catalog::{load_catalog, CatalogError, Snapshot};
use std::path::{Path, PathBuf};

/// Something the cache can (re)load a whole catalogue snapshot from.
pub trait CatalogSource: Send + Sync {
    fn load(&self) -> Result<Snapshot, CatalogError>;

    /// Human readable description, used in logs.
    fn describe(&self) -> String;
}

/// Loads the catalogue from a data directory of JSON files.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new<P: AsRef<Path>>(dir: P) -> DirectorySource {
        DirectorySource {
            dir: dir.as_ref().to_owned(),
        }
    }
}

impl CatalogSource for DirectorySource {
    fn load(&self) -> Result<Snapshot, CatalogError> {
        load_catalog(&self.dir).map(|loaded| loaded.snapshot)
    }

    fn describe(&self) -> String {
        format!("directory {}", self.dir.display())
    }
}
