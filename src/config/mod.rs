mod file_config;

pub use file_config::{FileConfig, QueryConfig};

use crate::cache::{CacheConfig, DEFAULT_FRESHNESS};
use crate::query::{PageLimits, DEFAULT_MAX_PAGE_SIZE};
use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;
use std::time::Duration;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub data_dir: Option<PathBuf>,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub cache_freshness_sec: u64,
    pub assets_dir: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            port: 3000,
            logging_level: RequestsLoggingLevel::default(),
            cache_freshness_sec: DEFAULT_FRESHNESS.as_secs(),
            assets_dir: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub cache_freshness_sec: u64,
    pub assets_dir: Option<PathBuf>,
    pub query: QuerySettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySettings {
    pub works_page_size: usize,
    pub recordings_page_size: usize,
    pub max_page_size: usize,
    pub search_limit: usize,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            works_page_size: PageLimits::WORKS.default_size,
            recordings_page_size: PageLimits::RECORDINGS.default_size,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            search_limit: 20,
        }
    }
}

impl QuerySettings {
    pub fn works_limits(&self) -> PageLimits {
        PageLimits {
            default_size: self.works_page_size,
            max_size: self.max_page_size,
        }
    }

    pub fn recordings_limits(&self) -> PageLimits {
        PageLimits {
            default_size: self.recordings_page_size,
            max_size: self.max_page_size,
        }
    }

    pub fn search_limits(&self) -> PageLimits {
        PageLimits {
            default_size: self.search_limit,
            max_size: self.max_page_size,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.max_page_size == 0 {
            bail!("max_page_size must be positive");
        }
        for (name, value) in [
            ("works_page_size", self.works_page_size),
            ("recordings_page_size", self.recordings_page_size),
            ("search_limit", self.search_limit),
        ] {
            if value == 0 || value > self.max_page_size {
                bail!(
                    "{} must be between 1 and max_page_size ({}), got {}",
                    name,
                    self.max_page_size,
                    value
                );
            }
        }
        Ok(())
    }
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let data_dir = file
            .data_dir
            .map(PathBuf::from)
            .or_else(|| cli.data_dir.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("data_dir must be specified on the command line or in config file")
            })?;

        if !data_dir.exists() {
            bail!("Data directory does not exist: {:?}", data_dir);
        }
        if !data_dir.is_dir() {
            bail!("data_dir is not a directory: {:?}", data_dir);
        }

        let port = file.port.unwrap_or(cli.port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let cache_freshness_sec = file
            .cache_freshness_sec
            .unwrap_or(cli.cache_freshness_sec);

        let assets_dir = file
            .assets_dir
            .map(PathBuf::from)
            .or_else(|| cli.assets_dir.clone());

        let defaults = QuerySettings::default();
        let query_file = file.query.unwrap_or_default();
        let query = QuerySettings {
            works_page_size: query_file
                .works_page_size
                .unwrap_or(defaults.works_page_size),
            recordings_page_size: query_file
                .recordings_page_size
                .unwrap_or(defaults.recordings_page_size),
            max_page_size: query_file.max_page_size.unwrap_or(defaults.max_page_size),
            search_limit: query_file.search_limit.unwrap_or(defaults.search_limit),
        };
        query.validate()?;

        Ok(Self {
            data_dir,
            port,
            logging_level,
            cache_freshness_sec,
            assets_dir,
            query,
        })
    }

    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig {
            freshness: Duration::from_secs(self.cache_freshness_sec),
        }
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
