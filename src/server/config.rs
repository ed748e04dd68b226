use super::RequestsLoggingLevel;
use crate::config::QuerySettings;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub port: u16,
    /// Served under `/static` when set.
    pub assets_dir: Option<PathBuf>,
    pub query: QuerySettings,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            port: 3000,
            assets_dir: None,
            query: QuerySettings::default(),
        }
    }
}
