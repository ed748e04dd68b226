use axum::extract::FromRef;

use crate::cache::CatalogCache;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedCatalogCache = Arc<CatalogCache>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub cache: GuardedCatalogCache,
    pub hash: String,
}

impl ServerState {
    pub fn new(config: ServerConfig, cache: GuardedCatalogCache) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            cache,
            hash: env!("GIT_HASH").to_owned(),
        }
    }
}

impl FromRef<ServerState> for GuardedCatalogCache {
    fn from_ref(input: &ServerState) -> Self {
        input.cache.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
