//! Composers Catalogue Server Library
//!
//! Read-only catalogue of composers, their works and recordings, served as a
//! JSON API. Modules are public for the binary and the end-to-end tests.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod query;
pub mod server;
pub mod stats;

// Re-export commonly used types for convenience
pub use cache::{CacheConfig, CatalogCache, DirectorySource};
pub use catalog::{load_catalog, Snapshot};
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
