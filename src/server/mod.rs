mod composer_routes;
pub mod config;
mod error;
mod http_layers;
mod params;
mod recording_routes;
mod responses;
mod search;
pub mod server;
pub mod state;
mod stats_routes;
mod work_routes;

pub use config::ServerConfig;
pub use error::ApiError;
pub use http_layers::*;
pub use server::{make_app, run_server};
