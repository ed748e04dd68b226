use anyhow::{Context, Result};
use std::time::Duration;

use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::info;

use axum::{
    extract::State,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;

use super::composer_routes::make_composer_routes;
use super::recording_routes::make_recording_routes;
use super::search::make_search_routes;
use super::state::{GuardedCatalogCache, ServerState};
use super::stats_routes::make_stats_routes;
use super::work_routes::make_work_routes;
use super::{log_requests, ApiError, ServerConfig};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ServiceIndex {
    pub success: bool,
    pub name: &'static str,
    pub version: &'static str,
    pub uptime: String,
    pub hash: String,
    pub catalogue_loaded_at: Option<DateTime<Utc>>,
    pub endpoints: serde_json::Value,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

fn endpoint_map() -> serde_json::Value {
    json!({
        "composers": {
            "list": "GET /api/composers",
            "detail": "GET /api/composers/{id}",
            "works": "GET /api/composers/{id}/works",
            "recordings": "GET /api/composers/{id}/recordings",
            "periods": "GET /api/composers/{id}/periods"
        },
        "works": {
            "list": "GET /api/works",
            "detail": "GET /api/works/{catalogId}",
            "search": "GET /api/works/search?q=query",
            "byComposer": "GET /api/works/composer/{composerId}",
            "byGenre": "GET /api/works/genre/{genre}",
            "byYear": "GET /api/works/year/{year}"
        },
        "recordings": {
            "list": "GET /api/recordings",
            "detail": "GET /api/recordings/{id}",
            "byWork": "GET /api/recordings/work/{workId}",
            "byPerformer": "GET /api/recordings/performer/{name}"
        },
        "search": {
            "global": "GET /api/search?q=query",
            "advanced": "POST /api/search/advanced"
        },
        "stats": {
            "overview": "GET /api/stats",
            "composer": "GET /api/stats/composer/{id}"
        }
    })
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let index = ServiceIndex {
        success: true,
        name: "Composers Catalogue API",
        version: env!("CARGO_PKG_VERSION"),
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
        catalogue_loaded_at: state.cache.current().map(|s| s.loaded_at()),
        endpoints: endpoint_map(),
    };
    Json(index)
}

async fn endpoint_not_found() -> Response {
    ApiError::NotFound("Endpoint not found, see /api for the available endpoints".to_owned())
        .into_response()
}

pub fn make_app(config: ServerConfig, cache: GuardedCatalogCache) -> Result<Router> {
    let state = ServerState::new(config.clone(), cache);

    let api_routes: Router = Router::new()
        .route("/", get(home))
        .with_state(state.clone())
        .merge(make_composer_routes(state.clone()))
        .merge(make_work_routes(state.clone()))
        .merge(make_recording_routes(state.clone()))
        .merge(make_search_routes(state.clone()))
        .merge(make_stats_routes(state.clone()));

    let mut app: Router = Router::new()
        .route("/", get(home))
        .with_state(state.clone())
        .nest("/api", api_routes);

    if let Some(assets_dir) = &config.assets_dir {
        if !assets_dir.is_dir() {
            anyhow::bail!("Assets directory does not exist: {:?}", assets_dir);
        }
        app = app.nest_service("/static", ServeDir::new(assets_dir));
    }

    app = app
        .fallback(endpoint_not_found)
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn_with_state(state.clone(), log_requests));

    Ok(app)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Could not listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, stopping server.");
}

pub async fn run_server(config: ServerConfig, cache: GuardedCatalogCache) -> Result<()> {
    let port = config.port;
    let app = make_app(config, cache)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .with_context(|| format!("Could not bind port {}", port))?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
