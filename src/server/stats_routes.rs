//! Catalogue statistics routes

use super::error::ApiError;
use super::responses::ItemResponse;
use super::state::ServerState;
use crate::stats::{catalogue_overview, composer_overview};

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

async fn get_stats(State(state): State<ServerState>) -> Result<Response, ApiError> {
    let snapshot = state.cache.get()?;
    Ok(Json(ItemResponse::new(catalogue_overview(&snapshot))).into_response())
}

async fn get_composer_stats(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let snapshot = state.cache.get()?;
    let entry = snapshot
        .composer(&id)
        .ok_or_else(|| ApiError::not_found("Composer", &id))?;
    let works: Vec<_> = snapshot.works_of(&entry.composer.id).collect();
    let recordings = snapshot.recordings_of(&entry.composer.id);
    let overview = composer_overview(entry, &works, &recordings);
    Ok(Json(ItemResponse::new(overview)).into_response())
}

pub fn make_stats_routes(state: ServerState) -> Router {
    Router::new()
        .route("/stats", get(get_stats))
        .route("/stats/composer/{id}", get(get_composer_stats))
        .with_state(state)
}
