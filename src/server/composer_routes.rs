//! Composer routes

use super::error::ApiError;
use super::params::{RecordingParams, WorkParams};
use super::recording_routes::respond_recordings;
use super::responses::{CollectionResponse, ComposerSummary, ItemResponse};
use super::state::ServerState;
use super::work_routes::respond_works;
use crate::catalog::{ComposerEntry, Snapshot};
use crate::stats::composition_periods;

use axum::extract::rejection::QueryRejection;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ComposerDetail<'a> {
    #[serde(flatten)]
    entry: &'a ComposerEntry,
    loaded_works: usize,
    loaded_recordings: usize,
}

fn find_composer<'a>(snapshot: &'a Snapshot, id: &str) -> Result<&'a ComposerEntry, ApiError> {
    snapshot
        .composer(id)
        .ok_or_else(|| ApiError::not_found("Composer", id))
}

async fn list_composers(State(state): State<ServerState>) -> Result<Response, ApiError> {
    let snapshot = state.cache.get()?;
    let composers: Vec<ComposerSummary> = snapshot
        .composers()
        .iter()
        .map(|entry| ComposerSummary::new(entry, snapshot.works_of(&entry.composer.id).count()))
        .collect();
    Ok(Json(CollectionResponse::new(composers)).into_response())
}

async fn get_composer(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let snapshot = state.cache.get()?;
    let entry = find_composer(&snapshot, &id)?;
    let detail = ComposerDetail {
        entry,
        loaded_works: snapshot.works_of(&entry.composer.id).count(),
        loaded_recordings: snapshot.recordings_of(&entry.composer.id).len(),
    };
    Ok(Json(ItemResponse::new(detail)).into_response())
}

async fn composer_works(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    params: Result<Query<WorkParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params?;
    let (query, pagination) = params.into_query(state.config.query.works_limits())?;
    let snapshot = state.cache.get()?;
    let entry = find_composer(&snapshot, &id)?;
    Ok(respond_works(
        snapshot.works_of(&entry.composer.id),
        &query,
        pagination,
    ))
}

async fn composer_recordings(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    params: Result<Query<RecordingParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params?;
    let (query, pagination) = params.into_query(state.config.query.recordings_limits())?;
    let snapshot = state.cache.get()?;
    let entry = find_composer(&snapshot, &id)?;
    Ok(respond_recordings(
        snapshot.recordings_of(&entry.composer.id),
        &query,
        pagination,
    ))
}

async fn composer_periods(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let snapshot = state.cache.get()?;
    let entry = find_composer(&snapshot, &id)?;
    let periods = composition_periods(snapshot.works_of(&entry.composer.id));
    Ok(Json(CollectionResponse::new(periods)).into_response())
}

pub fn make_composer_routes(state: ServerState) -> Router {
    Router::new()
        .route("/composers", get(list_composers))
        .route("/composers/{id}", get(get_composer))
        .route("/composers/{id}/works", get(composer_works))
        .route("/composers/{id}/recordings", get(composer_recordings))
        .route("/composers/{id}/periods", get(composer_periods))
        .with_state(state)
}
