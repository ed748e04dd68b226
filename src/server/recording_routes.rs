//! Recordings listing and lookup routes

use super::error::ApiError;
use super::params::RecordingParams;
use super::responses::{ItemResponse, ListResponse};
use super::state::ServerState;
use crate::catalog::{Recording, RecordingView};
use crate::query::{execute, Pagination, RecordingQuery, SearchTerm};

use axum::extract::rejection::QueryRejection;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

pub(super) fn respond_recordings<'a, I>(
    recordings: I,
    query: &RecordingQuery,
    pagination: Pagination,
) -> Response
where
    I: IntoIterator<Item = &'a Recording>,
{
    let page = execute(recordings, query, pagination);
    Json(ListResponse::from_page(page, |recording| RecordingView::from(recording))).into_response()
}

fn list_filtered(state: &ServerState, params: RecordingParams) -> Result<Response, ApiError> {
    let (query, pagination) = params.into_query(state.config.query.recordings_limits())?;
    let snapshot = state.cache.get()?;
    Ok(respond_recordings(snapshot.recordings(), &query, pagination))
}

async fn list_recordings(
    State(state): State<ServerState>,
    params: Result<Query<RecordingParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params?;
    list_filtered(&state, params)
}

async fn get_recording(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let snapshot = state.cache.get()?;
    match snapshot.recording(&id) {
        Some(recording) => {
            Ok(Json(ItemResponse::new(RecordingView::from(recording))).into_response())
        }
        None => Err(ApiError::not_found("Recording", &id)),
    }
}

async fn recordings_by_work(
    State(state): State<ServerState>,
    Path(work_id): Path<String>,
    params: Result<Query<RecordingParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(mut params) = params?;
    params.work = Some(work_id);
    list_filtered(&state, params)
}

async fn recordings_by_performer(
    State(state): State<ServerState>,
    Path(name): Path<String>,
    params: Result<Query<RecordingParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params?;
    let (mut query, pagination) = params.into_query(state.config.query.recordings_limits())?;
    query.performer = Some(SearchTerm::required(Some(&name))?);
    let snapshot = state.cache.get()?;
    Ok(respond_recordings(snapshot.recordings(), &query, pagination))
}

pub fn make_recording_routes(state: ServerState) -> Router {
    Router::new()
        .route("/recordings", get(list_recordings))
        .route("/recordings/{id}", get(get_recording))
        .route("/recordings/work/{work_id}", get(recordings_by_work))
        .route("/recordings/performer/{name}", get(recordings_by_performer))
        .with_state(state)
}
