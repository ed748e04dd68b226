//! Search API routes

use super::error::ApiError;
use super::params::{AdvancedSearchBody, SearchParams, WorkParams};
use super::responses::{ComposerSummary, ListResponse};
use super::state::ServerState;
use super::work_routes::respond_works;
use crate::catalog::{RecordingView, Snapshot, Work};
use crate::query::{execute, Pagination, RecordingQuery, SearchTerm, WorkQuery};

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GlobalSearchResults<'a> {
    works: Vec<&'a Work>,
    recordings: Vec<RecordingView<'a>>,
    composers: Vec<ComposerSummary<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GlobalSearchResponse<'a> {
    success: bool,
    query: &'a str,
    total_results: usize,
    data: GlobalSearchResults<'a>,
}

/// Works, recordings and composers matching `term`, each section capped by
/// `pagination`.
fn search_everything<'a>(
    snapshot: &'a Snapshot,
    term: &SearchTerm,
    pagination: Pagination,
) -> GlobalSearchResults<'a> {
    let work_query = WorkQuery {
        search: Some(term.clone()),
        ..Default::default()
    };
    let works = execute(snapshot.works(), &work_query, pagination).items;

    let recording_query = RecordingQuery {
        search: Some(term.clone()),
        ..Default::default()
    };
    let recordings = execute(snapshot.recordings(), &recording_query, pagination)
        .items
        .into_iter()
        .map(|recording| RecordingView::from(recording))
        .collect();

    let composers = snapshot
        .composers()
        .iter()
        .filter(|entry| {
            term.found_in(&entry.composer.full_name) || term.found_in(&entry.composer.id)
        })
        .skip(pagination.offset())
        .take(pagination.page_size())
        .map(|entry| ComposerSummary::new(entry, snapshot.works_of(&entry.composer.id).count()))
        .collect();

    GlobalSearchResults {
        works,
        recordings,
        composers,
    }
}

async fn global_search(
    State(state): State<ServerState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params?;
    // echoed as sent, matching uses the normalized term
    let raw_query = params.q.clone().unwrap_or_default();
    let (term, pagination) = params.into_term(state.config.query.search_limits())?;
    let snapshot = state.cache.get()?;

    let data = search_everything(&snapshot, &term, pagination);
    let response = GlobalSearchResponse {
        success: true,
        query: &raw_query,
        total_results: data.works.len() + data.recordings.len() + data.composers.len(),
        data,
    };
    Ok(Json(response).into_response())
}

async fn search_works(
    State(state): State<ServerState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params?;
    let raw_query = params.q.clone().unwrap_or_default();
    let (term, pagination) = params.into_term(state.config.query.search_limits())?;
    let snapshot = state.cache.get()?;

    let query = WorkQuery {
        search: Some(term.clone()),
        ..Default::default()
    };
    let page = execute(snapshot.works(), &query, pagination);
    let response = ListResponse::from_page(page, |work| work).with_query(&raw_query);
    Ok(Json(response).into_response())
}

async fn advanced_search(
    State(state): State<ServerState>,
    body: Result<Json<AdvancedSearchBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = body?;
    let (query, pagination) =
        WorkParams::from(body).into_query(state.config.query.works_limits())?;
    let snapshot = state.cache.get()?;
    Ok(respond_works(snapshot.works(), &query, pagination))
}

pub fn make_search_routes(state: ServerState) -> Router {
    Router::new()
        .route("/search", get(global_search))
        .route("/search/advanced", post(advanced_search))
        .route("/works/search", get(search_works))
        .with_state(state)
}
