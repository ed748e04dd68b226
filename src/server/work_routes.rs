//! Works listing and lookup routes

use super::error::ApiError;
use super::params::{WorkLookupParams, WorkParams};
use super::responses::{ItemResponse, ListResponse};
use super::state::ServerState;
use crate::catalog::Work;
use crate::query::{execute, Pagination, WorkQuery};

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

pub(super) fn respond_works<'a, I>(works: I, query: &WorkQuery, pagination: Pagination) -> Response
where
    I: IntoIterator<Item = &'a Work>,
{
    let page = execute(works, query, pagination);
    Json(ListResponse::from_page(page, |work| work)).into_response()
}

fn list_filtered(state: &ServerState, params: WorkParams) -> Result<Response, ApiError> {
    let (query, pagination) = params.into_query(state.config.query.works_limits())?;
    let snapshot = state.cache.get()?;
    Ok(respond_works(snapshot.works(), &query, pagination))
}

async fn list_works(
    State(state): State<ServerState>,
    params: Result<Query<WorkParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params?;
    list_filtered(&state, params)
}

async fn get_work(
    State(state): State<ServerState>,
    Path(catalog_id): Path<String>,
    params: Result<Query<WorkLookupParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params?;
    let snapshot = state.cache.get()?;
    let work = match params.composer() {
        Some(composer) => snapshot.work_of(composer, &catalog_id),
        None => snapshot.work(&catalog_id),
    };
    match work {
        Some(work) => Ok(Json(ItemResponse::new(work)).into_response()),
        None => Err(ApiError::not_found("Work", &catalog_id)),
    }
}

async fn works_by_composer(
    State(state): State<ServerState>,
    Path(composer_id): Path<String>,
    params: Result<Query<WorkParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(mut params) = params?;
    params.composer = Some(composer_id);
    list_filtered(&state, params)
}

async fn works_by_genre(
    State(state): State<ServerState>,
    Path(genre): Path<String>,
    params: Result<Query<WorkParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(mut params) = params?;
    params.category = Some(genre);
    list_filtered(&state, params)
}

async fn works_by_year(
    State(state): State<ServerState>,
    year: Result<Path<i32>, PathRejection>,
    params: Result<Query<WorkParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Path(year) = year?;
    let Query(mut params) = params?;
    params.year = Some(year);
    list_filtered(&state, params)
}

pub fn make_work_routes(state: ServerState) -> Router {
    Router::new()
        .route("/works", get(list_works))
        .route("/works/{catalog_id}", get(get_work))
        .route("/works/composer/{composer_id}", get(works_by_composer))
        .route("/works/genre/{genre}", get(works_by_genre))
        .route("/works/year/{year}", get(works_by_year))
        .with_state(state)
}
