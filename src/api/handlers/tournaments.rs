use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::api::models::{ScopeParams, TournamentRequest};
use crate::database;
use crate::domain::TournamentRecord;
use crate::errors::require;
use crate::services::entry::{record_tournament, revise_tournament};

use super::AppState;

pub async fn list_tournaments(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ScopeParams>,
) -> Result<Json<Vec<TournamentRecord>>, ApiError> {
    let mut conn = state.connection()?;
    let records = database::tournaments::list_records(&mut conn, params.scope())?;
    Ok(Json(records))
}

pub async fn get_tournament(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<TournamentRecord>, ApiError> {
    let mut conn = state.connection()?;
    let record = require(database::tournaments::find_by_id(&mut conn, id)?, "tournament", id)?;
    Ok(Json(record))
}

pub async fn create_tournament(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TournamentRequest>,
) -> Result<(StatusCode, Json<TournamentRecord>), ApiError> {
    let draft = request.into_draft()?;
    let mut conn = state.connection()?;
    let saved = record_tournament(&mut conn, &state.config.economics, &draft)?;
    Ok((StatusCode::CREATED, Json(saved)))
}

pub async fn update_tournament(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(request): Json<TournamentRequest>,
) -> Result<Json<TournamentRecord>, ApiError> {
    let draft = request.into_draft()?;
    let mut conn = state.connection()?;
    let saved = revise_tournament(&mut conn, &state.config.economics, id, &draft)?;
    Ok(Json(saved))
}

pub async fn delete_tournament(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let mut conn = state.connection()?;
    database::tournaments::delete_tournament(&mut conn, id)?;
    Ok(StatusCode::NO_CONTENT)
}
