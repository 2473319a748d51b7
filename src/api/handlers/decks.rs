use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::api::models::{DeckRequest, ScopeParams};
use crate::database::{self, RecordScope};
use crate::domain::{Deck, DeckStats, DeckSummary};
use crate::errors::require;
use crate::stats;

use super::AppState;

pub async fn list_decks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Deck>>, ApiError> {
    let mut conn = state.connection()?;
    Ok(Json(database::decks::list_all(&mut conn)?))
}

pub async fn get_deck(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Deck>, ApiError> {
    let mut conn = state.connection()?;
    let deck = require(database::decks::find_by_id(&mut conn, id)?, "deck", id)?;
    Ok(Json(deck))
}

pub async fn create_deck(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DeckRequest>,
) -> Result<(StatusCode, Json<Deck>), ApiError> {
    let input = request.into_input()?;
    let mut conn = state.connection()?;
    let deck = database::decks::insert_deck(&mut conn, &input)?;
    Ok((StatusCode::CREATED, Json(deck)))
}

pub async fn update_deck(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(request): Json<DeckRequest>,
) -> Result<Json<Deck>, ApiError> {
    let input = request.into_input()?;
    let mut conn = state.connection()?;
    Ok(Json(database::decks::update_deck(&mut conn, id, &input)?))
}

pub async fn delete_deck(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let mut conn = state.connection()?;
    database::decks::delete_deck(&mut conn, id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_deck_stats(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<DeckStats>, ApiError> {
    let mut conn = state.connection()?;
    require(database::decks::find_by_id(&mut conn, id)?, "deck", id)?;

    let records = database::tournaments::list_records(&mut conn, RecordScope::All)?;
    let deck_stats = stats::deck_stats(id, &records, state.config.dashboard.deck_recent_limit);
    Ok(Json(deck_stats))
}

pub async fn get_deck_summaries(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ScopeParams>,
) -> Result<Json<Vec<DeckSummary>>, ApiError> {
    let mut conn = state.connection()?;
    let decks = database::decks::list_all(&mut conn)?;
    let records = database::tournaments::list_records(&mut conn, params.scope())?;
    Ok(Json(stats::summarize_decks(&decks, &records)))
}

pub async fn get_deck_performance(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ScopeParams>,
) -> Result<Json<Vec<DeckSummary>>, ApiError> {
    let mut conn = state.connection()?;
    let decks = database::decks::list_all(&mut conn)?;
    let records = database::tournaments::list_records(&mut conn, params.scope())?;
    let summaries = stats::summarize_decks(&decks, &records);
    Ok(Json(stats::rank(&summaries, state.config.dashboard.leaderboard_size)))
}
