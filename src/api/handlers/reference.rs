use axum::{extract::State, response::Json};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::database;
use crate::domain::{Format, TournamentType};

use super::AppState;

pub async fn list_formats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Format>>, ApiError> {
    let mut conn = state.connection()?;
    Ok(Json(database::reference::list_formats(&mut conn)?))
}

pub async fn list_tournament_types(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TournamentType>>, ApiError> {
    let mut conn = state.connection()?;
    Ok(Json(database::reference::list_tournament_types(&mut conn)?))
}
