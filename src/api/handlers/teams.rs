use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::api::models::{MembershipRequest, TeamRequest, UserRequest};
use crate::database;
use crate::domain::{Team, User};

use super::AppState;

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(request): Json<UserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let mut conn = state.connection()?;
    let user = database::users::create_user(&mut conn, &request.username)?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn create_team(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TeamRequest>,
) -> Result<(StatusCode, Json<Team>), ApiError> {
    let mut conn = state.connection()?;
    let team = database::teams::create_team(&mut conn, &request.name, request.user_id)?;
    Ok((StatusCode::CREATED, Json(team)))
}

pub async fn join_team(
    State(state): State<Arc<AppState>>,
    Path(team_id): Path<i64>,
    Json(request): Json<MembershipRequest>,
) -> Result<Json<User>, ApiError> {
    let mut conn = state.connection()?;
    Ok(Json(database::teams::join_team(&mut conn, request.user_id, team_id)?))
}

pub async fn leave_team(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MembershipRequest>,
) -> Result<Json<User>, ApiError> {
    let mut conn = state.connection()?;
    Ok(Json(database::teams::leave_team(&mut conn, request.user_id)?))
}

pub async fn list_members(
    State(state): State<Arc<AppState>>,
    Path(team_id): Path<i64>,
) -> Result<Json<Vec<User>>, ApiError> {
    let mut conn = state.connection()?;
    Ok(Json(database::teams::list_members(&mut conn, team_id)?))
}
