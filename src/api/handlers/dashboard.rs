use axum::{
    extract::{Query, State},
    response::Json,
};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::api::models::ScopeParams;
use crate::services::dashboard::{build_dashboard, Dashboard};

use super::AppState;

pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ScopeParams>,
) -> Result<Json<Dashboard>, ApiError> {
    let mut conn = state.connection()?;
    let dashboard = build_dashboard(&mut conn, &state.config, params.scope(), state.clock.today())?;
    Ok(Json(dashboard))
}
