use axum::{extract::State, response::Json};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::api::models::{QuoteRequest, QuoteResponse};
use crate::domain::parse_result;
use crate::economics::EconomicsEngine;

use super::AppState;

/// Preview what an entry would cost and pay without recording it.
pub async fn quote(
    State(state): State<Arc<AppState>>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let record = parse_result(&request.result)?;
    let assessment = EconomicsEngine::new(&state.config.economics).assess(&request.tournament_type, record);

    Ok(Json(QuoteResponse {
        tournament_type: request.tournament_type,
        category: assessment.category,
        result: record.to_string(),
        cost: assessment.cost,
        prize: assessment.prize,
        profit: assessment.profit(),
    }))
}
