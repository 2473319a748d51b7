use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    dashboard::get_dashboard,
    decks::{
        create_deck, delete_deck, get_deck, get_deck_performance, get_deck_stats,
        get_deck_summaries, list_decks, update_deck,
    },
    economics::quote,
    reference::{list_formats, list_tournament_types},
    teams::{create_team, create_user, join_team, leave_team, list_members},
    tournaments::{
        create_tournament, delete_tournament, get_tournament, list_tournaments, update_tournament,
    },
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/tournaments", get(list_tournaments).post(create_tournament))
        .route(
            "/api/tournaments/:id",
            get(get_tournament).put(update_tournament).delete(delete_tournament),
        )
        .route("/api/decks", get(list_decks).post(create_deck))
        .route("/api/decks/summary", get(get_deck_summaries))
        .route("/api/decks/performance", get(get_deck_performance))
        .route("/api/decks/:id", get(get_deck).put(update_deck).delete(delete_deck))
        .route("/api/decks/:id/stats", get(get_deck_stats))
        .route("/api/formats", get(list_formats))
        .route("/api/tournament-types", get(list_tournament_types))
        .route("/api/economics/quote", post(quote))
        .route("/api/users", post(create_user))
        .route("/api/teams", post(create_team))
        .route("/api/teams/leave", post(leave_team))
        .route("/api/teams/:id/join", post(join_team))
        .route("/api/teams/:id/members", get(list_members))
        .with_state(state)
}
