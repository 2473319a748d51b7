use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use crate::config::settings::AppConfig;
use crate::database::{self, DbConn, RecordScope};
use crate::domain::{DashboardStats, DeckSummary, TournamentRecord};
use crate::stats;

/// Everything the landing page shows, for one scope.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub deck_performance: Vec<DeckSummary>,
    pub recent_tournaments: Vec<TournamentRecord>,
}

pub fn build_dashboard(
    conn: &mut DbConn,
    config: &AppConfig,
    scope: RecordScope,
    today: NaiveDate,
) -> Result<Dashboard> {
    let records = database::tournaments::list_records(conn, scope)?;
    let decks = database::decks::list_all(conn)?;

    let summaries = stats::summarize_decks(&decks, &records);

    Ok(Dashboard {
        stats: stats::aggregate(&records, today),
        deck_performance: stats::rank(&summaries, config.dashboard.leaderboard_size),
        recent_tournaments: stats::recent_tournaments(&records, config.dashboard.recent_limit),
    })
}
