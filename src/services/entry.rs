use anyhow::Result;
use chrono::NaiveDate;
use log::info;

use crate::database::{self, DbConn, NewTournament};
use crate::domain::{MatchRecord, TournamentRecord};
use crate::economics::{Assessment, EconomicsEngine, EconomicsTable};
use crate::errors::require;

/// User-entered part of a tournament; cost and prizes are derived from it.
#[derive(Debug, Clone)]
pub struct TournamentDraft {
    pub tournament_type_id: i64,
    pub deck_id: i64,
    pub date: NaiveDate,
    pub record: MatchRecord,
    pub notes: Option<String>,
    pub owner_user_id: Option<i64>,
}

pub fn record_tournament(
    conn: &mut DbConn,
    table: &EconomicsTable,
    draft: &TournamentDraft,
) -> Result<TournamentRecord> {
    let new = prepare(conn, table, draft)?;
    let saved = database::tournaments::insert_tournament(conn, &new)?;

    info!(
        "Recorded tournament {} ({} {}, cost {}, {} PP)",
        saved.id, saved.tournament_type, draft.record, saved.cost, saved.prize_play_points
    );
    Ok(saved)
}

/// Re-derive cost and prizes from the edited type and result.
pub fn revise_tournament(
    conn: &mut DbConn,
    table: &EconomicsTable,
    id: i64,
    draft: &TournamentDraft,
) -> Result<TournamentRecord> {
    let changes = prepare(conn, table, draft)?;
    database::tournaments::update_tournament(conn, id, &changes)
}

fn prepare(
    conn: &mut DbConn,
    table: &EconomicsTable,
    draft: &TournamentDraft,
) -> Result<NewTournament> {
    let tournament_type = require(
        database::reference::find_tournament_type(conn, draft.tournament_type_id)?,
        "tournament type",
        draft.tournament_type_id,
    )?;
    require(
        database::decks::find_by_id(conn, draft.deck_id)?,
        "deck",
        draft.deck_id,
    )?;
    database::users::ensure_owner(conn, draft.owner_user_id)?;

    let assessment = EconomicsEngine::new(table).assess(&tournament_type.name, draft.record);
    Ok(to_row(draft, assessment))
}

fn to_row(draft: &TournamentDraft, assessment: Assessment) -> NewTournament {
    NewTournament {
        tournament_type_id: draft.tournament_type_id,
        category: assessment.category,
        deck_id: draft.deck_id,
        date: draft.date,
        cost: assessment.cost,
        record: draft.record,
        prize: assessment.prize,
        notes: draft.notes.clone().filter(|n| !n.trim().is_empty()),
        owner_user_id: draft.owner_user_id,
    }
}
