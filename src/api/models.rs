use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::database::{DeckInput, RecordScope};
use crate::domain::{parse_result, MatchRecord, Prize, TournamentCategory};
use crate::errors::{TrackerError, ValidationError};
use crate::services::entry::TournamentDraft;

#[derive(Debug, Default, Deserialize)]
pub struct ScopeParams {
    pub user: Option<i64>,
    pub team: Option<i64>,
}

impl ScopeParams {
    pub fn scope(&self) -> RecordScope {
        RecordScope::from_ids(self.user, self.team)
    }
}

/// Tournament as submitted: either a `"W-L"` result or explicit counts.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentRequest {
    pub tournament_type_id: i64,
    pub deck_id: i64,
    pub date: NaiveDate,
    pub result: Option<String>,
    pub wins: Option<f64>,
    pub losses: Option<f64>,
    pub notes: Option<String>,
    pub user_id: Option<i64>,
}

impl TournamentRequest {
    pub fn record(&self) -> Result<MatchRecord, TrackerError> {
        match (&self.result, self.wins, self.losses) {
            (Some(result), _, _) => Ok(parse_result(result)?),
            (None, Some(wins), Some(losses)) => Ok(MatchRecord::from_counts(wins, losses)?),
            _ => Err(ValidationError::Empty { field: "result" }.into()),
        }
    }

    pub fn into_draft(self) -> Result<TournamentDraft, TrackerError> {
        Ok(TournamentDraft {
            record: self.record()?,
            tournament_type_id: self.tournament_type_id,
            deck_id: self.deck_id,
            date: self.date,
            notes: self.notes,
            owner_user_id: self.user_id,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckRequest {
    pub name: String,
    pub format_id: i64,
    pub description: Option<String>,
    pub user_id: Option<i64>,
}

impl DeckRequest {
    pub fn into_input(self) -> Result<DeckInput, ValidationError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        Ok(DeckInput {
            name,
            format_id: self.format_id,
            description: self.description,
            owner_user_id: self.user_id,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub tournament_type: String,
    pub result: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub tournament_type: String,
    pub category: TournamentCategory,
    pub result: String,
    pub cost: f64,
    pub prize: Prize,
    pub profit: f64,
}

#[derive(Debug, Deserialize)]
pub struct UserRequest {
    pub username: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRequest {
    pub name: String,
    pub user_id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipRequest {
    pub user_id: i64,
}
