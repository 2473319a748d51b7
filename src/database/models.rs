use chrono::NaiveDate;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

use crate::domain::{MatchRecord, Prize, TournamentCategory};

/// Whose tournaments a query should see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordScope {
    #[default]
    All,
    User(i64),
    Team(i64),
}

impl RecordScope {
    /// A team filter takes precedence over a user filter.
    pub fn from_ids(user: Option<i64>, team: Option<i64>) -> Self {
        match (user, team) {
            (_, Some(team_id)) => RecordScope::Team(team_id),
            (Some(user_id), None) => RecordScope::User(user_id),
            (None, None) => RecordScope::All,
        }
    }
}

/// A tournament row ready to be written, with economics already applied.
#[derive(Debug, Clone)]
pub struct NewTournament {
    pub tournament_type_id: i64,
    pub category: TournamentCategory,
    pub deck_id: i64,
    pub date: NaiveDate,
    pub cost: f64,
    pub record: MatchRecord,
    pub prize: Prize,
    pub notes: Option<String>,
    pub owner_user_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct DeckInput {
    pub name: String,
    pub format_id: i64,
    pub description: Option<String>,
    pub owner_user_id: Option<i64>,
}

impl ToSql for TournamentCategory {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for TournamentCategory {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: String| FromSqlError::Other(e.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_from_ids() {
        assert_eq!(RecordScope::from_ids(None, None), RecordScope::All);
        assert_eq!(RecordScope::from_ids(Some(3), None), RecordScope::User(3));
        assert_eq!(RecordScope::from_ids(Some(3), Some(9)), RecordScope::Team(9));
    }
}
