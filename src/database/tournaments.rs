use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::{NewTournament, RecordScope};
use crate::domain::TournamentRecord;
use crate::errors::{require, TrackerError};

const SELECT_TOURNAMENT: &str = "SELECT t.id, t.tournament_type_id, tt.name, t.category, t.deck_id, d.name, t.date, t.cost, t.wins, t.losses, t.prize_play_points, t.prize_chests, t.prize_qps, t.notes, t.owner_user_id FROM tournaments t JOIN tournament_types tt ON t.tournament_type_id = tt.id JOIN decks d ON t.deck_id = d.id";

const NEWEST_FIRST: &str = "ORDER BY t.date DESC, t.id DESC";

/// Every record visible in `scope`, newest first.
pub fn list_records(conn: &mut DbConn, scope: RecordScope) -> Result<Vec<TournamentRecord>> {
    let (filter, id) = match scope {
        RecordScope::All => ("", None),
        RecordScope::User(id) => ("WHERE t.owner_user_id = ?1", Some(id)),
        RecordScope::Team(id) => (
            "WHERE t.owner_user_id IN (SELECT id FROM users WHERE team_id = ?1)",
            Some(id),
        ),
    };
    let sql = format!("{SELECT_TOURNAMENT} {filter} {NEWEST_FIRST}");

    let mut stmt = conn.prepare(&sql)?;
    let rows = match id {
        Some(id) => stmt.query_map(params![id], parse_tournament_row)?,
        None => stmt.query_map([], parse_tournament_row)?,
    }
    .collect::<rusqlite::Result<Vec<_>>>()
    .context("Failed to list tournaments")?;

    Ok(rows)
}

pub fn find_by_id(conn: &mut DbConn, id: i64) -> Result<Option<TournamentRecord>> {
    let sql = format!("{SELECT_TOURNAMENT} WHERE t.id = ?1");

    conn.query_row(&sql, params![id], parse_tournament_row)
        .optional()
        .context("Failed to query tournament by id")
}

pub fn insert_tournament(conn: &mut DbConn, new: &NewTournament) -> Result<TournamentRecord> {
    let sql = "INSERT INTO tournaments (tournament_type_id, category, deck_id, date, cost, wins, losses, prize_play_points, prize_chests, prize_qps, notes, owner_user_id) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12) RETURNING id";

    let id: i64 = conn
        .query_row(
            sql,
            params![
                new.tournament_type_id,
                new.category,
                new.deck_id,
                new.date,
                new.cost,
                new.record.wins,
                new.record.losses,
                new.prize.play_points,
                new.prize.chests,
                new.prize.qps,
                new.notes,
                new.owner_user_id,
            ],
            |row| row.get(0),
        )
        .context("Failed to insert new tournament")?;

    Ok(require(find_by_id(conn, id)?, "tournament", id)?)
}

/// Replace every derived and user-entered field; the owner never changes.
pub fn update_tournament(
    conn: &mut DbConn,
    id: i64,
    changes: &NewTournament,
) -> Result<TournamentRecord> {
    let sql = "UPDATE tournaments SET tournament_type_id = ?1, category = ?2, deck_id = ?3, date = ?4, cost = ?5, wins = ?6, losses = ?7, prize_play_points = ?8, prize_chests = ?9, prize_qps = ?10, notes = ?11, updated_at = CURRENT_TIMESTAMP WHERE id = ?12";

    let changed = conn
        .execute(
            sql,
            params![
                changes.tournament_type_id,
                changes.category,
                changes.deck_id,
                changes.date,
                changes.cost,
                changes.record.wins,
                changes.record.losses,
                changes.prize.play_points,
                changes.prize.chests,
                changes.prize.qps,
                changes.notes,
                id,
            ],
        )
        .context("Failed to update tournament")?;
    if changed == 0 {
        return Err(TrackerError::not_found("tournament", id).into());
    }

    Ok(require(find_by_id(conn, id)?, "tournament", id)?)
}

pub fn delete_tournament(conn: &mut DbConn, id: i64) -> Result<()> {
    let deleted = conn
        .execute("DELETE FROM tournaments WHERE id = ?1", params![id])
        .context("Failed to delete tournament")?;
    if deleted == 0 {
        return Err(TrackerError::not_found("tournament", id).into());
    }
    Ok(())
}

fn parse_tournament_row(row: &rusqlite::Row) -> rusqlite::Result<TournamentRecord> {
    Ok(TournamentRecord {
        id: row.get(0)?,
        tournament_type_id: row.get(1)?,
        tournament_type: row.get(2)?,
        category: row.get(3)?,
        deck_id: row.get(4)?,
        deck: row.get(5)?,
        date: row.get(6)?,
        cost: row.get(7)?,
        wins: row.get(8)?,
        losses: row.get(9)?,
        prize_play_points: row.get(10)?,
        prize_chests: row.get(11)?,
        prize_qps: row.get(12)?,
        notes: row.get(13)?,
        owner_user_id: row.get(14)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_support::{new_deck, new_tournament, new_user, seeded_pool, type_id};
    use crate::database::{decks, teams};
    use crate::domain::{MatchRecord, TournamentCategory};

    #[test]
    fn test_insert_and_find_round_trip() {
        let pool = seeded_pool();
        let mut conn = pool.get().unwrap();
        let deck = new_deck(&mut conn, "Burn");
        let league = type_id(&mut conn, "Constructed League");

        let mut new = new_tournament(league, deck, "2024-06-01", MatchRecord::new(5, 0));
        new.notes = Some("clean sweep".to_string());
        let saved = insert_tournament(&mut conn, &new).unwrap();

        assert_eq!(saved.tournament_type, "Constructed League");
        assert_eq!(saved.category, TournamentCategory::League);
        assert_eq!(saved.deck, "Burn");
        assert_eq!(saved.record(), MatchRecord::new(5, 0));
        assert_eq!(saved.notes.as_deref(), Some("clean sweep"));
        assert_eq!(find_by_id(&mut conn, saved.id).unwrap(), Some(saved));
    }

    #[test]
    fn test_list_is_newest_first() {
        let pool = seeded_pool();
        let mut conn = pool.get().unwrap();
        let deck = new_deck(&mut conn, "Burn");
        let league = type_id(&mut conn, "Constructed League");

        for date in ["2024-05-01", "2024-06-01", "2024-04-01"] {
            insert_tournament(&mut conn, &new_tournament(league, deck, date, MatchRecord::new(3, 2)))
                .unwrap();
        }

        let dates: Vec<String> = list_records(&mut conn, RecordScope::All)
            .unwrap()
            .iter()
            .map(|r| r.date.to_string())
            .collect();
        assert_eq!(dates, ["2024-06-01", "2024-05-01", "2024-04-01"]);
    }

    #[test]
    fn test_list_by_user_and_team() {
        let pool = seeded_pool();
        let mut conn = pool.get().unwrap();
        let deck = new_deck(&mut conn, "Burn");
        let league = type_id(&mut conn, "Constructed League");
        let alice = new_user(&mut conn, "alice");
        let bob = new_user(&mut conn, "bob");
        let carol = new_user(&mut conn, "carol");
        let team = teams::create_team(&mut conn, "Spikes", alice).unwrap();
        teams::join_team(&mut conn, bob, team.id).unwrap();

        for owner in [Some(alice), Some(bob), Some(carol), None] {
            let mut new = new_tournament(league, deck, "2024-06-01", MatchRecord::new(3, 2));
            new.owner_user_id = owner;
            insert_tournament(&mut conn, &new).unwrap();
        }

        assert_eq!(list_records(&mut conn, RecordScope::All).unwrap().len(), 4);
        assert_eq!(list_records(&mut conn, RecordScope::User(carol)).unwrap().len(), 1);
        let team_records = list_records(&mut conn, RecordScope::Team(team.id)).unwrap();
        assert_eq!(team_records.len(), 2);
        assert!(team_records.iter().all(|r| r.owner_user_id != Some(carol)));
    }

    #[test]
    fn test_update_and_delete() {
        let pool = seeded_pool();
        let mut conn = pool.get().unwrap();
        let deck = new_deck(&mut conn, "Burn");
        let league = type_id(&mut conn, "Constructed League");
        let prelim = type_id(&mut conn, "Preliminary");

        let saved = insert_tournament(
            &mut conn,
            &new_tournament(league, deck, "2024-06-01", MatchRecord::new(3, 2)),
        )
        .unwrap();

        let mut changes = new_tournament(prelim, deck, "2024-06-02", MatchRecord::new(4, 0));
        changes.category = TournamentCategory::Preliminary;
        let updated = update_tournament(&mut conn, saved.id, &changes).unwrap();
        assert_eq!(updated.tournament_type, "Preliminary");
        assert_eq!(updated.category, TournamentCategory::Preliminary);
        assert_eq!(updated.wins, 4);

        delete_tournament(&mut conn, saved.id).unwrap();
        assert_eq!(find_by_id(&mut conn, saved.id).unwrap(), None);
        assert!(delete_tournament(&mut conn, saved.id).is_err());
    }

    #[test]
    fn test_deck_in_use_cannot_be_deleted() {
        let pool = seeded_pool();
        let mut conn = pool.get().unwrap();
        let deck = new_deck(&mut conn, "Burn");
        let league = type_id(&mut conn, "Constructed League");
        let saved = insert_tournament(
            &mut conn,
            &new_tournament(league, deck, "2024-06-01", MatchRecord::new(3, 2)),
        )
        .unwrap();

        let err = decks::delete_deck(&mut conn, deck).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TrackerError>(),
            Some(TrackerError::DeckInUse { tournaments: 1, .. })
        ));

        delete_tournament(&mut conn, saved.id).unwrap();
        decks::delete_deck(&mut conn, deck).unwrap();
    }
}
