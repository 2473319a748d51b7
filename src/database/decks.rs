use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::DeckInput;
use super::users;
use crate::domain::Deck;
use crate::errors::{require, TrackerError};

const SELECT_DECK: &str = "SELECT d.id, d.name, d.format_id, f.name, d.description, d.owner_user_id FROM decks d JOIN formats f ON d.format_id = f.id";

pub fn list_all(conn: &mut DbConn) -> Result<Vec<Deck>> {
    let sql = format!("{SELECT_DECK} ORDER BY d.name, d.id");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_deck_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn find_by_id(conn: &mut DbConn, id: i64) -> Result<Option<Deck>> {
    let sql = format!("{SELECT_DECK} WHERE d.id = ?1");

    conn.query_row(&sql, params![id], parse_deck_row)
        .optional()
        .context("Failed to query deck by id")
}

pub fn insert_deck(conn: &mut DbConn, deck: &DeckInput) -> Result<Deck> {
    users::ensure_owner(conn, deck.owner_user_id)?;

    let sql = "INSERT INTO decks (name, format_id, description, owner_user_id) VALUES (?1, ?2, ?3, ?4) RETURNING id";

    let id: i64 = conn
        .query_row(
            sql,
            params![deck.name, deck.format_id, deck.description, deck.owner_user_id],
            |row| row.get(0),
        )
        .context("Failed to insert new deck")?;

    Ok(require(find_by_id(conn, id)?, "deck", id)?)
}

pub fn update_deck(conn: &mut DbConn, id: i64, deck: &DeckInput) -> Result<Deck> {
    let sql = "UPDATE decks SET name = ?1, format_id = ?2, description = ?3, updated_at = CURRENT_TIMESTAMP WHERE id = ?4";

    let changed = conn
        .execute(sql, params![deck.name, deck.format_id, deck.description, id])
        .context("Failed to update deck")?;
    if changed == 0 {
        return Err(TrackerError::not_found("deck", id).into());
    }

    Ok(require(find_by_id(conn, id)?, "deck", id)?)
}

pub fn count_usage(conn: &mut DbConn, id: i64) -> Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM tournaments WHERE deck_id = ?1",
        params![id],
        |row| row.get(0),
    )
    .context("Failed to count deck usage")
}

/// Delete a deck that no tournament refers to.
pub fn delete_deck(conn: &mut DbConn, id: i64) -> Result<()> {
    let tournaments = count_usage(conn, id)?;
    if tournaments > 0 {
        log::warn!("Refusing to delete deck {} used in {} tournaments", id, tournaments);
        return Err(TrackerError::DeckInUse { deck_id: id, tournaments }.into());
    }

    let deleted = conn
        .execute("DELETE FROM decks WHERE id = ?1", params![id])
        .context("Failed to delete deck")?;
    if deleted == 0 {
        return Err(TrackerError::not_found("deck", id).into());
    }
    Ok(())
}

fn parse_deck_row(row: &rusqlite::Row) -> rusqlite::Result<Deck> {
    Ok(Deck {
        id: row.get(0)?,
        name: row.get(1)?,
        format_id: row.get(2)?,
        format: row.get(3)?,
        description: row.get(4)?,
        owner_user_id: row.get(5)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_support::{format_id, seeded_pool};

    fn input(name: &str, format_id: i64) -> DeckInput {
        DeckInput {
            name: name.to_string(),
            format_id,
            description: Some("test list".to_string()),
            owner_user_id: None,
        }
    }

    #[test]
    fn test_insert_and_list() {
        let pool = seeded_pool();
        let mut conn = pool.get().unwrap();
        let modern = format_id(&mut conn, "Modern");

        let burn = insert_deck(&mut conn, &input("Burn", modern)).unwrap();
        insert_deck(&mut conn, &input("Amulet Titan", modern)).unwrap();

        assert_eq!(burn.format, "Modern");
        let names: Vec<String> = list_all(&mut conn).unwrap().into_iter().map(|d| d.name).collect();
        assert_eq!(names, ["Amulet Titan", "Burn"]);
    }

    #[test]
    fn test_update_changes_format() {
        let pool = seeded_pool();
        let mut conn = pool.get().unwrap();
        let modern = format_id(&mut conn, "Modern");
        let pioneer = format_id(&mut conn, "Pioneer");

        let deck = insert_deck(&mut conn, &input("Rakdos", modern)).unwrap();
        let updated = update_deck(&mut conn, deck.id, &input("Rakdos Midrange", pioneer)).unwrap();

        assert_eq!(updated.name, "Rakdos Midrange");
        assert_eq!(updated.format, "Pioneer");
    }

    #[test]
    fn test_update_missing_deck() {
        let pool = seeded_pool();
        let mut conn = pool.get().unwrap();
        let modern = format_id(&mut conn, "Modern");

        let err = update_deck(&mut conn, 404, &input("Ghost", modern)).unwrap_err();
        assert!(matches!(err.downcast_ref::<TrackerError>(), Some(TrackerError::NotFound { .. })));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let pool = seeded_pool();
        let mut conn = pool.get().unwrap();
        assert!(insert_deck(&mut conn, &input("Nowhere", 9999)).is_err());
    }

    #[test]
    fn test_unknown_owner_is_not_found() {
        let pool = seeded_pool();
        let mut conn = pool.get().unwrap();
        let modern = format_id(&mut conn, "Modern");

        let mut deck = input("Orphan", modern);
        deck.owner_user_id = Some(777);
        let err = insert_deck(&mut conn, &deck).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TrackerError>(),
            Some(TrackerError::NotFound { entity: "user", id: 777 })
        ));
        assert!(list_all(&mut conn).unwrap().is_empty());
    }

    #[test]
    fn test_delete_unused_deck() {
        let pool = seeded_pool();
        let mut conn = pool.get().unwrap();
        let modern = format_id(&mut conn, "Modern");

        let deck = insert_deck(&mut conn, &input("Burn", modern)).unwrap();
        delete_deck(&mut conn, deck.id).unwrap();
        assert_eq!(find_by_id(&mut conn, deck.id).unwrap(), None);
    }
}
