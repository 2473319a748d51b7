use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use crate::domain::User;
use crate::errors::{require, ValidationError};

pub fn create_user(conn: &mut DbConn, username: &str) -> Result<User> {
    let username = username.trim();
    if username.is_empty() {
        return Err(ValidationError::Empty { field: "username" }.into());
    }

    let sql = "INSERT INTO users (username) VALUES (?1) RETURNING id, username, team_id";

    conn.query_row(sql, params![username], parse_user_row)
        .with_context(|| format!("Failed to create user {}", username))
}

pub fn find_by_id(conn: &mut DbConn, id: i64) -> Result<Option<User>> {
    let sql = "SELECT id, username, team_id FROM users WHERE id = ?1";

    conn.query_row(sql, params![id], parse_user_row)
        .optional()
        .context("Failed to query user by id")
}

/// Fail with `NotFound` when an owner is given but no such user exists.
pub fn ensure_owner(conn: &mut DbConn, owner_user_id: Option<i64>) -> Result<()> {
    if let Some(user_id) = owner_user_id {
        require(find_by_id(conn, user_id)?, "user", user_id)?;
    }
    Ok(())
}

pub fn list_by_team(conn: &mut DbConn, team_id: i64) -> Result<Vec<User>> {
    let sql = "SELECT id, username, team_id FROM users WHERE team_id = ?1 ORDER BY username";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![team_id], parse_user_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub(super) fn set_team(conn: &DbConn, user_id: i64, team_id: Option<i64>) -> Result<()> {
    conn.execute(
        "UPDATE users SET team_id = ?1 WHERE id = ?2",
        params![team_id, user_id],
    )
    .context("Failed to update user team")
    .map(|_| ())
}

fn parse_user_row(row: &rusqlite::Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        team_id: row.get(2)?,
    })
}
