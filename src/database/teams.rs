use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::users;
use crate::domain::{Team, User};
use crate::errors::{require, TrackerError, ValidationError};

/// Create a team with `creator_id` as its first member.
pub fn create_team(conn: &mut DbConn, name: &str, creator_id: i64) -> Result<Team> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::Empty { field: "team name" }.into());
    }

    let creator = require(users::find_by_id(conn, creator_id)?, "user", creator_id)?;
    if creator.team_id.is_some() {
        return Err(TrackerError::AlreadyInTeam { user_id: creator_id }.into());
    }

    let tx = conn.transaction()?;
    let team = tx
        .query_row(
            "INSERT INTO teams (name) VALUES (?1) RETURNING id, name",
            params![name],
            parse_team_row,
        )
        .context("Failed to insert new team")?;
    tx.execute(
        "UPDATE users SET team_id = ?1 WHERE id = ?2",
        params![team.id, creator_id],
    )
    .context("Failed to add creator to team")?;
    tx.commit()?;

    log::info!("User {} created team {} ({})", creator_id, team.id, team.name);
    Ok(team)
}

pub fn find_by_id(conn: &mut DbConn, id: i64) -> Result<Option<Team>> {
    conn.query_row("SELECT id, name FROM teams WHERE id = ?1", params![id], parse_team_row)
        .optional()
        .context("Failed to query team by id")
}

pub fn join_team(conn: &mut DbConn, user_id: i64, team_id: i64) -> Result<User> {
    let user = require(users::find_by_id(conn, user_id)?, "user", user_id)?;
    if user.team_id.is_some() {
        return Err(TrackerError::AlreadyInTeam { user_id }.into());
    }
    require(find_by_id(conn, team_id)?, "team", team_id)?;

    users::set_team(conn, user_id, Some(team_id))?;
    Ok(User {
        team_id: Some(team_id),
        ..user
    })
}

pub fn leave_team(conn: &mut DbConn, user_id: i64) -> Result<User> {
    let user = require(users::find_by_id(conn, user_id)?, "user", user_id)?;
    if user.team_id.is_none() {
        return Err(TrackerError::NotInTeam { user_id }.into());
    }

    users::set_team(conn, user_id, None)?;
    Ok(User {
        team_id: None,
        ..user
    })
}

pub fn list_members(conn: &mut DbConn, team_id: i64) -> Result<Vec<User>> {
    require(find_by_id(conn, team_id)?, "team", team_id)?;
    users::list_by_team(conn, team_id)
}

fn parse_team_row(row: &rusqlite::Row) -> rusqlite::Result<Team> {
    Ok(Team {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}
