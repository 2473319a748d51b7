use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use crate::domain::{Format, TournamentType};

pub fn list_formats(conn: &mut DbConn) -> Result<Vec<Format>> {
    let mut stmt = conn.prepare("SELECT id, name FROM formats ORDER BY name")?;
    let rows = stmt
        .query_map([], |row| {
            Ok(Format {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn list_tournament_types(conn: &mut DbConn) -> Result<Vec<TournamentType>> {
    let mut stmt = conn.prepare("SELECT id, name FROM tournament_types ORDER BY name")?;
    let rows = stmt
        .query_map([], parse_tournament_type_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn find_tournament_type(conn: &mut DbConn, id: i64) -> Result<Option<TournamentType>> {
    let sql = "SELECT id, name FROM tournament_types WHERE id = ?1";

    conn.query_row(sql, params![id], parse_tournament_type_row)
        .optional()
        .context("Failed to query tournament type by id")
}

fn parse_tournament_type_row(row: &rusqlite::Row) -> rusqlite::Result<TournamentType> {
    Ok(TournamentType {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}
