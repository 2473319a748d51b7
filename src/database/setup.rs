use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;

pub const DEFAULT_FORMATS: [&str; 6] = ["Legacy", "Modern", "Pauper", "Pioneer", "Standard", "Vintage"];

pub const DEFAULT_TOURNAMENT_TYPES: [&str; 6] = [
    "Constructed League",
    "Pauper League",
    "Preliminary",
    "Challenge 32",
    "Challenge 64",
    "Showcase Challenge",
];

/// Create any missing tables. Existing data is left untouched.
pub fn initialize_database(conn: &mut DbConn) -> Result<()> {
    let schema_sql = include_str!("schema.sql");
    let statements = split_sql_statements(schema_sql);

    for (idx, statement) in statements.iter().enumerate() {
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to execute statement {}", idx + 1))?;
    }

    log::info!("Database schema initialized");
    Ok(())
}

/// Insert the default formats and tournament types that are not there yet.
pub fn seed_reference_data(conn: &mut DbConn) -> Result<usize> {
    let mut inserted = 0;
    for name in DEFAULT_FORMATS {
        inserted += conn
            .execute("INSERT OR IGNORE INTO formats (name) VALUES (?1)", params![name])
            .context("Failed to seed format")?;
    }
    for name in DEFAULT_TOURNAMENT_TYPES {
        inserted += conn
            .execute("INSERT OR IGNORE INTO tournament_types (name) VALUES (?1)", params![name])
            .context("Failed to seed tournament type")?;
    }

    log::info!("Seeded {} reference rows", inserted);
    Ok(inserted)
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &mut DbConn, sql: &str) -> Result<()> {
    conn.execute(sql, [])
        .context("Failed to execute SQL statement")
        .map(|_| ())
}
