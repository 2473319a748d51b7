pub mod connection;
pub mod decks;
pub mod models;
pub mod reference;
pub mod setup;
pub mod teams;
pub mod tournaments;
pub mod users;

pub use connection::{create_memory_pool, create_pool, get_connection, DbConn, DbPool};
pub use models::*;

use anyhow::Result;

/// Open the database at `path`, creating missing tables.
pub fn open(path: &str) -> Result<DbPool> {
    let pool = create_pool(path)?;
    let mut conn = get_connection(&pool)?;
    setup::initialize_database(&mut conn)?;
    Ok(pool)
}
