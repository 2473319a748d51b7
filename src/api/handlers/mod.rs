use std::sync::Arc;

use anyhow::Context;

use crate::config::settings::AppConfig;
use crate::database::{DbConn, DbPool};
use crate::stats::Clock;

use super::errors::ApiError;

pub mod dashboard;
pub mod decks;
pub mod economics;
pub mod reference;
pub mod teams;
pub mod tournaments;

pub struct AppState {
    pub pool: DbPool,
    pub config: AppConfig,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn connection(&self) -> Result<DbConn, ApiError> {
        self.pool
            .get()
            .context("DB Connection Error")
            .map_err(ApiError::Internal)
    }
}
