use anyhow::{Context, Result};
use log::info;

use crate::economics::EconomicsTable;

pub const DEFAULT_DATABASE_PATH: &str = "league_tracker.db";

#[derive(Debug, Clone)]
pub struct DashboardSettings {
    pub recent_limit: usize,
    pub deck_recent_limit: usize,
    pub leaderboard_size: usize,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            recent_limit: 4,
            deck_recent_limit: 5,
            leaderboard_size: 5,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub economics: EconomicsTable,
    pub dashboard: DashboardSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, with the economics table replaced by the JSON file named in
    /// `ECONOMICS_CONFIG` when that variable is set.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new();
        if let Ok(path) = std::env::var("ECONOMICS_CONFIG") {
            config.economics = load_economics(&path)?;
            info!("Loaded economics table from {}", path);
        }
        Ok(config)
    }
}

pub fn load_economics(path: &str) -> Result<EconomicsTable> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read economics config {}", path))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse economics config {}", path))
}

pub fn database_path() -> String {
    std::env::var("DATABASE_PATH").unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string())
}
