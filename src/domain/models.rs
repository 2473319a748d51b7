use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::TournamentCategory;
use super::result::MatchRecord;

/// Rewards paid out for a single tournament run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prize {
    pub play_points: u32,
    pub chests: u32,
    pub qps: u32,
}

impl Prize {
    pub const ZERO: Prize = Prize {
        play_points: 0,
        chests: 0,
        qps: 0,
    };
}

/// A logged tournament with its derived cost and prizes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentRecord {
    pub id: i64,
    pub tournament_type_id: i64,
    pub tournament_type: String,
    pub category: TournamentCategory,
    pub deck_id: i64,
    pub deck: String,
    pub date: NaiveDate,
    pub cost: f64,
    pub wins: u32,
    pub losses: u32,
    pub prize_play_points: u32,
    pub prize_chests: u32,
    pub prize_qps: u32,
    pub notes: Option<String>,
    pub owner_user_id: Option<i64>,
}

impl TournamentRecord {
    pub fn record(&self) -> MatchRecord {
        MatchRecord::new(self.wins, self.losses)
    }

    pub fn prize(&self) -> Prize {
        Prize {
            play_points: self.prize_play_points,
            chests: self.prize_chests,
            qps: self.prize_qps,
        }
    }

    pub fn profit(&self) -> f64 {
        self.prize_play_points as f64 - self.cost
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    pub id: i64,
    pub name: String,
    pub format_id: i64,
    pub format: String,
    pub description: Option<String>,
    pub owner_user_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Format {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TournamentType {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub team_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
}

/// Wins, losses and profit of one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyBucket {
    pub name: String,
    pub wins: u64,
    pub losses: u64,
    pub profit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_tournaments: usize,
    pub win_rate: f64,
    pub total_spent: f64,
    pub total_prizes: f64,
    pub total_profit: f64,
    pub avg_profit: f64,
    pub monthly_stats: Vec<MonthlyBucket>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckSummary {
    pub deck_id: i64,
    pub name: String,
    pub format: String,
    pub tournament_count: usize,
    pub wins: u64,
    pub losses: u64,
    pub win_rate: f64,
    pub avg_profit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckStats {
    pub deck_id: i64,
    pub tournament_count: usize,
    pub wins: u64,
    pub losses: u64,
    pub win_rate: f64,
    pub total_cost: f64,
    pub total_prize: f64,
    pub total_profit: f64,
    pub avg_profit: f64,
    pub recent_tournaments: Vec<TournamentRecord>,
}
