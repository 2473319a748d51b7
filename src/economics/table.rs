use serde::{Deserialize, Serialize};

use crate::domain::{Prize, TournamentCategory};

/// Entry cost per tournament category, in play points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CostTable {
    pub league: f64,
    pub preliminary: f64,
    pub challenge_32: f64,
    pub challenge_64: f64,
    pub challenge: f64,
    pub other: f64,
}

impl Default for CostTable {
    fn default() -> Self {
        Self {
            league: 100.0,
            preliminary: 200.0,
            challenge_32: 250.0,
            challenge_64: 300.0,
            challenge: 0.0,
            other: 0.0,
        }
    }
}

impl CostTable {
    pub fn for_category(&self, category: TournamentCategory) -> f64 {
        match category {
            TournamentCategory::League => self.league,
            TournamentCategory::Preliminary => self.preliminary,
            TournamentCategory::Challenge32 => self.challenge_32,
            TournamentCategory::Challenge64 => self.challenge_64,
            TournamentCategory::Challenge => self.challenge,
            TournamentCategory::Other => self.other,
        }
    }
}

/// Payout for finishing a league with exactly `wins` wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrizeTier {
    pub wins: u32,
    pub play_points: u32,
    pub chests: u32,
    pub qps: u32,
}

impl PrizeTier {
    pub const fn new(wins: u32, play_points: u32, chests: u32, qps: u32) -> Self {
        Self {
            wins,
            play_points,
            chests,
            qps,
        }
    }

    pub fn prize(&self) -> Prize {
        Prize {
            play_points: self.play_points,
            chests: self.chests,
            qps: self.qps,
        }
    }
}

/// Seasonal economics: what each category costs and what leagues pay out.
///
/// Only leagues have a payout curve. Preliminaries and challenges pay nothing
/// until a structure for them is configured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EconomicsTable {
    pub costs: CostTable,
    pub league_prizes: Vec<PrizeTier>,
}

impl Default for EconomicsTable {
    fn default() -> Self {
        Self {
            costs: CostTable::default(),
            league_prizes: vec![
                PrizeTier::new(5, 150, 10, 3),
                PrizeTier::new(4, 120, 5, 2),
                PrizeTier::new(3, 100, 1, 1),
            ],
        }
    }
}

impl EconomicsTable {
    /// Wins beyond the best tier pay the same as the best tier.
    pub fn league_win_cap(&self) -> u32 {
        self.league_prizes
            .iter()
            .map(|tier| tier.wins)
            .max()
            .unwrap_or(0)
    }

    pub fn league_prize(&self, wins: u32) -> Prize {
        let capped = wins.min(self.league_win_cap());
        self.league_prizes
            .iter()
            .find(|tier| tier.wins == capped)
            .map(PrizeTier::prize)
            .unwrap_or(Prize::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_league_tiers() {
        let table = EconomicsTable::default();
        assert_eq!(table.league_win_cap(), 5);
        assert_eq!(table.league_prize(4), Prize { play_points: 120, chests: 5, qps: 2 });
        assert_eq!(table.league_prize(3), Prize { play_points: 100, chests: 1, qps: 1 });
        assert_eq!(table.league_prize(2), Prize::ZERO);
        assert_eq!(table.league_prize(0), Prize::ZERO);
    }

    #[test]
    fn test_empty_tier_list_pays_nothing() {
        let table = EconomicsTable {
            league_prizes: Vec::new(),
            ..EconomicsTable::default()
        };
        assert_eq!(table.league_prize(5), Prize::ZERO);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let table: EconomicsTable =
            serde_json::from_str(r#"{"costs": {"league": 120.0}}"#).unwrap();
        assert_eq!(table.costs.league, 120.0);
        assert_eq!(table.costs.preliminary, 200.0);
        assert_eq!(table.league_prizes, EconomicsTable::default().league_prizes);
    }

    #[test]
    fn test_config_keys_are_camel_case() {
        let json = serde_json::to_value(EconomicsTable::default()).unwrap();
        assert_eq!(json["costs"]["challenge32"], 250.0);
        assert_eq!(json["costs"]["challenge64"], 300.0);
        assert!(json["costs"].get("challenge_32").is_none());
        assert!(json.get("leaguePrizes").is_some());

        let table: EconomicsTable =
            serde_json::from_str(r#"{"costs": {"challenge32": 275.0}}"#).unwrap();
        assert_eq!(table.costs.challenge_32, 275.0);
        assert_eq!(table.costs.challenge_64, 300.0);
    }

    #[test]
    fn test_json_replaces_prize_curve() {
        let json = r#"{
            "leaguePrizes": [
                {"wins": 7, "playPoints": 300, "chests": 20, "qps": 5},
                {"wins": 6, "playPoints": 200, "chests": 10, "qps": 2}
            ]
        }"#;
        let table: EconomicsTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.league_win_cap(), 7);
        assert_eq!(table.league_prize(9).play_points, 300);
        assert_eq!(table.league_prize(5), Prize::ZERO);
    }
}
