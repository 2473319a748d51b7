use serde::Serialize;

use crate::domain::{MatchRecord, Prize, TournamentCategory};
use crate::errors::ValidationError;

use super::table::EconomicsTable;

/// Cost and payout derived for one tournament entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub category: TournamentCategory,
    pub cost: f64,
    pub prize: Prize,
}

impl Assessment {
    pub fn profit(&self) -> f64 {
        self.prize.play_points as f64 - self.cost
    }
}

/// Pure cost/prize rules over an [`EconomicsTable`].
#[derive(Debug, Clone, Copy)]
pub struct EconomicsEngine<'a> {
    table: &'a EconomicsTable,
}

impl<'a> EconomicsEngine<'a> {
    pub fn new(table: &'a EconomicsTable) -> Self {
        Self { table }
    }

    pub fn cost(&self, category: TournamentCategory) -> f64 {
        self.table.costs.for_category(category)
    }

    pub fn prize(&self, category: TournamentCategory, record: MatchRecord) -> Prize {
        match category {
            TournamentCategory::League => self.table.league_prize(record.wins),
            _ => Prize::ZERO,
        }
    }

    pub fn compute_cost(&self, type_name: &str) -> f64 {
        self.cost(TournamentCategory::classify(type_name))
    }

    pub fn compute_prize(
        &self,
        type_name: &str,
        wins: i64,
        losses: i64,
    ) -> Result<Prize, ValidationError> {
        let record = checked_record(wins, losses)?;
        Ok(self.prize(TournamentCategory::classify(type_name), record))
    }

    pub fn assess(&self, type_name: &str, record: MatchRecord) -> Assessment {
        let category = TournamentCategory::classify(type_name);
        Assessment {
            category,
            cost: self.cost(category),
            prize: self.prize(category, record),
        }
    }
}

fn checked_record(wins: i64, losses: i64) -> Result<MatchRecord, ValidationError> {
    Ok(MatchRecord::new(
        checked_count("wins", wins)?,
        checked_count("losses", losses)?,
    ))
}

fn checked_count(field: &'static str, value: i64) -> Result<u32, ValidationError> {
    if value < 0 {
        return Err(ValidationError::Negative {
            field,
            value: value as f64,
        });
    }
    u32::try_from(value).map_err(|_| ValidationError::TooLarge {
        field,
        value: value as f64,
        max: u32::MAX,
    })
}
