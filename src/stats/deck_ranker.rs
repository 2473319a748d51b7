use std::collections::HashMap;

use crate::domain::{Deck, DeckStats, DeckSummary, TournamentRecord};

use super::aggregator::recent_tournaments;
use super::{average, percentage};

/// Summaries for every deck, including decks never played, ordered by name.
pub fn summarize_decks(decks: &[Deck], records: &[TournamentRecord]) -> Vec<DeckSummary> {
    let mut by_deck: HashMap<i64, Vec<&TournamentRecord>> = HashMap::new();
    for record in records {
        by_deck.entry(record.deck_id).or_default().push(record);
    }

    let mut summaries: Vec<DeckSummary> = decks
        .iter()
        .map(|deck| {
            let played = by_deck.get(&deck.id).map(Vec::as_slice).unwrap_or(&[]);
            summarize(deck, played)
        })
        .collect();

    summaries.sort_by(|a, b| a.name.cmp(&b.name).then(a.deck_id.cmp(&b.deck_id)));
    summaries
}

fn summarize(deck: &Deck, played: &[&TournamentRecord]) -> DeckSummary {
    let wins: u64 = played.iter().map(|r| u64::from(r.wins)).sum();
    let losses: u64 = played.iter().map(|r| u64::from(r.losses)).sum();
    let profit: f64 = played.iter().map(|r| r.profit()).sum();

    DeckSummary {
        deck_id: deck.id,
        name: deck.name.clone(),
        format: deck.format.clone(),
        tournament_count: played.len(),
        wins,
        losses,
        win_rate: percentage(wins, losses),
        avg_profit: average(profit, played.len()),
    }
}

/// Most played decks first; equal counts fall back to the lower deck id.
pub fn rank(summaries: &[DeckSummary], limit: usize) -> Vec<DeckSummary> {
    let mut ranked: Vec<DeckSummary> = summaries
        .iter()
        .filter(|s| s.tournament_count > 0)
        .cloned()
        .collect();

    ranked.sort_by(|a, b| {
        b.tournament_count
            .cmp(&a.tournament_count)
            .then(a.deck_id.cmp(&b.deck_id))
    });
    ranked.truncate(limit);
    ranked
}

pub fn deck_stats(deck_id: i64, records: &[TournamentRecord], recent_limit: usize) -> DeckStats {
    let played: Vec<TournamentRecord> = records
        .iter()
        .filter(|r| r.deck_id == deck_id)
        .cloned()
        .collect();

    let wins: u64 = played.iter().map(|r| u64::from(r.wins)).sum();
    let losses: u64 = played.iter().map(|r| u64::from(r.losses)).sum();
    let total_cost: f64 = played.iter().map(|r| r.cost).sum();
    let total_prize: f64 = played.iter().map(|r| r.prize_play_points as f64).sum();
    let total_profit = total_prize - total_cost;

    DeckStats {
        deck_id,
        tournament_count: played.len(),
        wins,
        losses,
        win_rate: percentage(wins, losses),
        total_cost,
        total_prize,
        total_profit,
        avg_profit: average(total_profit, played.len()),
        recent_tournaments: recent_tournaments(&played, recent_limit),
    }
}
