pub mod aggregator;
pub mod clock;
pub mod deck_ranker;

pub use aggregator::{aggregate, monthly_stats, recent_tournaments, MONTH_WINDOW};
pub use clock::{Clock, FixedClock, SystemClock};
pub use deck_ranker::{deck_stats, rank, summarize_decks};

/// Win percentage rounded to one decimal; 0 when no games were played.
pub fn percentage(wins: u64, losses: u64) -> f64 {
    if wins == 0 && losses == 0 {
        return 0.0;
    }
    let wins = wins as f64;
    round_to_tenth(100.0 * wins / (wins + losses as f64))
}

pub fn average(total: f64, count: usize) -> f64 {
    if count == 0 { 0.0 } else { total / count as f64 }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
