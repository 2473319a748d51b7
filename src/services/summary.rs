use anyhow::Result;
use colored::Colorize;

use crate::config::settings::AppConfig;
use crate::database::{self, RecordScope};
use crate::stats::Clock;

use super::dashboard::{build_dashboard, Dashboard};

/// Prints the dashboard to the terminal.
pub struct SummaryService {
    config: AppConfig,
    database_path: String,
}

impl SummaryService {
    pub fn new(config: AppConfig, database_path: String) -> Self {
        Self {
            config,
            database_path,
        }
    }

    pub fn run(&self, scope: RecordScope, clock: &dyn Clock) -> Result<()> {
        let pool = database::open(&self.database_path)?;
        let mut conn = database::get_connection(&pool)?;

        let dashboard = build_dashboard(&mut conn, &self.config, scope, clock.today())?;
        print!("{}", render(&dashboard));
        Ok(())
    }
}

pub fn render(dashboard: &Dashboard) -> String {
    let stats = &dashboard.stats;
    let mut out = String::new();

    out.push_str(&format!("{}\n", "League Tracker".bold()));
    out.push_str(&format!("  Tournaments   {}\n", stats.total_tournaments));
    out.push_str(&format!("  Win rate      {:.1}%\n", stats.win_rate));
    out.push_str(&format!("  Total spent   PP {:.2}\n", stats.total_spent));
    out.push_str(&format!("  Total prizes  PP {:.2}\n", stats.total_prizes));
    out.push_str(&format!("  Profit        {}\n", signed(stats.total_profit)));

    out.push_str(&format!("\n{}\n", "Monthly".bold()));
    for bucket in &stats.monthly_stats {
        out.push_str(&format!(
            "  {:<4} {:>3}-{:<3} {}\n",
            bucket.name,
            bucket.wins,
            bucket.losses,
            signed(bucket.profit)
        ));
    }

    if !dashboard.deck_performance.is_empty() {
        out.push_str(&format!("\n{}\n", "Deck performance".bold()));
        for deck in &dashboard.deck_performance {
            out.push_str(&format!(
                "  {:<24} {:>3} played  {:>5.1}%\n",
                deck.name, deck.tournament_count, deck.win_rate
            ));
        }
    }

    if !dashboard.recent_tournaments.is_empty() {
        out.push_str(&format!("\n{}\n", "Recent".bold()));
        for t in &dashboard.recent_tournaments {
            out.push_str(&format!(
                "  {} {:<20} {:<16} {}-{} {}\n",
                t.date,
                t.tournament_type,
                t.deck,
                t.wins,
                t.losses,
                signed(t.profit())
            ));
        }
    }

    out
}

fn signed(value: f64) -> String {
    let text = format!("{:+.2}", value);
    if value < 0.0 {
        text.red().to_string()
    } else {
        text.green().to_string()
    }
}
