use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "league-tracker backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Create the database schema and seed formats and tournament types
    Init,
    /// Show the entry cost and prize for a tournament type and result
    Quote {
        /// Tournament type name, e.g. "Constructed League"
        tournament_type: String,
        /// Result as wins-losses, e.g. 3-2
        result: String,
    },
    /// Print the dashboard to the terminal
    Summary {
        /// Only count this user's tournaments
        #[arg(short, long)]
        user: Option<i64>,
        /// Only count tournaments of this team's members
        #[arg(short, long, conflicts_with = "user")]
        team: Option<i64>,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
