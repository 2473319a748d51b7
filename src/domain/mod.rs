pub mod category;
pub mod models;
pub mod result;

pub use category::TournamentCategory;
pub use models::*;
pub use result::{format_result, parse_result, MatchRecord};
