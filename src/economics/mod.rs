pub mod engine;
pub mod table;

pub use engine::{Assessment, EconomicsEngine};
pub use table::{CostTable, EconomicsTable, PrizeTier};
