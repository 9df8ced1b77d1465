pub mod models;
pub mod pool;

pub use models::{Player, PlayerType, PreferredConditions, Side};
pub use pool::{Candidate, CandidatePool, Lineup, MAX_POOL_CAPACITY};
