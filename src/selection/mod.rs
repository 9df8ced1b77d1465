pub mod enumerator;
pub mod ranking;
pub mod roster;
pub mod scorer;
pub mod types;

pub use enumerator::{Deadline, EnumerationStrategy, ExhaustiveEnumerator, LineupEnumerator, PruningEnumerator};
pub use ranking::{evaluate_lineup, rank_lineups, weighted_total};
pub use roster::{RosterCounts, RosterRules};
pub use scorer::{ScoreTable, score_player};
pub use types::{RankedPlayer, Ranking, ScoredLineup};
