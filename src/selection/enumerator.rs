use std::time::{Duration, Instant};

use itertools::Itertools;
use log::debug;

use super::roster::{RosterCounts, RosterRules};
use crate::domain::{CandidatePool, Lineup, MAX_POOL_CAPACITY, PlayerType};
use crate::errors::SelectionError;

const DEADLINE_CHECK_INTERVAL: u64 = 4096;

/// Wall-clock budget for one enumeration.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    started: Instant,
    limit: Option<Duration>,
}

impl Deadline {
    pub fn none() -> Self {
        Self {
            started: Instant::now(),
            limit: None,
        }
    }

    pub fn after(limit: Duration) -> Self {
        Self {
            started: Instant::now(),
            limit: Some(limit),
        }
    }

    pub fn from_option(limit: Option<Duration>) -> Self {
        limit.map_or_else(Self::none, Self::after)
    }

    /// Checked every few thousand candidates so the clock stays off the hot path.
    fn check(&self, examined: u64) -> Result<(), SelectionError> {
        let Some(limit) = self.limit else {
            return Ok(());
        };
        if examined % DEADLINE_CHECK_INTERVAL == 0 && self.started.elapsed() >= limit {
            return Err(SelectionError::DeadlineExceeded {
                deadline: limit,
                examined,
            });
        }
        Ok(())
    }
}

/// Which enumerator a request runs with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum EnumerationStrategy {
    #[default]
    Exhaustive,
    Pruning,
}

impl EnumerationStrategy {
    pub fn enumerator(self) -> Box<dyn LineupEnumerator + Send + Sync> {
        match self {
            EnumerationStrategy::Exhaustive => Box::new(ExhaustiveEnumerator),
            EnumerationStrategy::Pruning => Box::new(PruningEnumerator),
        }
    }
}

/// Produces every valid lineup of a pool, in lexicographic order of pool
/// positions. Implementations must agree on both the set and the order.
pub trait LineupEnumerator {
    fn enumerate(
        &self,
        pool: &CandidatePool,
        rules: &RosterRules,
        deadline: &Deadline,
    ) -> Result<Vec<Lineup>, SelectionError>;
}

fn ensure_capacity(pool: &CandidatePool) -> Result<(), SelectionError> {
    if pool.len() > MAX_POOL_CAPACITY {
        return Err(SelectionError::PoolTooLarge {
            size: pool.len(),
            max: MAX_POOL_CAPACITY,
        });
    }
    Ok(())
}

/// Generates every combination and filters it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveEnumerator;

impl LineupEnumerator for ExhaustiveEnumerator {
    fn enumerate(
        &self,
        pool: &CandidatePool,
        rules: &RosterRules,
        deadline: &Deadline,
    ) -> Result<Vec<Lineup>, SelectionError> {
        ensure_capacity(pool)?;
        if pool.len() < rules.lineup_size {
            return Ok(Vec::new());
        }

        let candidates = pool.candidates();
        let mut lineups = Vec::new();
        let mut examined = 0u64;

        for combination in (0..pool.len()).combinations(rules.lineup_size) {
            examined += 1;
            deadline.check(examined)?;

            let selection: Vec<_> = combination.iter().map(|&p| &candidates[p]).collect();
            if rules.is_valid_selection(&selection) {
                lineups.push(Lineup::from_positions(combination));
            }
        }

        debug!(
            "Exhaustive enumeration examined {} combinations, kept {}",
            examined,
            lineups.len()
        );
        Ok(lineups)
    }
}

/// Depth-first search that drops partial rosters once they can no longer
/// become valid.
#[derive(Debug, Clone, Copy, Default)]
pub struct PruningEnumerator;

struct Search<'a> {
    pool: &'a CandidatePool,
    rules: &'a RosterRules,
    deadline: &'a Deadline,
    /// `remaining_types[i][t]`: players of type `t` at positions `i..`.
    remaining_types: Vec<[usize; 4]>,
    counts: RosterCounts,
    mask: u64,
    visited: u64,
    lineups: Vec<Lineup>,
}

impl Search<'_> {
    fn visit(&mut self, position: usize) -> Result<(), SelectionError> {
        self.visited += 1;
        self.deadline.check(self.visited)?;

        let needed = self.rules.lineup_size - self.counts.total;
        if needed == 0 {
            if self.counts.satisfies(self.rules) {
                self.lineups.push(Lineup::from_mask(self.mask));
            }
            return Ok(());
        }
        if self.pool.len() - position < needed || !self.can_complete(position, needed) {
            return Ok(());
        }

        let pool = self.pool;
        let candidate = &pool.candidates()[position];
        if self.counts.admits(candidate, self.rules) {
            self.counts.add(candidate);
            self.mask |= 1u64 << position;
            self.visit(position + 1)?;
            self.mask &= !(1u64 << position);
            self.counts.remove(candidate);
        }

        self.visit(position + 1)
    }

    fn can_complete(&self, position: usize, needed: usize) -> bool {
        if self.counts.missing_type_slots(self.rules) > needed {
            return false;
        }
        let remaining = &self.remaining_types[position];
        PlayerType::ALL.iter().all(|&t| {
            self.counts.type_count(t) + remaining[t.index()] >= self.rules.min_per_type
        })
    }
}

fn suffix_type_counts(pool: &CandidatePool) -> Vec<[usize; 4]> {
    let mut suffix = vec![[0usize; 4]; pool.len() + 1];
    for (position, candidate) in pool.candidates().iter().enumerate().rev() {
        suffix[position] = suffix[position + 1];
        suffix[position][candidate.player.player_type.index()] += 1;
    }
    suffix
}

impl LineupEnumerator for PruningEnumerator {
    fn enumerate(
        &self,
        pool: &CandidatePool,
        rules: &RosterRules,
        deadline: &Deadline,
    ) -> Result<Vec<Lineup>, SelectionError> {
        ensure_capacity(pool)?;
        if pool.len() < rules.lineup_size {
            return Ok(Vec::new());
        }

        let mut search = Search {
            pool,
            rules,
            deadline,
            remaining_types: suffix_type_counts(pool),
            counts: RosterCounts::default(),
            mask: 0,
            visited: 0,
            lineups: Vec::new(),
        };
        search.visit(0)?;

        debug!(
            "Pruning enumeration visited {} nodes, kept {}",
            search.visited,
            search.lineups.len()
        );
        Ok(search.lineups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Player, Side};
    use std::collections::HashMap;

    fn player(name: &str, team: &str, player_type: PlayerType) -> Player {
        Player {
            name: name.to_string(),
            team: team.to_string(),
            player_type,
            role: "none".to_string(),
            past_runs: vec![],
            past_wickets: vec![],
            head_to_head: HashMap::new(),
            selection_percent: 0.0,
            captain_percent: 0.0,
            vice_captain_percent: 0.0,
        }
    }

    /// Eleven team 1 players (keeper, batter, all-rounder, eight bowlers) and
    /// one team 2 bowler. Leaving out the visitor puts eleven on one side and
    /// leaving out a specialist drops a type, so only the eight single-bowler
    /// omissions are valid.
    fn eight_lineup_pool() -> CandidatePool {
        let mut first = vec![
            player("keeper", "Team1", PlayerType::WicketKeeper),
            player("batter", "Team1", PlayerType::Batter),
            player("allrounder", "Team1", PlayerType::AllRounder),
        ];
        first.extend((0..8).map(|i| player(&format!("bowler{}", i), "Team1", PlayerType::Bowler)));
        let second = vec![player("visitor", "Team2", PlayerType::Bowler)];
        CandidatePool::new(first, second)
    }

    fn mixed_pool() -> CandidatePool {
        let types = [
            PlayerType::WicketKeeper,
            PlayerType::Batter,
            PlayerType::Batter,
            PlayerType::AllRounder,
            PlayerType::Bowler,
            PlayerType::Bowler,
            PlayerType::Bowler,
        ];
        let first = types
            .iter()
            .enumerate()
            .map(|(i, &t)| player(&format!("a{}", i), "Team1", t))
            .collect();
        let second = types
            .iter()
            .rev()
            .enumerate()
            .map(|(i, &t)| player(&format!("b{}", i), "Team2", t))
            .collect();
        CandidatePool::new(first, second)
    }

    #[test]
    fn test_exhaustive_finds_exactly_the_valid_lineups() {
        let pool = eight_lineup_pool();
        let lineups = ExhaustiveEnumerator
            .enumerate(&pool, &RosterRules::default(), &Deadline::none())
            .unwrap();

        assert_eq!(lineups.len(), 8);
        let visitor = 11;
        for (k, lineup) in lineups.iter().enumerate() {
            assert!(lineup.contains(visitor));
            assert!((0..3).all(|p| lineup.contains(p)));
            // Lexicographic order omits the last bowler first.
            assert!(!lineup.contains(10 - k));
        }
    }

    #[test]
    fn test_every_lineup_satisfies_roster_rules() {
        let pool = mixed_pool();
        let rules = RosterRules::default();
        let lineups = ExhaustiveEnumerator
            .enumerate(&pool, &rules, &Deadline::none())
            .unwrap();

        assert!(!lineups.is_empty());
        for lineup in &lineups {
            assert_eq!(lineup.len(), 11);
            let mut counts = RosterCounts::default();
            for position in lineup.positions() {
                counts.add(&pool.candidates()[position]);
            }
            assert!(counts.sides.iter().all(|&n| n <= 10));
            assert!(counts.types.iter().all(|&n| (1..=8).contains(&n)));
            assert!(rules.is_valid(&pool, lineup));
        }
    }

    #[test]
    fn test_pruning_matches_exhaustive() {
        let rules = RosterRules::default();
        for pool in [eight_lineup_pool(), mixed_pool()] {
            let exhaustive = ExhaustiveEnumerator
                .enumerate(&pool, &rules, &Deadline::none())
                .unwrap();
            let pruned = PruningEnumerator
                .enumerate(&pool, &rules, &Deadline::none())
                .unwrap();
            assert_eq!(exhaustive, pruned);
        }
    }

    #[test]
    fn test_small_pool_yields_nothing() {
        let first = (0..6).map(|i| player(&format!("p{}", i), "Team1", PlayerType::Bowler)).collect();
        let second = (0..4).map(|i| player(&format!("q{}", i), "Team2", PlayerType::Batter)).collect();
        let pool = CandidatePool::new(first, second);
        let rules = RosterRules::default();
        assert!(ExhaustiveEnumerator.enumerate(&pool, &rules, &Deadline::none()).unwrap().is_empty());
        assert!(PruningEnumerator.enumerate(&pool, &rules, &Deadline::none()).unwrap().is_empty());
    }

    #[test]
    fn test_unsatisfiable_types_yield_nothing() {
        let first = (0..11).map(|i| player(&format!("p{}", i), "Team1", PlayerType::Bowler)).collect();
        let second = (0..11).map(|i| player(&format!("q{}", i), "Team2", PlayerType::Batter)).collect();
        let pool = CandidatePool::new(first, second);
        let lineups = PruningEnumerator
            .enumerate(&pool, &RosterRules::default(), &Deadline::none())
            .unwrap();
        assert!(lineups.is_empty());
    }

    #[test]
    fn test_side_is_taken_from_submission_list() {
        let pool = eight_lineup_pool();
        assert_eq!(pool.get(11).map(|c| c.side), Some(Side::Second));
    }

    #[test]
    fn test_expired_deadline_aborts() {
        let first = (0..11)
            .map(|i| player(&format!("p{}", i), "Team1", PlayerType::ALL[i % 4]))
            .collect();
        let second = (0..11)
            .map(|i| player(&format!("q{}", i), "Team2", PlayerType::ALL[i % 4]))
            .collect();
        let pool = CandidatePool::new(first, second);
        let deadline = Deadline::after(Duration::ZERO);

        let result = ExhaustiveEnumerator.enumerate(&pool, &RosterRules::default(), &deadline);
        assert!(matches!(result, Err(SelectionError::DeadlineExceeded { .. })));
    }
}
