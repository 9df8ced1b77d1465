use crate::config::settings::RosterSettings;
use crate::domain::{Candidate, CandidatePool, Lineup, PlayerType};

/// Composition rules every valid lineup satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterRules {
    pub lineup_size: usize,
    pub max_per_side: usize,
    pub min_per_type: usize,
    pub max_per_type: usize,
}

impl Default for RosterRules {
    fn default() -> Self {
        Self::from(&RosterSettings::default())
    }
}

impl From<&RosterSettings> for RosterRules {
    fn from(settings: &RosterSettings) -> Self {
        Self {
            lineup_size: settings.lineup_size,
            max_per_side: settings.max_per_side,
            min_per_type: settings.min_per_type,
            max_per_type: settings.max_per_type,
        }
    }
}

impl RosterRules {
    pub fn is_valid(&self, pool: &CandidatePool, lineup: &Lineup) -> bool {
        let candidates = pool.candidates();
        let counts = lineup
            .positions()
            .filter_map(|position| candidates.get(position))
            .fold(RosterCounts::default(), |mut counts, candidate| {
                counts.add(candidate);
                counts
            });
        counts.total == lineup.len() && counts.satisfies(self)
    }

    pub fn is_valid_selection(&self, candidates: &[&Candidate]) -> bool {
        let mut counts = RosterCounts::default();
        for candidate in candidates {
            counts.add(candidate);
        }
        counts.satisfies(self)
    }
}

/// Running side and type tallies for a (possibly partial) lineup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RosterCounts {
    pub total: usize,
    pub sides: [usize; 2],
    pub types: [usize; 4],
}

impl RosterCounts {
    pub fn add(&mut self, candidate: &Candidate) {
        self.total += 1;
        self.sides[candidate.side.index()] += 1;
        self.types[candidate.player.player_type.index()] += 1;
    }

    pub fn remove(&mut self, candidate: &Candidate) {
        self.total -= 1;
        self.sides[candidate.side.index()] -= 1;
        self.types[candidate.player.player_type.index()] -= 1;
    }

    pub fn type_count(&self, player_type: PlayerType) -> usize {
        self.types[player_type.index()]
    }

    pub fn satisfies(&self, rules: &RosterRules) -> bool {
        self.total == rules.lineup_size
            && self.sides.iter().all(|&n| n <= rules.max_per_side)
            && self
                .types
                .iter()
                .all(|&n| (rules.min_per_type..=rules.max_per_type).contains(&n))
    }

    /// Whether `candidate` can join without breaking an upper bound.
    pub fn admits(&self, candidate: &Candidate, rules: &RosterRules) -> bool {
        self.total < rules.lineup_size
            && self.sides[candidate.side.index()] < rules.max_per_side
            && self.types[candidate.player.player_type.index()] < rules.max_per_type
    }

    /// Slots still needed to lift every type to its minimum.
    pub fn missing_type_slots(&self, rules: &RosterRules) -> usize {
        self.types
            .iter()
            .map(|&n| rules.min_per_type.saturating_sub(n))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Player, Side};
    use std::collections::HashMap;

    fn candidate(side: Side, player_type: PlayerType) -> Candidate {
        Candidate {
            side,
            player: Player {
                name: format!("{:?}-{}", side, player_type),
                team: format!("{:?}", side),
                player_type,
                role: "none".to_string(),
                past_runs: vec![],
                past_wickets: vec![],
                head_to_head: HashMap::new(),
                selection_percent: 0.0,
                captain_percent: 0.0,
                vice_captain_percent: 0.0,
            },
        }
    }

    fn balanced_eleven() -> Vec<Candidate> {
        let mut squad = vec![
            candidate(Side::First, PlayerType::WicketKeeper),
            candidate(Side::First, PlayerType::Batter),
            candidate(Side::Second, PlayerType::Batter),
            candidate(Side::Second, PlayerType::AllRounder),
        ];
        squad.extend((0..7).map(|i| {
            let side = if i % 2 == 0 { Side::First } else { Side::Second };
            candidate(side, PlayerType::Bowler)
        }));
        squad
    }

    #[test]
    fn test_balanced_eleven_is_valid() {
        let squad = balanced_eleven();
        let refs: Vec<&Candidate> = squad.iter().collect();
        assert!(RosterRules::default().is_valid_selection(&refs));
    }

    #[test]
    fn test_missing_type_is_invalid() {
        let mut squad = balanced_eleven();
        squad[0] = candidate(Side::First, PlayerType::Batter);
        let refs: Vec<&Candidate> = squad.iter().collect();
        assert!(!RosterRules::default().is_valid_selection(&refs));
    }

    #[test]
    fn test_nine_of_one_type_is_invalid() {
        let mut squad = balanced_eleven();
        squad[1] = candidate(Side::First, PlayerType::Bowler);
        squad[2] = candidate(Side::Second, PlayerType::Bowler);
        let refs: Vec<&Candidate> = squad.iter().collect();
        let rules = RosterRules::default();
        let mut counts = RosterCounts::default();
        refs.iter().for_each(|c| counts.add(c));
        assert_eq!(counts.type_count(PlayerType::Bowler), 9);
        assert!(!rules.is_valid_selection(&refs));
    }

    #[test]
    fn test_eleven_from_one_side_is_invalid() {
        let squad: Vec<Candidate> = balanced_eleven()
            .into_iter()
            .map(|c| candidate(Side::First, c.player.player_type))
            .collect();
        let refs: Vec<&Candidate> = squad.iter().collect();
        assert!(!RosterRules::default().is_valid_selection(&refs));
    }

    #[test]
    fn test_wrong_size_is_invalid() {
        let squad = balanced_eleven();
        let refs: Vec<&Candidate> = squad.iter().take(10).collect();
        assert!(!RosterRules::default().is_valid_selection(&refs));
    }

    #[test]
    fn test_counts_admit_and_remove() {
        let rules = RosterRules::default();
        let keeper = candidate(Side::First, PlayerType::WicketKeeper);
        let mut counts = RosterCounts::default();
        assert_eq!(counts.missing_type_slots(&rules), 4);
        counts.add(&keeper);
        assert_eq!(counts.missing_type_slots(&rules), 3);
        assert!(counts.admits(&keeper, &rules));
        counts.remove(&keeper);
        assert_eq!(counts, RosterCounts::default());
    }
}
