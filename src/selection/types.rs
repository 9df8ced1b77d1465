use crate::domain::Lineup;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedPlayer {
    pub position: usize,
    pub score: f64,
}

/// A lineup with its members ranked by score, best first.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredLineup {
    pub lineup: Lineup,
    pub ranked: Vec<RankedPlayer>,
    pub total: f64,
}

impl ScoredLineup {
    pub fn captain(&self) -> Option<&RankedPlayer> {
        self.ranked.first()
    }

    pub fn vice_captain(&self) -> Option<&RankedPlayer> {
        self.ranked.get(1)
    }
}

/// Best and worst lineups of a request. `top` runs best first and `bottom`
/// worst first; they share lineups when fewer than `2 * top_n` exist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    pub top: Vec<ScoredLineup>,
    pub bottom: Vec<ScoredLineup>,
    pub evaluated: usize,
}
