use super::models::{Player, Side};

/// Upper bound on pool size imposed by the lineup bitmask.
pub const MAX_POOL_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub side: Side,
    pub player: Player,
}

/// Combined player pool for one request. Team 1 players come first, then
/// team 2, each in submission order; that order breaks every tie.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidatePool {
    candidates: Vec<Candidate>,
}

impl CandidatePool {
    pub fn new(first: Vec<Player>, second: Vec<Player>) -> Self {
        let candidates = first
            .into_iter()
            .map(|player| Candidate { side: Side::First, player })
            .chain(second.into_iter().map(|player| Candidate { side: Side::Second, player }))
            .collect();
        Self { candidates }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Candidate> {
        self.candidates.get(position)
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.candidates.iter().map(|c| &c.player)
    }

    pub fn name_of(&self, position: usize) -> Option<&str> {
        self.get(position).map(|c| c.player.name.as_str())
    }
}

/// A selection of pool positions, stored as a bitmask over the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Lineup {
    mask: u64,
}

impl Lineup {
    /// Builds a lineup from pool positions. Positions must be below
    /// [`MAX_POOL_CAPACITY`]; duplicates collapse.
    pub fn from_positions<I: IntoIterator<Item = usize>>(positions: I) -> Self {
        let mask = positions
            .into_iter()
            .fold(0u64, |mask, position| mask | (1u64 << position));
        Self { mask }
    }

    pub(crate) fn from_mask(mask: u64) -> Self {
        Self { mask }
    }

    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    pub fn contains(&self, position: usize) -> bool {
        position < MAX_POOL_CAPACITY && self.mask & (1u64 << position) != 0
    }

    /// Member positions in ascending pool order.
    pub fn positions(&self) -> Positions {
        Positions { remaining: self.mask }
    }
}

pub struct Positions {
    remaining: u64,
}

impl Iterator for Positions {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let position = self.remaining.trailing_zeros() as usize;
        self.remaining &= self.remaining - 1;
        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Positions {}
