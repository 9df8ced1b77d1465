use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Playing type of a cricketer. Every valid lineup fields all four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerType {
    #[serde(rename = "WK")]
    WicketKeeper,
    #[serde(rename = "BAT")]
    Batter,
    #[serde(rename = "ALLROUNDER")]
    AllRounder,
    #[serde(rename = "BOWLER")]
    Bowler,
}

impl PlayerType {
    pub const ALL: [PlayerType; 4] = [
        PlayerType::WicketKeeper,
        PlayerType::Batter,
        PlayerType::AllRounder,
        PlayerType::Bowler,
    ];

    /// Dense index into per-type counters.
    pub fn index(self) -> usize {
        match self {
            PlayerType::WicketKeeper => 0,
            PlayerType::Batter => 1,
            PlayerType::AllRounder => 2,
            PlayerType::Bowler => 3,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PlayerType::WicketKeeper => "WK",
            PlayerType::Batter => "BAT",
            PlayerType::AllRounder => "ALLROUNDER",
            PlayerType::Bowler => "BOWLER",
        }
    }
}

impl fmt::Display for PlayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which submitted team list a player came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// Candidate player as submitted by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub team: String,
    #[serde(rename = "type")]
    pub player_type: PlayerType,
    pub role: String,
    pub past_runs: Vec<u32>,
    pub past_wickets: Vec<u32>,
    /// Per-opponent stat lines. Carried through, not scored.
    #[serde(default)]
    pub head_to_head: HashMap<String, HashMap<String, i64>>,
    pub selection_percent: f64,
    pub captain_percent: f64,
    pub vice_captain_percent: f64,
}

/// Situational bias for a request. `good_for` names the role that earns the
/// conditions bonus; any other keys are accepted and ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferredConditions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub good_for: Option<String>,
    #[serde(flatten)]
    pub other: HashMap<String, String>,
}

impl PreferredConditions {
    pub fn good_for(role: impl Into<String>) -> Self {
        Self {
            good_for: Some(role.into()),
            other: HashMap::new(),
        }
    }

    pub fn favours(&self, role: &str) -> bool {
        self.good_for.as_deref() == Some(role)
    }
}
