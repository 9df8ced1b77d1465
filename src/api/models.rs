use serde::{Deserialize, Serialize};

use crate::domain::{Player, PreferredConditions};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateTeamsRequest {
    pub team1_players: Vec<Player>,
    pub team2_players: Vec<Player>,
    pub preferred_conditions: PreferredConditions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedLineup {
    pub score: f64,
    pub players: Vec<String>,
    pub captain: String,
    pub vice_captain: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateTeamsResponse {
    pub top_teams: Vec<FormattedLineup>,
    pub low_teams: Vec<FormattedLineup>,
}

#[derive(Debug, Serialize)]
pub struct StatusMessage {
    pub message: String,
}
