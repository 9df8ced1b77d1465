use crate::config::settings::ScoringSettings;
use crate::domain::{CandidatePool, Player, PreferredConditions};

/// Fantasy value of a single player. Pure: same inputs, same score.
pub fn score_player(
    player: &Player,
    conditions: &PreferredConditions,
    settings: &ScoringSettings,
) -> f64 {
    history_component(player, settings)
        + sentiment_component(player, settings)
        + conditions_component(player, conditions, settings)
}

fn history_component(player: &Player, settings: &ScoringSettings) -> f64 {
    mean(&player.past_runs) * settings.runs_weight
        + mean(&player.past_wickets) * settings.wickets_weight
}

fn sentiment_component(player: &Player, settings: &ScoringSettings) -> f64 {
    player.selection_percent * settings.selection_weight
        + player.captain_percent * settings.captain_weight
        + player.vice_captain_percent * settings.vice_captain_weight
}

fn conditions_component(
    player: &Player,
    conditions: &PreferredConditions,
    settings: &ScoringSettings,
) -> f64 {
    if conditions.favours(&player.role) {
        settings.conditions_bonus
    } else {
        0.0
    }
}

fn mean(values: &[u32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: f64 = values.iter().map(|&v| f64::from(v)).sum();
    sum / values.len() as f64
}

/// Scores for every pool position, computed once per request. Lineup
/// evaluation reads from here and never writes back to the players.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTable {
    scores: Vec<f64>,
}

impl ScoreTable {
    pub fn build(
        pool: &CandidatePool,
        conditions: &PreferredConditions,
        settings: &ScoringSettings,
    ) -> Self {
        let scores = pool
            .players()
            .map(|player| score_player(player, conditions, settings))
            .collect();
        Self { scores }
    }

    pub fn from_scores(scores: Vec<f64>) -> Self {
        Self { scores }
    }

    pub fn get(&self, position: usize) -> f64 {
        self.scores.get(position).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
