use std::time::Duration;

use log::warn;

use crate::selection::EnumerationStrategy;

#[derive(Debug, Clone)]
pub struct ScoringSettings {
    pub runs_weight: f64,
    pub wickets_weight: f64,
    pub selection_weight: f64,
    pub captain_weight: f64,
    pub vice_captain_weight: f64,
    pub conditions_bonus: f64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            runs_weight: 1.0,
            wickets_weight: 20.0,
            selection_weight: 0.1,
            captain_weight: 0.2,
            vice_captain_weight: 0.15,
            conditions_bonus: 5.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RosterSettings {
    pub lineup_size: usize,
    pub max_per_side: usize,
    pub min_per_type: usize,
    pub max_per_type: usize,
    /// Largest combined pool accepted by the boundary. C(n, 11) grows fast.
    pub max_pool_size: usize,
    pub strategy: EnumerationStrategy,
}

impl Default for RosterSettings {
    fn default() -> Self {
        Self {
            lineup_size: 11,
            max_per_side: 10,
            min_per_type: 1,
            max_per_type: 8,
            max_pool_size: 26,
            strategy: EnumerationStrategy::Exhaustive,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RankingSettings {
    pub top_n: usize,
    pub captain_multiplier: f64,
    pub vice_captain_multiplier: f64,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            top_n: 5,
            captain_multiplier: 2.0,
            vice_captain_multiplier: 1.5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub allowed_origins: Vec<String>,
    pub generation_deadline: Option<Duration>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".to_string()],
            generation_deadline: None,
        }
    }
}

impl ServerSettings {
    /// Reads `ALLOWED_ORIGINS` (comma separated) and `GENERATION_DEADLINE_MS`,
    /// falling back to defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .ok()
            .map(|raw| parse_origins(&raw))
            .filter(|origins| !origins.is_empty())
            .unwrap_or(defaults.allowed_origins);

        let generation_deadline = std::env::var("GENERATION_DEADLINE_MS")
            .ok()
            .and_then(|raw| parse_deadline(&raw));

        Self {
            allowed_origins,
            generation_deadline,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_deadline(raw: &str) -> Option<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(0) => None,
        Ok(ms) => Some(Duration::from_millis(ms)),
        Err(_) => {
            warn!("Ignoring invalid GENERATION_DEADLINE_MS value: {}", raw);
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub scoring: ScoringSettings,
    pub roster: RosterSettings,
    pub ranking: RankingSettings,
    pub server: ServerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            scoring: ScoringSettings::default(),
            roster: RosterSettings::default(),
            ranking: RankingSettings::default(),
            server: ServerSettings::default(),
        }
    }

    pub fn from_env() -> Self {
        Self {
            server: ServerSettings::from_env(),
            ..Self::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_trims_and_skips_blanks() {
        let origins = parse_origins(" http://a.test , ,http://b.test");
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn test_parse_deadline() {
        assert_eq!(parse_deadline("1500"), Some(Duration::from_millis(1500)));
        assert_eq!(parse_deadline("0"), None);
        assert_eq!(parse_deadline("soon"), None);
    }

    #[test]
    fn test_defaults_match_classic_rules() {
        let config = AppConfig::new();
        assert_eq!(config.roster.lineup_size, 11);
        assert_eq!(config.roster.max_per_side, 10);
        assert_eq!(config.ranking.top_n, 5);
        assert_eq!(config.server.allowed_origins, vec!["http://localhost:3000"]);
    }
}
