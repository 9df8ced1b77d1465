use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use log::{info, warn};

use crate::api::models::{FormattedLineup, GenerateTeamsRequest, GenerateTeamsResponse};
use crate::config::settings::AppConfig;
use crate::domain::CandidatePool;
use crate::errors::{self, SelectionError};
use crate::selection::{self, Deadline, LineupEnumerator, RosterRules, ScoreTable, ScoredLineup};

/// Runs one request through enumeration, scoring and ranking.
pub struct GenerationService {
    config: AppConfig,
    enumerator: Box<dyn LineupEnumerator + Send + Sync>,
}

impl GenerationService {
    pub fn new(config: AppConfig) -> Self {
        let enumerator = config.roster.strategy.enumerator();
        Self { config, enumerator }
    }

    pub fn generate(
        &self,
        request: GenerateTeamsRequest,
    ) -> Result<GenerateTeamsResponse, SelectionError> {
        let started = Instant::now();
        let deadline = Deadline::from_option(self.config.server.generation_deadline);
        let pool = CandidatePool::new(request.team1_players, request.team2_players);
        self.ensure_pool_size(&pool)?;

        info!("Generating lineups from a pool of {} players", pool.len());

        let rules = RosterRules::from(&self.config.roster);
        let lineups = self.enumerator.enumerate(&pool, &rules, &deadline)?;
        info!("  → Found {} valid lineups", lineups.len());

        let table = ScoreTable::build(&pool, &request.preferred_conditions, &self.config.scoring);
        let ranking = selection::rank_lineups(&lineups, &table, &self.config.ranking);

        info!("  → Generation finished in {:?}", started.elapsed());
        Ok(GenerateTeamsResponse {
            top_teams: format_lineups(&ranking.top, &pool),
            low_teams: format_lineups(&ranking.bottom, &pool),
        })
    }

    fn ensure_pool_size(&self, pool: &CandidatePool) -> Result<(), SelectionError> {
        let max = self.config.roster.max_pool_size;
        if pool.len() > max {
            warn!("Rejecting pool of {} players (max {})", pool.len(), max);
            return Err(SelectionError::PoolTooLarge {
                size: pool.len(),
                max,
            });
        }
        Ok(())
    }
}

fn format_lineups(lineups: &[ScoredLineup], pool: &CandidatePool) -> Vec<FormattedLineup> {
    lineups.iter().map(|scored| format_lineup(scored, pool)).collect()
}

/// Names in ranked order, so the captain leads and the vice-captain follows.
pub fn format_lineup(scored: &ScoredLineup, pool: &CandidatePool) -> FormattedLineup {
    let name = |position: usize| pool.name_of(position).unwrap_or_default().to_string();

    FormattedLineup {
        score: round_to_cents(scored.total),
        players: scored.ranked.iter().map(|p| name(p.position)).collect(),
        captain: scored.captain().map(|p| name(p.position)).unwrap_or_default(),
        vice_captain: scored.vice_captain().map(|p| name(p.position)).unwrap_or_default(),
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn load_request(path: &Path) -> Result<GenerateTeamsRequest> {
    let display = path.display().to_string();
    let raw = errors::with_read_context(std::fs::read_to_string(path), &display)?;
    errors::with_parse_context(serde_json::from_str(&raw), "generate-teams request")
}
