pub mod settings;

pub use settings::{AppConfig, RankingSettings, RosterSettings, ScoringSettings, ServerSettings};
