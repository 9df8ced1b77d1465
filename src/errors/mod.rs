use anyhow::Context as _;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectionError {
    #[error("Player pool of {size} exceeds the maximum of {max}")]
    PoolTooLarge { size: usize, max: usize },

    #[error("Lineup generation exceeded its {deadline:?} deadline after {examined} candidates")]
    DeadlineExceeded { deadline: Duration, examined: u64 },
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Add context to file read errors
pub fn read_context(path: &str) -> String {
    format!("Failed to read from: {}", path)
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(result: Result<T, E>, data_type: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(parse_context(data_type))
}

/// Wrap result with read context
pub fn with_read_context<T, E>(result: Result<T, E>, path: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(read_context(path))
}
