use super::error_code::MeridianErrorCode;
use super::{AggregationError, ConfigError, RankingError, ScopeError};

pub type MeridianResult<T> = Result<T, MeridianError>;

/// Top-level error of a workspace search.
#[derive(Debug, thiserror::Error)]
pub enum MeridianError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scope(#[from] ScopeError),

    #[error(transparent)]
    Aggregation(#[from] AggregationError),

    #[error(transparent)]
    Ranking(#[from] RankingError),
}

impl MeridianErrorCode for MeridianError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Scope(e) => e.error_code(),
            Self::Aggregation(e) => e.error_code(),
            Self::Ranking(e) => e.error_code(),
        }
    }
}
