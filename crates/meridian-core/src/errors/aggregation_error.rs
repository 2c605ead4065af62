use crate::models::SkippedProject;

use super::error_code::{self, MeridianErrorCode};

/// Raised when no eligible project produced a usable answer.
#[derive(Debug, thiserror::Error)]
pub enum AggregationError {
    #[error("all {} eligible projects failed retrieval", .skipped.len())]
    AllProjectsFailed { skipped: Vec<SkippedProject> },
}

impl MeridianErrorCode for AggregationError {
    fn error_code(&self) -> &'static str {
        error_code::AGGREGATION_ERROR
    }
}
