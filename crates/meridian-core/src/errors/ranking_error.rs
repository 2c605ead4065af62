use super::error_code::{self, MeridianErrorCode};

/// Internal-consistency violations detected while ranking.
#[derive(Debug, thiserror::Error)]
pub enum RankingError {
    #[error("hit from project '{project_id}' is outside the eligible set")]
    UnexpectedProject { project_id: String },

    #[error("hit {project_id}/{document_id} has a non-finite base score")]
    NonFiniteScore {
        project_id: String,
        document_id: String,
    },
}

impl MeridianErrorCode for RankingError {
    fn error_code(&self) -> &'static str {
        error_code::RANKING_ERROR
    }
}
