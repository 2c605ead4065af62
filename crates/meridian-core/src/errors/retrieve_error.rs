use super::error_code::{self, MeridianErrorCode};

/// Errors returned by the retrieval collaborator for a single project.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RetrieveError {
    #[error("retrieval failed: {reason}")]
    Failed { reason: String },

    #[error("retrieval cancelled")]
    Cancelled,
}

impl RetrieveError {
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }
}

impl MeridianErrorCode for RetrieveError {
    fn error_code(&self) -> &'static str {
        error_code::RETRIEVAL_ERROR
    }
}
