use crate::models::SearchScope;

use super::error_code::{self, MeridianErrorCode};

/// Caller input errors raised while resolving a query's scope.
#[derive(Debug, thiserror::Error)]
pub enum ScopeError {
    #[error("scope '{scope}' requires an anchor project")]
    NoAnchor { scope: SearchScope },

    #[error("anchor project '{anchor}' is not part of the workspace")]
    UnknownAnchor { anchor: String },
}

impl MeridianErrorCode for ScopeError {
    fn error_code(&self) -> &'static str {
        error_code::SCOPE_ERROR
    }
}
