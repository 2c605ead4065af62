//! Configuration errors. Fatal: no query runs against an invalid snapshot.

use super::error_code::{self, MeridianErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("duplicate project id: {id}")]
    DuplicateProjectId { id: String },

    #[error("{owner} references unknown project '{missing}' in {field}")]
    DanglingReference {
        owner: String,
        field: String,
        missing: String,
    },

    #[error("invalid project id '{id}': must match [a-zA-Z0-9_]+")]
    InvalidProjectId { id: String },

    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    #[error("config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },
}

impl MeridianErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
