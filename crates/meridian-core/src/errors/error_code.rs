//! MeridianErrorCode trait for the caller-facing boundary.

/// Trait for converting Meridian errors to stable error codes.
/// Every error enum implements this so a tool/RPC layer can map failures
/// without matching on message text.
pub trait MeridianErrorCode {
    /// Returns the error code string (e.g., "SCOPE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SCOPE_ERROR: &str = "SCOPE_ERROR";
pub const AGGREGATION_ERROR: &str = "AGGREGATION_ERROR";
pub const RANKING_ERROR: &str = "RANKING_ERROR";
pub const RETRIEVAL_ERROR: &str = "RETRIEVAL_ERROR";
