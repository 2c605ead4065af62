//! Error taxonomy. One enum per subsystem, unified under [`MeridianError`].

pub mod aggregation_error;
pub mod config_error;
pub mod error_code;
pub mod meridian_error;
pub mod ranking_error;
pub mod retrieve_error;
pub mod scope_error;

pub use aggregation_error::AggregationError;
pub use config_error::ConfigError;
pub use error_code::MeridianErrorCode;
pub use meridian_error::{MeridianError, MeridianResult};
pub use ranking_error::RankingError;
pub use retrieve_error::RetrieveError;
pub use scope_error::ScopeError;
