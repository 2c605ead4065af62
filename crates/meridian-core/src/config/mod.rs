//! Configuration system for Meridian.
//! JSON or TOML workspace file, environment overrides, then validation.

pub mod aggregation_config;
pub mod defaults;
pub mod search_config;
pub mod workspace_config;

pub use aggregation_config::AggregationConfig;
pub use search_config::SearchConfig;
pub use workspace_config::WorkspaceConfig;
