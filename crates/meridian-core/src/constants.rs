//! Shared constants for the Meridian ranking engine.

/// Meridian version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lower bound of the workspace relationship boost. A boost never demotes.
pub const MIN_RELATIONSHIP_BOOST: f64 = 1.0;

/// Upper bound of the workspace relationship boost.
pub const MAX_RELATIONSHIP_BOOST: f64 = 3.0;

/// Boost applied to hits that get no relationship credit.
pub const NEUTRAL_WEIGHT: f64 = 1.0;

/// Allowed characters of a project id.
pub const PROJECT_ID_PATTERN: &str = r"^[a-zA-Z0-9_]+$";

/// Default project classification.
pub const DEFAULT_PROJECT_TYPE: &str = "application";

// --- Edge-type priors (affinity in [0, 1]) ---
pub const WEIGHT_DEPENDENCY: f64 = 1.0;
pub const WEIGHT_IMPORTS: f64 = 1.0;
pub const WEIGHT_SEMANTIC_SIMILARITY: f64 = 0.8;
pub const WEIGHT_API_CLIENT: f64 = 0.6;
pub const WEIGHT_EVENT_DRIVEN: f64 = 0.5;
pub const WEIGHT_SHARED_DATABASE: f64 = 0.4;
