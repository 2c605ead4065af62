//! Tests for workspace configuration loading, defaults, clamping, and env overrides.

use std::io::Write;
use std::sync::Mutex;

use meridian_core::config::{AggregationConfig, SearchConfig, WorkspaceConfig};
use meridian_core::errors::ConfigError;
use meridian_core::models::{IndexingPriority, RelationshipType, SearchScope};

/// Serializes tests that touch `MERIDIAN_*` environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const WORKSPACE_JSON: &str = r#"{
    "version": "1.0",
    "name": "shop",
    "projects": [
        { "id": "api", "name": "API", "path": "./api", "language": "rust" },
        {
            "id": "frontend",
            "name": "Frontend",
            "path": "./frontend",
            "type": "web",
            "languages": ["typescript", "css"],
            "dependencies": ["api"],
            "indexing": { "priority": "high", "exclude": ["dist/**"] }
        }
    ],
    "relationships": [
        {
            "from": "frontend",
            "to": "api",
            "type": "imports",
            "description": "REST client",
            "metadata": { "protocol": "http" }
        }
    ]
}"#;

#[test]
fn defaults_match_schema() {
    let search = SearchConfig::default();
    assert_eq!(search.default_scope, SearchScope::Workspace);
    assert!(search.cross_project_ranking);
    assert!((search.relationship_boost - 1.5).abs() < f64::EPSILON);
    assert_eq!(search.related_max_hops, 1);

    let aggregation = AggregationConfig::default();
    assert_eq!(aggregation.per_project_timeout_ms, 5_000);
    assert_eq!(aggregation.query_deadline_ms, 15_000);
    assert_eq!(aggregation.max_concurrent_retrievals, 8);
}

#[test]
fn parses_workspace_json() {
    let config = WorkspaceConfig::from_json_str(WORKSPACE_JSON).unwrap();
    assert_eq!(config.name, "shop");
    assert_eq!(config.projects.len(), 2);

    let api = &config.projects[0];
    assert_eq!(api.project_type, "application");
    assert_eq!(api.languages, vec!["rust".to_string()]);
    assert!(api.indexing.enabled);
    assert_eq!(api.indexing.priority, IndexingPriority::Medium);

    let frontend = &config.projects[1];
    assert_eq!(frontend.project_type, "web");
    assert_eq!(frontend.languages.len(), 2);
    assert!(frontend.dependencies.contains("api"));
    assert_eq!(frontend.indexing.priority, IndexingPriority::High);
    assert_eq!(frontend.indexing.exclude, vec!["dist/**".to_string()]);

    let rel = &config.relationships[0];
    assert_eq!(rel.relationship_type, RelationshipType::Imports);
    assert_eq!(rel.description.as_deref(), Some("REST client"));
    assert_eq!(rel.metadata["protocol"], "http");
    assert!((rel.effective_weight() - 1.0).abs() < f64::EPSILON);

    assert_eq!(config.search, SearchConfig::default());
}

#[test]
fn parses_workspace_toml() {
    let toml_str = r#"
        version = "1.0"
        name = "shop"

        [[projects]]
        id = "api"
        name = "API"
        path = "./api"

        [[relationships]]
        from = "api"
        to = "api"
        type = "semantic_similarity"
        weight = 0.3

        [search]
        default_scope = "related"
        cross_project_ranking = false
    "#;
    let config = WorkspaceConfig::from_toml_str(toml_str).unwrap();
    assert_eq!(config.search.default_scope, SearchScope::Related);
    assert!(!config.search.cross_project_ranking);
    assert!((config.relationships[0].effective_weight() - 0.3).abs() < f64::EPSILON);
}

#[test]
fn relationship_boost_is_clamped_not_rejected() {
    let high = WORKSPACE_JSON.replacen(
        "\"relationships\"",
        "\"search\": { \"relationship_boost\": 9.5 }, \"relationships\"",
        1,
    );
    let config = WorkspaceConfig::from_json_str(&high).unwrap();
    assert!((config.search.relationship_boost - 3.0).abs() < f64::EPSILON);

    let low = WORKSPACE_JSON.replacen(
        "\"relationships\"",
        "\"search\": { \"relationship_boost\": 0.2 }, \"relationships\"",
        1,
    );
    let config = WorkspaceConfig::from_json_str(&low).unwrap();
    assert!((config.search.relationship_boost - 1.0).abs() < f64::EPSILON);
}

#[test]
fn unknown_scope_is_a_parse_error() {
    let bad = WORKSPACE_JSON.replacen(
        "\"relationships\"",
        "\"search\": { \"default_scope\": \"galaxy\" }, \"relationships\"",
        1,
    );
    let err = WorkspaceConfig::from_json_str(&bad).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn unknown_relationship_type_is_a_parse_error() {
    let bad = WORKSPACE_JSON.replace("\"imports\"", "\"telepathy\"");
    let err = WorkspaceConfig::from_json_str(&bad).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn invalid_project_id_is_rejected() {
    let bad = WORKSPACE_JSON.replace("\"id\": \"api\"", "\"id\": \"api-v2\"");
    let err = WorkspaceConfig::from_json_str(&bad).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidProjectId { ref id } if id == "api-v2"));
}

#[test]
fn empty_workspace_is_rejected() {
    let json = r#"{ "version": "1.0", "name": "empty", "projects": [] }"#;
    let err = WorkspaceConfig::from_json_str(json).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "projects"));
}

#[test]
fn invalid_exclude_glob_is_rejected() {
    let bad = WORKSPACE_JSON.replace("dist/**", "dist/[");
    let err = WorkspaceConfig::from_json_str(&bad).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ValidationFailed { ref field, .. }
            if field == "projects.frontend.indexing.exclude"
    ));
}

#[test]
fn load_missing_file_is_file_not_found() {
    let err = WorkspaceConfig::load(std::path::Path::new("/nonexistent/workspace.json"))
        .unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn load_applies_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(WORKSPACE_JSON.as_bytes()).unwrap();

    std::env::set_var("MERIDIAN_SEARCH_RELATIONSHIP_BOOST", "2.25");
    std::env::set_var("MERIDIAN_SEARCH_DEFAULT_SCOPE", "dependencies");
    std::env::set_var("MERIDIAN_AGGREGATION_PER_PROJECT_TIMEOUT_MS", "not-a-number");
    let result = WorkspaceConfig::load(file.path());
    std::env::remove_var("MERIDIAN_SEARCH_RELATIONSHIP_BOOST");
    std::env::remove_var("MERIDIAN_SEARCH_DEFAULT_SCOPE");
    std::env::remove_var("MERIDIAN_AGGREGATION_PER_PROJECT_TIMEOUT_MS");

    let config = result.unwrap();
    assert!((config.search.relationship_boost - 2.25).abs() < f64::EPSILON);
    assert_eq!(config.search.default_scope, SearchScope::Dependencies);
    // Unparseable values are ignored.
    assert_eq!(config.aggregation.per_project_timeout_ms, 5_000);
}

#[test]
fn load_env_boost_is_clamped() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(WORKSPACE_JSON.as_bytes()).unwrap();

    std::env::set_var("MERIDIAN_SEARCH_RELATIONSHIP_BOOST", "40");
    let result = WorkspaceConfig::load(file.path());
    std::env::remove_var("MERIDIAN_SEARCH_RELATIONSHIP_BOOST");

    assert!((result.unwrap().search.relationship_boost - 3.0).abs() < f64::EPSILON);
}

/// Collects formatted log lines for assertions.
#[derive(Clone, Default)]
struct LogBuffer(std::sync::Arc<Mutex<Vec<u8>>>);

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn load_logs_each_env_override() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(WORKSPACE_JSON.as_bytes()).unwrap();

    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    std::env::set_var("MERIDIAN_AGGREGATION_MAX_CONCURRENT", "3");
    std::env::set_var("MERIDIAN_SEARCH_RELATED_MAX_HOPS", "many");
    let result =
        tracing::subscriber::with_default(subscriber, || WorkspaceConfig::load(file.path()));
    std::env::remove_var("MERIDIAN_AGGREGATION_MAX_CONCURRENT");
    std::env::remove_var("MERIDIAN_SEARCH_RELATED_MAX_HOPS");

    assert_eq!(result.unwrap().aggregation.max_concurrent_retrievals, 3);
    let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("aggregation.max_concurrent_retrievals"), "{output}");
    assert!(output.contains("environment override applied"), "{output}");
    assert!(output.contains("ignoring unparseable environment override"), "{output}");
}

#[test]
fn load_toml_by_extension() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(
        b"version = \"2\"\nname = \"solo\"\n\
          [[projects]]\nid = \"core\"\nname = \"Core\"\npath = \".\"\n",
    )
    .unwrap();
    let config = WorkspaceConfig::load(file.path()).unwrap();
    assert_eq!(config.projects[0].id, "core");
}

#[test]
fn json_round_trip_preserves_config() {
    let config = WorkspaceConfig::from_json_str(WORKSPACE_JSON).unwrap();
    let json = config.to_json().unwrap();
    let again = WorkspaceConfig::from_json_str(&json).unwrap();
    assert_eq!(config, again);
}

mod properties {
    use meridian_core::config::search_config::clamp_boost;
    use meridian_core::config::workspace_config::is_valid_project_id;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn clamped_boost_is_always_in_range(boost in proptest::num::f64::ANY) {
            let clamped = clamp_boost(boost);
            prop_assert!((1.0..=3.0).contains(&clamped));
        }

        #[test]
        fn word_character_ids_are_valid(id in "[a-zA-Z0-9_]{1,24}") {
            prop_assert!(is_valid_project_id(&id));
        }

        #[test]
        fn ids_with_other_characters_are_invalid(
            prefix in "[a-z]{0,4}",
            bad in "[-./ @]",
            suffix in "[a-z]{0,4}",
        ) {
            let id = format!("{prefix}{bad}{suffix}");
            prop_assert!(!is_valid_project_id(&id));
        }
    }
}
