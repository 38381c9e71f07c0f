//! Configuration loading from file, environment, and CLI arguments.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{GraphResult, DEFAULT_RANDOM_EDGES, DEFAULT_RANDOM_NODES};

/// Environment variable naming the default seed file.
pub const SEED_ENV_VAR: &str = "SGRAPH_SEED";

/// Tool configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Default seed file used when no path is given on the command line.
    #[serde(default)]
    pub seed_path: Option<String>,
    /// Node count for random generation.
    #[serde(default = "default_random_nodes")]
    pub random_nodes: usize,
    /// Edge count for random generation.
    #[serde(default = "default_random_edges")]
    pub random_edges: usize,
    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_random_nodes() -> usize {
    DEFAULT_RANDOM_NODES
}

fn default_random_edges() -> usize {
    DEFAULT_RANDOM_EDGES
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            seed_path: None,
            random_nodes: default_random_nodes(),
            random_edges: default_random_edges(),
            log_level: default_log_level(),
        }
    }
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> GraphResult<GraphConfig> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse configuration from TOML text.
pub fn parse_config(content: &str) -> GraphResult<GraphConfig> {
    Ok(toml::from_str(content)?)
}

/// Resolve the seed file path using priority order:
/// 1. Explicit path (CLI arg)
/// 2. SGRAPH_SEED environment variable
/// 3. `seed_path` from the configuration
pub fn resolve_seed_path(explicit: Option<&str>, config: &GraphConfig) -> Option<String> {
    if let Some(path) = explicit {
        return Some(path.to_string());
    }

    if let Ok(env_path) = std::env::var(SEED_ENV_VAR) {
        if !env_path.is_empty() {
            return Some(env_path);
        }
    }

    config.seed_path.clone()
}
