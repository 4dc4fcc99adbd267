use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Simple configuration for textds
///
/// Carries the redaction term lists and the ingestion denylist. Everything
/// else (paths, split, chunk budget) comes from CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub redaction: RedactionLists,

    #[serde(default)]
    pub denylist: DenylistConfig,
}

/// Term lists for the identity-class detectors.
///
/// Matching is whole-word and case-insensitive; each distinct term gets a
/// stable pseudonym within one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionLists {
    #[serde(default = "default_names")]
    pub names: Vec<String>,

    #[serde(default = "default_locations")]
    pub locations: Vec<String>,

    #[serde(default = "default_relations")]
    pub relations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenylistConfig {
    #[serde(default = "default_deny_patterns")]
    pub patterns: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redaction: RedactionLists::default(),
            denylist: DenylistConfig::default(),
        }
    }
}

impl Default for RedactionLists {
    fn default() -> Self {
        Self {
            names: default_names(),
            locations: default_locations(),
            relations: default_relations(),
        }
    }
}

impl Default for DenylistConfig {
    fn default() -> Self {
        Self {
            patterns: default_deny_patterns(),
        }
    }
}

fn default_names() -> Vec<String> {
    Vec::new()
}

fn default_locations() -> Vec<String> {
    Vec::new()
}

// Order matters downstream: compound terms must precede their prefixes
// ("ex-husband" before "ex") so the longer form wins.
fn default_relations() -> Vec<String> {
    [
        "mother",
        "father",
        "mom",
        "dad",
        "son",
        "daughter",
        "husband",
        "wife",
        "boyfriend",
        "girlfriend",
        "partner",
        "ex-husband",
        "ex-wife",
        "ex",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_deny_patterns() -> Vec<String> {
    vec![
        "**/.env*".to_string(),
        "**/secrets/**".to_string(),
        "**/*.key".to_string(),
        "**/*.pem".to_string(),
        "**/credentials".to_string(),
    ]
}

impl Config {
    /// Load config from an explicit path, the default location, or fall
    /// back to defaults when no file exists.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path(),
        };

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Get default config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "textds", "textds") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.textds/config.toml")
        }
    }
}
