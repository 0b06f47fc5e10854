//! Shell Configuration
//!
//! Session defaults (user, host, environment, aliases, search limits),
//! optionally loaded from a TOML file. `env` and `aliases` hold overrides
//! that are merged over the built-in defaults.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported file format: '{0}' (expected .json, .yaml, .yml or .toml)")]
    UnsupportedFormat(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub user: String,
    pub hostname: String,
    pub home: String,
    pub env: IndexMap<String, String>,
    pub aliases: IndexMap<String, String>,
    pub search_max_results: usize,
    pub search_context_lines: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            user: "guest".to_string(),
            hostname: "portfolio".to_string(),
            home: "/".to_string(),
            env: IndexMap::new(),
            aliases: IndexMap::new(),
            search_max_results: 50,
            search_context_lines: 2,
        }
    }
}

impl ShellConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Default environment with configured overrides applied.
    pub fn environment(&self) -> IndexMap<String, String> {
        let mut env = IndexMap::new();
        env.insert("USER".to_string(), self.user.clone());
        env.insert("HOME".to_string(), self.home.clone());
        env.insert("SHELL".to_string(), "/bin/zsh".to_string());
        env.insert("PATH".to_string(), "/usr/local/bin:/usr/bin:/bin".to_string());
        env.insert("TERM".to_string(), "xterm-256color".to_string());
        env.insert("EDITOR".to_string(), "vim".to_string());
        env.insert("NODE_VERSION".to_string(), "v20.11.0".to_string());
        env.insert("NPM_VERSION".to_string(), "10.2.4".to_string());
        env.extend(self.env.iter().map(|(k, v)| (k.clone(), v.clone())));
        env
    }

    /// Default aliases with configured overrides applied.
    pub fn alias_table(&self) -> IndexMap<String, String> {
        let mut aliases: IndexMap<String, String> = [
            ("ll", "ls -la"),
            ("la", "ls -a"),
            ("cls", "clear"),
            ("..", "cd .."),
            ("c", "clear"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        aliases.extend(self.aliases.iter().map(|(k, v)| (k.clone(), v.clone())));
        aliases
    }
}

pub(crate) fn read_to_string(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_environment_seeds() {
        let env = ShellConfig::default().environment();
        for key in ["USER", "HOME", "SHELL", "PATH", "TERM", "EDITOR", "NODE_VERSION", "NPM_VERSION"] {
            assert!(env.contains_key(key), "missing {}", key);
        }
        assert_eq!(env["USER"], "guest");
    }

    #[test]
    fn test_default_aliases() {
        let aliases = ShellConfig::default().alias_table();
        assert_eq!(aliases["ll"], "ls -la");
        assert_eq!(aliases["la"], "ls -a");
        assert_eq!(aliases["cls"], "clear");
        assert_eq!(aliases[".."], "cd ..");
        assert_eq!(aliases["c"], "clear");
    }

    #[test]
    fn test_toml_overrides_merge_over_defaults() {
        let config = ShellConfig::from_toml_str(
            r#"
            user = "ada"
            search_max_results = 10

            [env]
            EDITOR = "hx"
            PROJECT = "folio"

            [aliases]
            gs = "git status"
            "#,
        )
        .unwrap();

        let env = config.environment();
        assert_eq!(env["USER"], "ada");
        assert_eq!(env["EDITOR"], "hx");
        assert_eq!(env["PROJECT"], "folio");
        assert_eq!(config.hostname, "portfolio");
        assert_eq!(config.search_max_results, 10);
        assert_eq!(config.search_context_lines, 2);

        let aliases = config.alias_table();
        assert_eq!(aliases["gs"], "git status");
        assert_eq!(aliases["ll"], "ls -la");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(matches!(ShellConfig::from_toml_str("user = ["), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ShellConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
