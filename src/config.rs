//! Runtime settings, loaded from an optional YAML file
//!
//! ```yaml
//! database: summaries.db
//! summarizer:
//!   backend: http          # http | lead
//!   base_url: https://api-inference.huggingface.co
//!   model: sshleifer/distilbart-cnn-12-6
//!   revision: a4f8f3e
//!   timeout_secs: 60
//! ```

use crate::storage::DEFAULT_DB_FILE;
use crate::summarizer::{
    HttpSummarizer, HttpSummarizerConfig, LeadSummarizer, Summarizer, SummarizerError,
    DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_REVISION,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Settings file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "synopsis.yaml";

/// Environment variable consulted when no API token is configured
pub const API_TOKEN_ENV: &str = "HF_API_TOKEN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Which summarization capability to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Http,
    Lead,
}

impl std::str::FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "http" => Ok(Self::Http),
            "lead" => Ok(Self::Lead),
            other => Err(ConfigError::Invalid(format!(
                "unknown backend '{other}' (expected 'http' or 'lead')"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerSettings {
    pub backend: Backend,
    pub base_url: String,
    pub model: String,
    pub revision: Option<String>,
    pub api_token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for SummarizerSettings {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            revision: Some(DEFAULT_REVISION.to_string()),
            api_token: None,
            timeout_secs: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// SQLite history file, relative to the working directory unless absolute
    pub database: PathBuf,
    pub summarizer: SummarizerSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DB_FILE),
            summarizer: SummarizerSettings::default(),
        }
    }
}

impl Settings {
    /// Parse settings from YAML; missing keys take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_yaml::from_str(yaml)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load from `path`, or from `synopsis.yaml` in the working directory
    /// when that exists, or fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let candidate = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !candidate.exists() {
                    return Ok(Self::default());
                }
                candidate
            }
        };

        tracing::debug!(path = %path.display(), "loading settings");
        let yaml = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        Self::from_yaml(&yaml)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.summarizer;
        if s.model.trim().is_empty() {
            return Err(ConfigError::Invalid("summarizer.model must not be empty".into()));
        }
        if s.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("summarizer.base_url must not be empty".into()));
        }
        if s.timeout_secs == 0 {
            return Err(ConfigError::Invalid("summarizer.timeout_secs must be positive".into()));
        }
        Ok(())
    }

    /// Build the configured summarizer.
    ///
    /// The API token falls back to the `HF_API_TOKEN` environment variable.
    pub fn build_summarizer(&self) -> Result<Arc<dyn Summarizer>, SummarizerError> {
        let s = &self.summarizer;
        match s.backend {
            Backend::Lead => Ok(Arc::new(LeadSummarizer::new())),
            Backend::Http => {
                let api_token = s
                    .api_token
                    .clone()
                    .or_else(|| std::env::var(API_TOKEN_ENV).ok())
                    .filter(|t| !t.is_empty());
                let summarizer = HttpSummarizer::new(HttpSummarizerConfig {
                    base_url: s.base_url.clone(),
                    model: s.model.clone(),
                    revision: s.revision.clone(),
                    api_token,
                    timeout: Duration::from_secs(s.timeout_secs),
                })?;
                Ok(Arc::new(summarizer))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_gives_defaults() {
        let settings = Settings::from_yaml("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.database, PathBuf::from("summaries.db"));
        assert_eq!(settings.summarizer.model, "sshleifer/distilbart-cnn-12-6");
        assert_eq!(settings.summarizer.revision.as_deref(), Some("a4f8f3e"));
    }

    #[test]
    fn partial_yaml_overrides_only_given_keys() {
        let yaml = "database: /tmp/other.db\nsummarizer:\n  backend: lead\n  timeout_secs: 5\n";
        let settings = Settings::from_yaml(yaml).unwrap();
        assert_eq!(settings.database, PathBuf::from("/tmp/other.db"));
        assert_eq!(settings.summarizer.backend, Backend::Lead);
        assert_eq!(settings.summarizer.timeout_secs, 5);
        assert_eq!(settings.summarizer.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = Settings::from_yaml("summarizer:\n  timeout_secs: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = Settings::from_yaml("summarizer:\n  model: ''\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = Settings::from_yaml("summarizer:\n  backend: gpt\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn backend_from_str() {
        assert_eq!("http".parse::<Backend>().unwrap(), Backend::Http);
        assert_eq!("lead".parse::<Backend>().unwrap(), Backend::Lead);
        assert!("bart".parse::<Backend>().is_err());
    }

    #[test]
    fn load_reads_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yaml");
        std::fs::write(&path, "database: history.db\n").unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.database, PathBuf::from("history.db"));
    }

    #[test]
    fn load_missing_explicit_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load(Some(&dir.path().join("absent.yaml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn lead_backend_builds() {
        let mut settings = Settings::default();
        settings.summarizer.backend = Backend::Lead;
        assert_eq!(settings.build_summarizer().unwrap().name(), "lead");
    }
}
