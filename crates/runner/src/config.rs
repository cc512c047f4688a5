//! Configuration loading for the chat runner
//!
//! A JSON file with every field optional:
//!
//! ```json
//! {
//!     "bot_name": "Numerus",
//!     "typing_delay_ms": 30,
//!     "names_path": "names.txt",
//!     "known_names": ["Ada", "Grace"],
//!     "challenge": { "numerals": ["XII", "VII"], "operators": ["+", "-"] }
//! }
//! ```

use numerus_challenge::{ChallengeConfig, ChallengeGenerator};
use numerus_names::{NameList, NameListError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Root configuration for the runner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Name the bot introduces itself with
    #[serde(default = "default_bot_name")]
    pub bot_name: String,

    /// Delay between printed characters; 0 prints whole lines
    #[serde(default = "default_typing_delay_ms")]
    pub typing_delay_ms: u64,

    /// Newline-separated list of known names
    #[serde(default)]
    pub names_path: Option<PathBuf>,

    /// Known names given inline, merged with `names_path`
    #[serde(default)]
    pub known_names: Vec<String>,

    #[serde(default)]
    pub challenge: ChallengeConfig,
}

fn default_bot_name() -> String {
    "Numerus".to_string()
}

fn default_typing_delay_ms() -> u64 {
    30
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            bot_name: default_bot_name(),
            typing_delay_ms: default_typing_delay_ms(),
            names_path: None,
            known_names: Vec::new(),
            challenge: ChallengeConfig::default(),
        }
    }
}

impl RunnerConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check the challenge pool can produce questions
    pub fn validate(&self) -> Result<(), ConfigError> {
        ChallengeGenerator::from_config(&self.challenge)
            .map(|_| ())
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }

    /// Known names from the file (if any) plus the inline list
    pub fn load_names(&self) -> Result<NameList, ConfigError> {
        let mut names = NameList::new(&self.known_names);
        if let Some(path) = &self.names_path {
            names.merge(NameList::from_file(path)?);
        }
        Ok(names)
    }
}

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error(transparent)]
    Names(#[from] NameListError),
}
