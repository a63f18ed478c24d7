//! Engine configuration.
//!
//! Deserialized from TOML; every field has a default so an empty (or
//! absent) config is valid. Out-of-range values are clamped rather than
//! rejected so a bad config never aborts startup.

use std::path::{
  Path,
  PathBuf,
};

use serde::Deserialize;
use thiserror::Error;

use crate::{
  history::DEFAULT_CAPACITY,
  suggest::{
    DEFAULT_MAX_COST,
    DEFAULT_MAX_SUGGESTIONS,
    SuggestConfig,
  },
};

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read config file: {0}")]
  Io(#[from] std::io::Error),
  #[error("failed to parse config: {0}")]
  Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
  /// Word-list file loaded once at startup. `None` starts empty.
  pub dictionary:       Option<PathBuf>,
  /// Edit-distance budget for fuzzy correction.
  pub max_cost:         usize,
  /// Cap on suggestion list length.
  pub max_suggestions:  usize,
  /// Bound on each history stack.
  pub history_capacity: usize,
}

impl Default for EngineConfig {
  fn default() -> Self {
    Self {
      dictionary:       None,
      max_cost:         DEFAULT_MAX_COST,
      max_suggestions:  DEFAULT_MAX_SUGGESTIONS,
      history_capacity: DEFAULT_CAPACITY,
    }
  }
}

impl EngineConfig {
  pub fn from_toml(text: &str) -> Result<Self> {
    let config: Self = toml::from_str(text)?;
    Ok(config.sanitized())
  }

  pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
    Self::from_toml(&std::fs::read_to_string(path)?)
  }

  /// Clamp values that would make the engine useless: at least one
  /// suggestion, and history room for a baseline plus one edit.
  fn sanitized(mut self) -> Self {
    self.max_suggestions = self.max_suggestions.max(1);
    self.history_capacity = self.history_capacity.max(2);
    self
  }

  /// The suggestion-engine slice of this config.
  pub fn suggest(&self) -> SuggestConfig {
    SuggestConfig {
      max_cost:        self.max_cost,
      max_suggestions: self.max_suggestions,
    }
  }
}
