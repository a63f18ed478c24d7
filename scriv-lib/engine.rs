//! Engine assembly: one dictionary, one set of suggestion knobs.
//!
//! The engine owns the dictionary built once at startup; suggestion and
//! correction paths treat it as read-only, and [`Engine::reset`] is the
//! only rebuild path. History is deliberately not owned here: each
//! editing session holds its own [`crate::History`] instance.

use crate::{
  Tendril,
  autocorrect::{
    self,
    Corrected,
  },
  config::EngineConfig,
  dictionary::{
    Dictionary,
    LoadOutcome,
  },
  suggest::{
    self,
    SuggestConfig,
    Suggestions,
  },
};

#[derive(Debug, Default)]
pub struct Engine {
  dictionary: Dictionary,
  config:     SuggestConfig,
}

impl Engine {
  pub fn new(dictionary: Dictionary, config: SuggestConfig) -> Self {
    Self { dictionary, config }
  }

  /// Build from a full [`EngineConfig`], loading the word list when one
  /// is configured. A missing word list degrades to an empty dictionary
  /// rather than failing (see [`Dictionary::from_path`]).
  pub fn from_config(config: &EngineConfig) -> (Self, LoadOutcome) {
    let (dictionary, outcome) = match &config.dictionary {
      Some(path) => Dictionary::from_path(path),
      None => (Dictionary::new(), LoadOutcome::default()),
    };
    (Self::new(dictionary, config.suggest()), outcome)
  }

  pub fn dictionary(&self) -> &Dictionary {
    &self.dictionary
  }

  pub fn config(&self) -> SuggestConfig {
    self.config
  }

  /// Completions of `prefix`, capped and in alphabetical DFS order.
  pub fn autocomplete(&self, prefix: &str) -> Vec<Tendril> {
    suggest::autocomplete(&self.dictionary, prefix, &self.config)
  }

  /// Corrections for `word`, sorted ascending by edit distance. Empty if
  /// the word is already correct or nothing is within budget.
  pub fn correct(&self, word: &str) -> Suggestions {
    suggest::correct(&self.dictionary, word, &self.config)
  }

  /// The single best correction for `word`, if any.
  pub fn best_correction(&self, word: &str) -> Option<Tendril> {
    autocorrect::best_correction(&self.dictionary, word, &self.config)
  }

  /// Correct every misspelled word in `document`.
  pub fn correct_text(&self, document: &str) -> Corrected {
    autocorrect::correct_text(&self.dictionary, document, &self.config)
  }

  /// Replace the dictionary wholesale. The only rebuild path; normal
  /// operation never mutates the dictionary after startup.
  pub fn reset(&mut self, dictionary: Dictionary) {
    self.dictionary = dictionary;
  }
}
