//! Dictionary word list and its file loader.
//!
//! The word list lives in a [`Trie`] built once at startup. The source
//! format is a UTF-8 text file with one word per line (`\n` or `\r\n`
//! endings); blank lines are skipped and a line with out-of-alphabet
//! characters invalidates that single insertion only.
//!
//! A missing or unreadable file is not fatal: the loader logs a warning
//! and the engine continues with an empty dictionary, in which case
//! autocomplete and autocorrect simply return no suggestions.

use std::{
  fs::File,
  io::{
    BufRead,
    BufReader,
  },
  path::Path,
  time::Instant,
};

use crate::trie::Trie;

/// What the loader did, for status reporting and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOutcome {
  /// Lines accepted into the trie (duplicates included).
  pub loaded:   usize,
  /// Non-blank lines rejected for out-of-alphabet characters.
  pub rejected: usize,
  /// The file could not be opened; the dictionary stayed empty.
  pub missing:  bool,
}

#[derive(Debug, Default)]
pub struct Dictionary {
  trie: Trie,
}

impl Dictionary {
  pub fn new() -> Self {
    Self::default()
  }

  /// Build a dictionary from an in-memory word iterator. Out-of-alphabet
  /// words are dropped, same as the file loader.
  pub fn from_words<I, S>(words: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut dict = Self::new();
    for word in words {
      dict.trie.insert(word.as_ref());
    }
    dict
  }

  /// Load a newline-delimited word list from `path`.
  ///
  /// Never fails: open or read errors leave the dictionary as loaded so
  /// far (empty on open failure) and are reported through the returned
  /// [`LoadOutcome`] and a warning log.
  pub fn from_path(path: impl AsRef<Path>) -> (Self, LoadOutcome) {
    let path = path.as_ref();
    let mut dict = Self::new();
    let mut outcome = LoadOutcome::default();
    let start = Instant::now();

    let file = match File::open(path) {
      Ok(file) => file,
      Err(err) => {
        tracing::warn!(
          path = %path.display(),
          %err,
          "dictionary file unavailable, continuing with an empty word list"
        );
        outcome.missing = true;
        return (dict, outcome);
      },
    };

    for line in BufReader::new(file).lines() {
      let line = match line {
        Ok(line) => line,
        Err(err) => {
          tracing::warn!(path = %path.display(), %err, "stopped reading dictionary file");
          break;
        },
      };
      // `lines()` strips `\n` and a trailing `\r`; blank lines carry no word.
      if line.is_empty() {
        continue;
      }
      if dict.trie.insert(&line) {
        outcome.loaded += 1;
      } else {
        outcome.rejected += 1;
      }
    }

    tracing::debug!(
      path = %path.display(),
      words = dict.len(),
      rejected = outcome.rejected,
      elapsed = ?start.elapsed(),
      "dictionary loaded"
    );
    (dict, outcome)
  }

  /// Whether `word` is a dictionary entry (case-folded).
  pub fn contains(&self, word: &str) -> bool {
    self.trie.contains(word)
  }

  /// Number of distinct words.
  pub fn len(&self) -> usize {
    self.trie.len()
  }

  pub fn is_empty(&self) -> bool {
    self.trie.is_empty()
  }

  #[inline]
  pub(crate) fn trie(&self) -> &Trie {
    &self.trie
  }
}
