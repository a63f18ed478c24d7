//! Prefix autocomplete and bounded fuzzy correction.
//!
//! # Overview
//!
//! Two lookups over the dictionary trie:
//!
//! - [`autocomplete`] enumerates completions of a prefix in alphabetical
//!   depth-first order, capped at [`SuggestConfig::max_suggestions`].
//! - [`correct`] finds dictionary words within a small edit-distance
//!   budget of a misspelled query, using a trie-synchronized incremental
//!   Levenshtein: one DP row is computed per trie edge, and a branch is
//!   abandoned as soon as every entry of its row exceeds the budget
//!   (branch-and-bound — no completion below that edge can recover).
//!
//! Both are pure: no shared state is mutated, results are deterministic.
//!
//! # Ordering
//!
//! Corrections come back sorted ascending by edit distance; ties keep
//! discovery order, which follows the alphabetical child order of the
//! traversal. Once the result buffer is full a new candidate replaces
//! the current worst entry only if strictly better.

use smallvec::SmallVec;

use crate::{
  Tendril,
  dictionary::Dictionary,
  trie::TrieNode,
};
use scriv_core::chars::index_letter;

pub const DEFAULT_MAX_COST: usize = 2;
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Tuning knobs for both lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestConfig {
  /// Edit-distance budget for [`correct`].
  pub max_cost:        usize,
  /// Result cap for both lookups.
  pub max_suggestions: usize,
}

impl Default for SuggestConfig {
  fn default() -> Self {
    Self {
      max_cost:        DEFAULT_MAX_COST,
      max_suggestions: DEFAULT_MAX_SUGGESTIONS,
    }
  }
}

/// A corrected word candidate and its edit distance from the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
  pub word:     Tendril,
  pub distance: usize,
}

/// Bounded correction list; inline up to the default cap.
pub type Suggestions = SmallVec<[Suggestion; DEFAULT_MAX_SUGGESTIONS]>;

type Row = SmallVec<[usize; 24]>;

/// Enumerate dictionary completions of `prefix`.
///
/// The trie walk is case-folded, but the returned words start with the
/// prefix exactly as the caller spelled it, followed by lowercase
/// completions. A prefix containing non-letters, or one that matches no
/// dictionary path, yields an empty list rather than an error.
pub fn autocomplete(dict: &Dictionary, prefix: &str, config: &SuggestConfig) -> Vec<Tendril> {
  let Some(node) = dict.trie().walk(prefix) else {
    return Vec::new();
  };

  let mut out = Vec::new();
  let mut buf = String::from(prefix);
  collect_completions(node, &mut buf, config.max_suggestions, &mut out);
  out
}

fn collect_completions(node: &TrieNode, buf: &mut String, cap: usize, out: &mut Vec<Tendril>) {
  if out.len() >= cap {
    return;
  }
  if node.is_word() {
    out.push(Tendril::from(buf.as_str()));
  }
  for (idx, child) in node.children() {
    if out.len() >= cap {
      return;
    }
    buf.push(index_letter(idx));
    collect_completions(child, buf, cap, out);
    buf.pop();
  }
}

/// Suggest dictionary words within `config.max_cost` edits of `word`.
///
/// A word that is already a dictionary entry (case-folded) needs no
/// correction and yields an empty list, as does an empty query. The
/// query itself is not alphabet-validated: non-letter characters are
/// legal comparison targets and simply never match a trie edge.
pub fn correct(dict: &Dictionary, word: &str, config: &SuggestConfig) -> Suggestions {
  if word.is_empty() || dict.contains(word) {
    return Suggestions::new();
  }

  let query: Vec<char> = word.chars().map(|ch| ch.to_ascii_lowercase()).collect();
  let base_row: Row = (0..=query.len()).collect();

  let mut walk = FuzzyWalk {
    query:    &query,
    max_cost: config.max_cost,
    cap:      config.max_suggestions.max(1),
    buf:      String::new(),
    results:  Suggestions::new(),
  };

  for (idx, child) in dict.trie().root().children() {
    let letter = index_letter(idx);
    walk.buf.push(letter);
    walk.descend(child, letter, &base_row);
    walk.buf.pop();
  }

  walk.results
}

struct FuzzyWalk<'a> {
  query:    &'a [char],
  max_cost: usize,
  cap:      usize,
  /// Word spelled by the path so far; push/pop around each recursion.
  buf:      String,
  results:  Suggestions,
}

impl FuzzyWalk<'_> {
  fn descend(&mut self, node: &TrieNode, letter: char, prev_row: &[usize]) {
    let columns = self.query.len() + 1;
    let mut row = Row::with_capacity(columns);
    row.push(prev_row[0] + 1);

    for i in 1..columns {
      let insertion = row[i - 1] + 1;
      let deletion = prev_row[i] + 1;
      let substitution = prev_row[i - 1] + usize::from(self.query[i - 1] != letter);
      row.push(insertion.min(deletion).min(substitution));
    }

    let distance = row[columns - 1];
    if node.is_word() && distance > 0 && distance <= self.max_cost {
      self.record(distance);
    }

    // Branch-and-bound: every entry of the row is a lower bound for some
    // extension of the query; if all exceed the budget, so does every
    // word below this edge.
    let within_budget = row.iter().any(|&cost| cost <= self.max_cost);
    if within_budget {
      for (idx, child) in node.children() {
        let next = index_letter(idx);
        self.buf.push(next);
        self.descend(child, next, &row);
        self.buf.pop();
      }
    }
  }

  fn record(&mut self, distance: usize) {
    if self.results.iter().any(|s| s.word.as_str() == self.buf) {
      return;
    }
    let candidate = Suggestion {
      word: Tendril::from(self.buf.as_str()),
      distance,
    };

    if self.results.len() < self.cap {
      self.results.push(candidate);
      self.results.sort_by_key(|s| s.distance);
    } else if let Some(worst) = self.results.last_mut() {
      if distance < worst.distance {
        *worst = candidate;
        self.results.sort_by_key(|s| s.distance);
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn dict(words: &[&str]) -> Dictionary {
    Dictionary::from_words(words)
  }

  fn config() -> SuggestConfig {
    SuggestConfig::default()
  }

  fn words(suggestions: &Suggestions) -> Vec<&str> {
    suggestions.iter().map(|s| s.word.as_str()).collect()
  }

  #[test]
  fn autocomplete_alphabetical_dfs_order() {
    let dict = dict(&["cat", "car", "care", "dog"]);
    let out = autocomplete(&dict, "ca", &config());
    assert_eq!(out, vec!["car", "care", "cat"]);
  }

  #[test]
  fn autocomplete_preserves_prefix_casing() {
    let dict = dict(&["cat", "car", "care"]);
    let out = autocomplete(&dict, "Ca", &config());
    assert_eq!(out, vec!["Car", "Care", "Cat"]);
  }

  #[test]
  fn autocomplete_caps_results() {
    let dict = dict(&["aa", "ab", "ac", "ad", "ae", "af", "ag"]);
    let out = autocomplete(&dict, "a", &config());
    assert_eq!(out, vec!["aa", "ab", "ac", "ad", "ae"]);
  }

  #[test]
  fn autocomplete_missing_path_is_empty() {
    let dict = dict(&["cat"]);
    assert!(autocomplete(&dict, "zz", &config()).is_empty());
    assert!(autocomplete(&dict, "ca t", &config()).is_empty());
    assert!(autocomplete(&dict, "c4", &config()).is_empty());
  }

  #[test]
  fn autocomplete_empty_prefix_walks_from_root() {
    // A zero-length walk succeeds, so the first words in alphabetical
    // order come back. Callers wanting a minimum prefix length enforce
    // it themselves.
    let dict = dict(&["cat", "ant", "bee"]);
    let out = autocomplete(&dict, "", &config());
    assert_eq!(out, vec!["ant", "bee", "cat"]);
  }

  #[test]
  fn correct_finds_transposition_as_two_edits() {
    let dict = dict(&["world"]);
    let out = correct(&dict, "wrold", &config());
    assert_eq!(out[0], Suggestion {
      word:     Tendril::from("world"),
      distance: 2,
    });
  }

  #[test]
  fn correct_exact_match_is_empty() {
    let dict = dict(&["world"]);
    assert!(correct(&dict, "world", &config()).is_empty());
    assert!(correct(&dict, "World", &config()).is_empty());
  }

  #[test]
  fn correct_empty_query_is_empty() {
    let dict = dict(&["a", "ab"]);
    assert!(correct(&dict, "", &config()).is_empty());
  }

  #[test]
  fn correct_empty_dictionary_is_empty() {
    let dict = dict(&[]);
    assert!(correct(&dict, "anything", &config()).is_empty());
  }

  #[test]
  fn correct_sorted_by_distance_then_discovery() {
    let dict = dict(&["hat", "bat", "cat", "what"]);
    let out = correct(&dict, "hhat", &config());
    // "hat" (deletion) and "what" (substitution) are one edit away and
    // keep their alphabetical discovery order; the rest are two edits.
    assert_eq!(words(&out), vec!["hat", "what", "bat", "cat"]);
    assert_eq!(out[0].distance, 1);
    assert_eq!(out[1].distance, 1);
    assert_eq!(out[2].distance, 2);
  }

  #[test]
  fn correct_respects_budget() {
    let dict = dict(&["abcdef"]);
    assert!(correct(&dict, "az", &config()).is_empty());
  }

  #[test]
  fn correct_full_buffer_replaces_strictly_worse() {
    // Five distance-2 words fill the buffer before a distance-1 word is
    // discovered; the latecomer must displace the worst entry.
    let dict = dict(&["abb", "abc", "abd", "abe", "abf", "zaa"]);
    let out = correct(&dict, "aaa", &config());
    assert_eq!(out.len(), 5);
    assert_eq!(out[0].word.as_str(), "zaa");
    assert_eq!(out[0].distance, 1);
    assert!(!words(&out).contains(&"abf"));
  }

  #[test]
  fn correct_query_may_contain_non_letters() {
    // Only the dictionary side is alphabet-constrained; a non-letter in
    // the query is just a character that never matches a trie edge.
    let dict = dict(&["dog"]);
    let out = correct(&dict, "do'g", &config());
    assert_eq!(out[0], Suggestion {
      word:     Tendril::from("dog"),
      distance: 1,
    });
  }

  #[test]
  fn correct_is_case_insensitive() {
    let dict = dict(&["world"]);
    let out = correct(&dict, "WROLD", &config());
    assert_eq!(out[0].word.as_str(), "world");
    assert_eq!(out[0].distance, 2);
  }

  #[test]
  fn custom_budget_widens_results() {
    let dict = dict(&["abcd"]);
    let tight = SuggestConfig {
      max_cost: 1,
      ..SuggestConfig::default()
    };
    let wide = SuggestConfig {
      max_cost: 3,
      ..SuggestConfig::default()
    };
    assert!(correct(&dict, "a", &tight).is_empty());
    assert_eq!(words(&correct(&dict, "a", &wide)), vec!["abcd"]);
  }
}
