//! Capacity-bounded undo/redo over full-document snapshots.
//!
//! # Overview
//!
//! [`History`] keeps two independent bounded stacks of [`Snapshot`]s.
//! Pushing a fresh edit appends to the undo stack and invalidates the
//! redo chain. Undo and redo both park the caller's current snapshot on
//! the opposite stack before switching, which keeps repeated cycles
//! lossless and reversible; the only lossy path is capacity overflow,
//! which silently evicts the OLDEST entry (never the most recent).
//!
//! No-ops are explicit: [`History::undo`] and [`History::redo`] return
//! `None` when there is nothing to move to, and the caller must keep its
//! current buffer in that case.

use std::collections::VecDeque;

use ropey::Rope;

/// An immutable full copy of the document text at one point in history.
pub type Snapshot = Rope;

/// Default stack capacity.
pub const DEFAULT_CAPACITY: usize = 500;

/// LIFO stack with a hard capacity; pushing at capacity drops the
/// bottom (oldest) entry first, ring-buffer style.
#[derive(Debug, Clone)]
struct BoundedStack {
  entries:  VecDeque<Snapshot>,
  capacity: usize,
}

impl BoundedStack {
  fn new(capacity: usize) -> Self {
    Self {
      entries: VecDeque::with_capacity(capacity),
      capacity,
    }
  }

  fn push(&mut self, snapshot: Snapshot) {
    if self.entries.len() == self.capacity {
      self.entries.pop_front();
    }
    self.entries.push_back(snapshot);
  }

  fn pop(&mut self) -> Option<Snapshot> {
    self.entries.pop_back()
  }

  fn top(&self) -> Option<&Snapshot> {
    self.entries.back()
  }

  fn clear(&mut self) {
    self.entries.clear();
  }

  fn len(&self) -> usize {
    self.entries.len()
  }
}

#[derive(Debug, Clone)]
pub struct History {
  undo: BoundedStack,
  redo: BoundedStack,
}

impl Default for History {
  fn default() -> Self {
    Self::new(DEFAULT_CAPACITY)
  }
}

impl History {
  /// An empty history. `capacity` bounds each stack independently and is
  /// clamped to at least 2: undo needs room for a baseline plus one edit.
  pub fn new(capacity: usize) -> Self {
    let capacity = capacity.max(2);
    Self {
      undo: BoundedStack::new(capacity),
      redo: BoundedStack::new(capacity),
    }
  }

  /// Record a confirmed edit. Evicts the oldest undo entry when full and
  /// clears the redo chain (a fresh edit invalidates it).
  pub fn push(&mut self, snapshot: impl Into<Snapshot>) {
    self.undo.push(snapshot.into());
    self.redo.clear();
  }

  /// Step back one level.
  ///
  /// Returns the snapshot to install, or `None` when only the baseline
  /// (or nothing) is recorded. On success the caller's `current` text is
  /// parked on the redo stack so the step can be reversed.
  pub fn undo(&mut self, current: impl Into<Snapshot>) -> Option<Snapshot> {
    if self.undo.len() < 2 {
      return None;
    }
    self.redo.push(current.into());
    self.undo.pop();
    self.undo.top().cloned()
  }

  /// Step forward one level.
  ///
  /// Returns the snapshot to install, or `None` when there is nothing to
  /// redo. On success the caller's `current` text is parked on the undo
  /// stack so the step can be reversed.
  pub fn redo(&mut self, current: impl Into<Snapshot>) -> Option<Snapshot> {
    let snapshot = self.redo.pop()?;
    self.undo.push(current.into());
    Some(snapshot)
  }

  pub fn undo_depth(&self) -> usize {
    self.undo.len()
  }

  pub fn redo_depth(&self) -> usize {
    self.redo.len()
  }

  pub fn capacity(&self) -> usize {
    self.undo.capacity
  }

  /// Drop all recorded history.
  pub fn clear(&mut self) {
    self.undo.clear();
    self.redo.clear();
  }
}
