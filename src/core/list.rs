//! The list engine: an owned, ordered sequence of letters addressed as
//! head/tail. `push` prepends, so the structure reads most-recent-first;
//! `remove` unlinks the first head-nearest match only. Duplicates are
//! allowed, and the empty list is a valid state — queries on it fail with
//! a typed error rather than panicking.
use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Letter;

#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("operation on empty list")]
    Empty,

    #[error("no entry matches '{0}'")]
    NotFound(Letter),
}

/// The process-wide ordered sequence of letters, front = head.
///
/// Backed by a deque; the size is derived from the backing store, so the
/// length counter can never drift from the reachable entries.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderedList {
    entries: VecDeque<Letter>,
}

impl OrderedList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `letter` as the new head.
    pub fn push(&mut self, letter: Letter) {
        self.entries.push_front(letter);
    }

    /// Unlink the first head-nearest entry equal to `letter`.
    ///
    /// An empty list and a list with no match both report `NotFound`; the
    /// list is left unchanged in either case.
    pub fn remove(&mut self, letter: Letter) -> Result<(), EngineError> {
        let index = self
            .entries
            .iter()
            .position(|&entry| entry == letter)
            .ok_or(EngineError::NotFound(letter))?;
        self.entries.remove(index);
        Ok(())
    }

    pub fn head(&self) -> Result<Letter, EngineError> {
        self.entries.front().copied().ok_or(EngineError::Empty)
    }

    pub fn tail(&self) -> Result<Letter, EngineError> {
        self.entries.back().copied().ok_or(EngineError::Empty)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the full listing head→tail, hyphen-separated; `-` when empty.
    pub fn render(&self) -> String {
        if self.entries.is_empty() {
            return "-".to_string();
        }
        self.entries
            .iter()
            .map(|letter| letter.to_string())
            .collect::<Vec<_>>()
            .join("-")
    }
}
