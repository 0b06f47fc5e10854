//! Command History
//!
//! Submitted lines with tail dedupe and an Up/Down navigation cursor. The
//! cursor sits one past the newest entry after every submission.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line. A line equal to the newest entry is not
    /// stored twice; earlier duplicates are kept.
    pub fn push(&mut self, line: &str) {
        if self.entries.last().map(|s| s.as_str()) != Some(line) {
            self.entries.push(line.to_string());
        }
        self.reset_cursor();
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = self.entries.len();
    }

    /// Move the cursor and return the entry under it. Up stops at the
    /// oldest entry; Down past the newest yields an empty line.
    pub fn navigate(&mut self, direction: HistoryDirection) -> String {
        match direction {
            HistoryDirection::Up => {
                if self.entries.is_empty() {
                    return String::new();
                }
                self.cursor = self.cursor.saturating_sub(1);
                self.entries[self.cursor].clone()
            }
            HistoryDirection::Down => {
                if self.cursor + 1 < self.entries.len() {
                    self.cursor += 1;
                    self.entries[self.cursor].clone()
                } else {
                    self.reset_cursor();
                    String::new()
                }
            }
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }
}
