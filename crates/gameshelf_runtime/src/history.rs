//! Bounded command history.

use std::collections::VecDeque;

/// FIFO of the most recent command lines.
#[derive(Clone, Debug)]
pub struct CommandHistory {
    /// Oldest first.
    lines: VecDeque<String>,
    capacity: usize,
}

impl CommandHistory {
    /// Creates an empty history holding at most `capacity` lines.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    /// Returns the maximum number of lines kept.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of remembered lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Records a line, evicting the oldest if at capacity.
    pub fn push(&mut self, line: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line.into());
    }

    /// Iterates the `count` most recent lines, oldest first.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &str> {
        let skip = self.lines.len().saturating_sub(count);
        self.lines.iter().skip(skip).map(String::as_str)
    }

    /// Forgets every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
