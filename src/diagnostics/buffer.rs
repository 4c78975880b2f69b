// SPDX-License-Identifier: MPL-2.0
//! Bounded storage for the page's diagnostic events.
//!
//! A page can stay open for a whole working day while dragover and toast
//! events keep arriving, so the buffer keeps only the most recent events and
//! counts what it had to let go. The count ends up in the exported report so
//! a reader knows the history is partial.

use std::collections::VecDeque;

pub use crate::domain::diagnostics::BufferCapacity;

/// Ring of the most recent events, oldest first.
///
/// ```
/// use ocr_lens::diagnostics::{BufferCapacity, CircularBuffer};
///
/// let mut recent = CircularBuffer::new(BufferCapacity::new(16));
/// for upload in 0..20 {
///     recent.push(upload);
/// }
///
/// assert_eq!(recent.iter().next(), Some(&4));
/// assert_eq!(recent.evicted(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
    evicted: u64,
}

impl<T> CircularBuffer<T> {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self::with_raw_capacity(capacity.value())
    }

    /// Unchecked capacity for tests; zero is raised to one.
    #[must_use]
    pub fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
            evicted: 0,
        }
    }

    /// Appends `item`, letting go of the oldest event when full.
    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
            self.evicted += 1;
        }
        self.data.push_back(item);
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Events pushed out since the last [`clear`](Self::clear).
    #[must_use]
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    pub fn clear(&mut self) {
        self.data.clear();
        self.evicted = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_events_make_room_for_new_ones() {
        let mut buffer = CircularBuffer::with_raw_capacity(3);
        for toast in ["uploaded", "copied", "saved", "failed", "retried"] {
            buffer.push(toast);
        }
        let kept: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(kept, vec!["saved", "failed", "retried"]);
        assert_eq!(buffer.evicted(), 2);
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut buffer = CircularBuffer::with_raw_capacity(0);
        buffer.push("dragover");
        buffer.push("drop");
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec!["drop"]);
    }

    #[test]
    fn clear_resets_events_and_eviction_count() {
        let mut buffer = CircularBuffer::with_raw_capacity(1);
        buffer.push(1);
        buffer.push(2);
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.evicted(), 0);
    }
}
