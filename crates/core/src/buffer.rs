// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed-capacity FIFO event buffer
//!
//! Events are kept in arrival order. Once the buffer is full, every append
//! evicts exactly one event: the oldest retained one. Storage is a ring of
//! slots allocated once at construction, so appends never reallocate.

use crate::error::BufferError;
use serde::Serialize;
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// Counters describing a buffer's contents and history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BufferStats {
    /// Maximum number of retained events
    pub capacity: usize,
    /// Number of events currently retained
    pub len: usize,
    /// Successful appends since construction (not reset by `clear`)
    pub total_appended: u64,
    /// Events dropped to make room since construction (not reset by `clear`)
    pub evicted: u64,
}

/// Bounded, insertion-ordered buffer of events
///
/// Mutation requires `&mut self`, so a single owner serializes writers.
/// Use [`SharedEventBuffer`](crate::SharedEventBuffer) when readers live on
/// other tasks or threads.
#[derive(Debug, Clone)]
pub struct EventBuffer<T> {
    slots: Vec<Option<T>>,
    /// Slot index of the oldest retained event
    head: usize,
    len: usize,
    total_appended: u64,
    evicted: u64,
}

impl<T> EventBuffer<T> {
    /// Create an empty buffer holding at most `capacity` events
    pub fn new(capacity: usize) -> Result<Self, BufferError> {
        if capacity == 0 {
            return Err(BufferError::InvalidConfiguration { capacity: 0 });
        }

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|source| BufferError::CapacityTooLarge { capacity, source })?;
        slots.extend(std::iter::repeat_with(|| None).take(capacity));

        debug!(capacity, "created event buffer");

        Ok(Self {
            slots,
            head: 0,
            len: 0,
            total_appended: 0,
            evicted: 0,
        })
    }

    /// Append an event, evicting the oldest one if the buffer is full
    ///
    /// Returns the evicted event, if any.
    pub fn append(&mut self, event: T) -> Option<T> {
        let capacity = self.capacity();
        self.total_appended += 1;

        if self.len < capacity {
            let tail = (self.head + self.len) % capacity;
            self.slots[tail] = Some(event);
            self.len += 1;
            return None;
        }

        // Full: the head slot holds the oldest event; overwrite it and advance
        let dropped = self.slots[self.head].replace(event);
        self.head = (self.head + 1) % capacity;
        self.evicted += 1;
        trace!(capacity, evicted = self.evicted, "evicted oldest event");
        dropped
    }

    /// Number of retained events
    pub fn count(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Event at `index`, counting from the oldest
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.slots[(self.head + index) % self.capacity()].as_ref()
    }

    /// The oldest retained event
    pub fn oldest(&self) -> Result<&T, BufferError> {
        self.get(0).ok_or(BufferError::EmptyBuffer)
    }

    /// The most recently appended event
    pub fn newest(&self) -> Result<&T, BufferError> {
        match self.len.checked_sub(1) {
            Some(last) => self.get(last).ok_or(BufferError::EmptyBuffer),
            None => Err(BufferError::EmptyBuffer),
        }
    }

    /// Iterate retained events, oldest first
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            buffer: self,
            front: 0,
            back: self.len,
        }
    }

    /// Drop all retained events; capacity and counters are kept
    pub fn clear(&mut self) {
        let dropped = self.len;
        for slot in &mut self.slots {
            *slot = None;
        }
        self.head = 0;
        self.len = 0;
        debug!(dropped, "cleared event buffer");
    }

    pub fn stats(&self) -> BufferStats {
        BufferStats {
            capacity: self.capacity(),
            len: self.len,
            total_appended: self.total_appended,
            evicted: self.evicted,
        }
    }
}

impl<T: Clone> EventBuffer<T> {
    /// Owned copy of all retained events, oldest first
    pub fn snapshot(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<'a, T> IntoIterator for &'a EventBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a buffer, oldest first
pub struct Iter<'a, T> {
    buffer: &'a EventBuffer<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.buffer.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.buffer.get(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
