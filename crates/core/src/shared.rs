// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared-read/exclusive-write handle around an event buffer

use crate::buffer::{BufferStats, EventBuffer};
use crate::error::BufferError;
use std::sync::{Arc, RwLock};

/// Cloneable handle to one event buffer
///
/// Every clone refers to the same buffer. Reads run concurrently with each
/// other; `append` and `clear` take the lock exclusively, so a reader never
/// observes a half-applied append. Reads return owned values.
///
/// The intended shape is one writer task and any number of readers.
/// Multiple writers are serialized by the lock, but their relative order is
/// whatever order they acquire it in.
#[derive(Debug)]
pub struct SharedEventBuffer<T> {
    inner: Arc<RwLock<EventBuffer<T>>>,
}

impl<T> SharedEventBuffer<T> {
    pub fn new(capacity: usize) -> Result<Self, BufferError> {
        Ok(Self::from_buffer(EventBuffer::new(capacity)?))
    }

    pub fn from_buffer(buffer: EventBuffer<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(buffer)),
        }
    }

    /// Append an event, returning the evicted one if the buffer was full
    pub fn append(&self, event: T) -> Option<T> {
        self.inner
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .append(event)
    }

    pub fn clear(&self) {
        self.inner
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }

    pub fn count(&self) -> usize {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).count()
    }

    pub fn capacity(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .capacity()
    }

    pub fn stats(&self) -> BufferStats {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).stats()
    }

    /// Run `f` against the buffer while holding the read lock
    pub fn with_read<R>(&self, f: impl FnOnce(&EventBuffer<T>) -> R) -> R {
        f(&self.inner.read().unwrap_or_else(|e| e.into_inner()))
    }

    /// Read-only handle to the same buffer
    pub fn reader(&self) -> EventReader<T> {
        EventReader {
            shared: self.clone(),
        }
    }
}

impl<T: Clone> SharedEventBuffer<T> {
    pub fn oldest(&self) -> Result<T, BufferError> {
        self.with_read(|buffer| buffer.oldest().cloned())
    }

    pub fn newest(&self) -> Result<T, BufferError> {
        self.with_read(|buffer| buffer.newest().cloned())
    }

    /// Owned copy of all retained events, oldest first
    pub fn snapshot(&self) -> Vec<T> {
        self.with_read(EventBuffer::snapshot)
    }
}

impl<T> Clone for SharedEventBuffer<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Read-only view of a [`SharedEventBuffer`]
///
/// Handed to consumers that must not append or clear.
#[derive(Debug)]
pub struct EventReader<T> {
    shared: SharedEventBuffer<T>,
}

impl<T> EventReader<T> {
    pub fn count(&self) -> usize {
        self.shared.count()
    }

    pub fn capacity(&self) -> usize {
        self.shared.capacity()
    }

    pub fn stats(&self) -> BufferStats {
        self.shared.stats()
    }

    pub fn with_read<R>(&self, f: impl FnOnce(&EventBuffer<T>) -> R) -> R {
        self.shared.with_read(f)
    }
}

impl<T: Clone> EventReader<T> {
    pub fn oldest(&self) -> Result<T, BufferError> {
        self.shared.oldest()
    }

    pub fn newest(&self) -> Result<T, BufferError> {
        self.shared.newest()
    }

    pub fn snapshot(&self) -> Vec<T> {
        self.shared.snapshot()
    }
}

impl<T> Clone for EventReader<T> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

#[cfg(test)]
#[path = "shared_tests.rs"]
mod tests;
