// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Connection-scoped store of recent progress messages
//!
//! The store is the only writer of its buffer. Consumers (e.g. a UI state
//! projector) get an [`EventReader`] from [`ProgressStore::reader`] and only
//! ever see snapshots.

use crate::clock::Clock;
use crate::error::StoreError;
use crate::message::ProgressMessage;
use evbuf_core::{BufferConfig, Event, EventReader, SharedEventBuffer};
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// State of the live connection feeding the store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

/// Recent progress messages for one live connection
pub struct ProgressStore<C: Clock> {
    messages: SharedEventBuffer<Event>,
    state: ConnectionState,
    clock: C,
}

impl<C: Clock> ProgressStore<C> {
    pub fn new(config: &BufferConfig, clock: C) -> Result<Self, StoreError> {
        Ok(Self {
            messages: SharedEventBuffer::from_buffer(config.build()?),
            state: ConnectionState::Disconnected,
            clock,
        })
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn connecting(&mut self) {
        self.set_state(ConnectionState::Connecting);
    }

    pub fn connected(&mut self) {
        self.set_state(ConnectionState::Connected);
    }

    /// Mark the connection closed; retained messages are kept
    pub fn disconnected(&mut self) {
        self.set_state(ConnectionState::Disconnected);
    }

    fn set_state(&mut self, state: ConnectionState) {
        if self.state != state {
            info!(from = ?self.state, to = ?state, "connection state changed");
            self.state = state;
        }
    }

    /// Stamp a message with the receive time and store it
    pub fn push(&mut self, mut message: ProgressMessage) -> Result<(), StoreError> {
        message.received_at = Some(self.clock.now());
        let event = message.to_event()?;
        self.messages.append(event);
        Ok(())
    }

    /// Store a raw event as-is
    pub fn push_event(&mut self, event: Event) {
        self.messages.append(event);
    }

    /// All retained events, oldest first
    pub fn messages(&self) -> Vec<Event> {
        self.messages.snapshot()
    }

    /// Retained events that decode as progress messages, oldest first
    pub fn progress_messages(&self) -> Vec<ProgressMessage> {
        self.messages.with_read(|buffer| {
            buffer
                .iter()
                .filter_map(|event| ProgressMessage::from_event(event).ok())
                .collect()
        })
    }

    /// Most recent progress message for `book_id`
    pub fn latest_for_book(&self, book_id: &str) -> Option<ProgressMessage> {
        self.messages.with_read(|buffer| {
            buffer
                .iter()
                .rev()
                .filter_map(|event| ProgressMessage::from_event(event).ok())
                .find(|message| message.book_id == book_id)
        })
    }

    pub fn count(&self) -> usize {
        self.messages.count()
    }

    /// Drop all retained messages; connection state is unchanged
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Read-only handle for consumers on other tasks
    pub fn reader(&self) -> EventReader<Event> {
        self.messages.reader()
    }

    /// Drain `rx` into the store until every sender is dropped
    ///
    /// Returns the number of messages stored.
    pub async fn run_ingest(
        &mut self,
        mut rx: mpsc::UnboundedReceiver<ProgressMessage>,
    ) -> Result<usize, StoreError> {
        debug!("progress ingest started");
        let mut ingested = 0;

        while let Some(message) = rx.recv().await {
            self.push(message)?;
            ingested += 1;
        }

        debug!(ingested, "progress ingest finished");
        Ok(ingested)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
