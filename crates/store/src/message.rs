// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Generation progress messages
//!
//! Messages travel as plain JSON objects (`Event`) inside the buffer, e.g.
//! `{"type": "progress", "bookId": "book-3", "progressPercent": 40, ...}`.

use crate::error::StoreError;
use chrono::{DateTime, Utc};
use evbuf_core::Event;
use serde::{Deserialize, Deserializer, Serialize};

/// What a progress message reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Progress,
    Completed,
    Failed,
    Status,
}

/// A progress update for one book's generation task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressMessage {
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub book_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    /// Percent complete, 0 to 100; larger values are capped on decode
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_capped_percent"
    )]
    pub progress_percent: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_step: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Set by the store when the message is accepted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_at: Option<DateTime<Utc>>,
}

impl ProgressMessage {
    fn new(kind: MessageKind, book_id: impl Into<String>) -> Self {
        Self {
            kind,
            book_id: book_id.into(),
            task_id: None,
            progress_percent: None,
            current_step: None,
            error: None,
            received_at: None,
        }
    }

    /// A step update; percentages above 100 are capped
    pub fn progress(book_id: impl Into<String>, percent: u8, step: impl Into<String>) -> Self {
        Self {
            progress_percent: Some(percent.min(100)),
            current_step: Some(step.into()),
            ..Self::new(MessageKind::Progress, book_id)
        }
    }

    pub fn completed(book_id: impl Into<String>) -> Self {
        Self {
            progress_percent: Some(100),
            ..Self::new(MessageKind::Completed, book_id)
        }
    }

    pub fn failed(book_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::new(MessageKind::Failed, book_id)
        }
    }

    pub fn status(book_id: impl Into<String>, step: impl Into<String>) -> Self {
        Self {
            current_step: Some(step.into()),
            ..Self::new(MessageKind::Status, book_id)
        }
    }

    pub fn with_task_id(mut self, task_id: impl Into<String>) -> Self {
        self.task_id = Some(task_id.into());
        self
    }

    /// Encode as a buffer event
    pub fn to_event(&self) -> Result<Event, StoreError> {
        Ok(serde_json::to_value(self).and_then(serde_json::from_value)?)
    }

    /// Decode a buffer event
    pub fn from_event(event: &Event) -> Result<Self, StoreError> {
        Ok(serde_json::from_value(serde_json::Value::Object(
            event.clone(),
        ))?)
    }
}

fn deserialize_capped_percent<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u8>::deserialize(deserializer)?.map(|percent| percent.min(100)))
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
