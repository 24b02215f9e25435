// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the progress store

use evbuf_core::BufferError;
use thiserror::Error;

/// Errors that can occur in the progress store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("buffer error: {0}")]
    Buffer(#[from] BufferError),
    #[error("malformed progress message: {0}")]
    Message(#[from] serde_json::Error),
}
