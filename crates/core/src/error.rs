// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for event buffers

use std::collections::TryReserveError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur constructing or reading a buffer
#[derive(Debug, Error)]
pub enum BufferError {
    #[error("invalid configuration: capacity must be positive, got {capacity}")]
    InvalidConfiguration { capacity: i64 },
    #[error("cannot allocate {capacity} buffer slots: {source}")]
    CapacityTooLarge {
        capacity: usize,
        source: TryReserveError,
    },
    #[error("buffer is empty")]
    EmptyBuffer,
    #[error("failed to read config {0}: {1}")]
    ConfigIo(PathBuf, #[source] std::io::Error),
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
