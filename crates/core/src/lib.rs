// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! evbuf-core: bounded, insertion-ordered event buffers
//!
//! This crate provides:
//! - `EventBuffer` - fixed-capacity FIFO ring that evicts the oldest event
//! - `SharedEventBuffer` - cloneable handle with shared-read/exclusive-write access
//! - `EventReader` - read-only view handed to consumers
//! - `BufferConfig` - TOML-backed capacity configuration
//! - `BufferError` - error taxonomy for construction and reads

mod buffer;
mod config;
mod error;
mod shared;

pub use buffer::{BufferStats, EventBuffer, Iter};
pub use config::{BufferConfig, DEFAULT_CAPACITY};
pub use error::BufferError;
pub use shared::{EventReader, SharedEventBuffer};

/// Opaque event payload: string keys mapped to arbitrary JSON values
pub type Event = serde_json::Map<String, serde_json::Value>;
