// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Buffer configuration
//!
//! Loaded from TOML, e.g.:
//!
//! ```toml
//! capacity = 250
//! ```

use crate::buffer::EventBuffer;
use crate::error::BufferError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Capacity used when none is configured
pub const DEFAULT_CAPACITY: i64 = 100;

/// Configuration for an event buffer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BufferConfig {
    /// Maximum number of retained events; must be positive
    pub capacity: i64,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl BufferConfig {
    pub fn with_capacity(capacity: i64) -> Self {
        Self { capacity }
    }

    /// Parse configuration from a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self, BufferError> {
        Ok(toml::from_str(source)?)
    }

    /// Load configuration from a TOML file, or defaults if it doesn't exist
    pub fn load(path: &Path) -> Result<Self, BufferError> {
        let source = match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(BufferError::ConfigIo(path.to_path_buf(), e)),
        };
        Self::from_toml_str(&source)
    }

    /// Check the configured capacity, returning it as a slot count
    pub fn validate(&self) -> Result<usize, BufferError> {
        match usize::try_from(self.capacity) {
            Ok(capacity) if capacity > 0 => Ok(capacity),
            _ => Err(BufferError::InvalidConfiguration {
                capacity: self.capacity,
            }),
        }
    }

    /// Build an empty buffer with this configuration
    pub fn build<T>(&self) -> Result<EventBuffer<T>, BufferError> {
        EventBuffer::new(self.validate()?)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
