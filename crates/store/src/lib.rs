// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! evbuf-store: live progress message store
//!
//! Keeps the most recent generation-progress messages for a live
//! connection in a bounded buffer, and tracks the connection state.

mod clock;
mod error;
mod message;
mod store;

pub use clock::{Clock, FakeClock, SystemClock};
pub use error::StoreError;
pub use message::{MessageKind, ProgressMessage};
pub use store::{ConnectionState, ProgressStore};
