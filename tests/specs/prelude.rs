//! Shared helpers for specs

use evbuf_core::EventBuffer;
use serde_json::json;
use std::sync::Once;

pub use evbuf_core::{BufferConfig, BufferError, Event};

static TRACING: Once = Once::new();

/// Install a test subscriber once; filter with `RUST_LOG` (default `info`)
pub fn init_tracing() {
    TRACING.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_test_writer())
            .with(filter)
            .try_init();
    });
}

/// A progress event tagged with `bookId`
pub fn book_event(book_id: impl std::fmt::Display) -> Event {
    let mut event = Event::new();
    event.insert("type".to_string(), json!("progress"));
    event.insert("bookId".to_string(), json!(format!("book-{}", book_id)));
    event
}

pub fn book_id(event: &Event) -> &str {
    event["bookId"].as_str().unwrap()
}

pub fn make_buffer(capacity: i64) -> EventBuffer<Event> {
    init_tracing();
    BufferConfig::with_capacity(capacity).build().unwrap()
}

pub fn append_books(buffer: &mut EventBuffer<Event>, range: std::ops::Range<usize>) {
    for i in range {
        buffer.append(book_event(i));
    }
}
