//! Capacity specs
//!
//! The buffer never holds more than its capacity and rejects
//! non-positive capacities at construction.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn ten_appends_into_hundred_keeps_all() {
    let mut buffer = make_buffer(100);
    append_books(&mut buffer, 0..10);

    assert_eq!(buffer.count(), 10);
    assert_eq!(book_id(buffer.oldest().unwrap()), "book-0");
    assert_eq!(book_id(buffer.newest().unwrap()), "book-9");
}

#[test]
fn exactly_full_buffer_keeps_all() {
    let mut buffer = make_buffer(100);
    append_books(&mut buffer, 0..100);

    assert_eq!(buffer.count(), 100);
    assert_eq!(book_id(buffer.oldest().unwrap()), "book-0");
    assert_eq!(book_id(buffer.newest().unwrap()), "book-99");
}

#[test]
fn overflow_keeps_most_recent_hundred() {
    let mut buffer = make_buffer(100);
    append_books(&mut buffer, 0..150);

    assert_eq!(buffer.count(), 100);
    assert_eq!(book_id(buffer.oldest().unwrap()), "book-50");
    assert_eq!(book_id(buffer.newest().unwrap()), "book-149");
}

#[test]
fn repeated_appends_do_not_grow() {
    let mut buffer = make_buffer(100);
    for i in 0..500 {
        buffer.append(book_event(i % 10));
    }
    assert_eq!(buffer.count(), 100);

    let mut buffer = make_buffer(100);
    for i in 0..1000 {
        buffer.append(book_event(i % 10));
    }
    assert_eq!(buffer.count(), 100);
}

#[test]
fn zero_and_negative_capacity_fail() {
    for capacity in [0, -5] {
        let result = BufferConfig::with_capacity(capacity).build::<Event>();
        assert!(
            matches!(result, Err(BufferError::InvalidConfiguration { .. })),
            "capacity {} should be rejected",
            capacity
        );
    }
}

#[test]
fn empty_buffer_reports_empty() {
    let buffer = make_buffer(3);
    assert!(matches!(buffer.oldest(), Err(BufferError::EmptyBuffer)));
    assert!(matches!(buffer.newest(), Err(BufferError::EmptyBuffer)));
}
