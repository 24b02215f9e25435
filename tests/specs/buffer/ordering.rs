//! Ordering specs
//!
//! Retained events keep arrival order; overflow drops only the oldest.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn snapshot_preserves_arrival_order() {
    let mut buffer = make_buffer(5);
    append_books(&mut buffer, 0..5);

    let snapshot = buffer.snapshot();
    let ids: Vec<&str> = snapshot.iter().map(book_id).collect();
    assert_eq!(ids, vec!["book-0", "book-1", "book-2", "book-3", "book-4"]);
}

#[test]
fn overflow_shifts_window_by_one() {
    let mut buffer = make_buffer(4);
    append_books(&mut buffer, 0..5);

    let snapshot = buffer.snapshot();
    let ids: Vec<&str> = snapshot.iter().map(book_id).collect();
    assert_eq!(ids, vec!["book-1", "book-2", "book-3", "book-4"]);
}

#[test]
fn snapshot_is_repeatable() {
    let mut buffer = make_buffer(8);
    append_books(&mut buffer, 0..12);
    assert_eq!(buffer.snapshot(), buffer.snapshot());
}

#[test]
fn clear_then_append_starts_fresh() {
    let mut buffer = make_buffer(8);
    append_books(&mut buffer, 0..12);
    buffer.clear();
    assert_eq!(buffer.count(), 0);

    buffer.append(book_event("fresh"));
    assert_eq!(buffer.snapshot(), vec![book_event("fresh")]);
}

#[test]
fn single_slot_buffer_is_most_recent_wins() {
    let mut buffer = make_buffer(1);
    buffer.append(book_event("e1"));
    buffer.append(book_event("e2"));
    assert_eq!(buffer.snapshot(), vec![book_event("e2")]);
}
