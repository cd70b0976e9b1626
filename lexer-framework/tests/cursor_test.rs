use common_framework::CursorProbe;
use lexer_framework::{Cursor, Position};

#[test]
fn test_cursor_new() {
    let cursor = Cursor::new("hello");
    assert_eq!(cursor.offset(), 0);
    assert_eq!(cursor.position(), Position::new());
    assert_eq!(cursor.current(), Some('h'));
    assert!(!cursor.previous().is_valid());
    assert!(!cursor.is_eof());
}

#[test]
fn test_cursor_next_returns_lookahead() {
    let mut cursor = Cursor::new("hello");
    assert_eq!(cursor.next(), Some('e'));
    assert_eq!(cursor.offset(), 1);
    assert_eq!(cursor.position().column, 2);
    assert_eq!(cursor.current(), Some('e'));
    assert_eq!(cursor.previous(), Position::new());
}

#[test]
fn test_cursor_next_at_eof() {
    let mut cursor = Cursor::new("hi");
    assert_eq!(cursor.next(), Some('i'));
    assert!(!cursor.is_eof());
    assert_eq!(cursor.next(), None);
    assert!(cursor.is_eof());
    assert_eq!(cursor.offset(), 2);

    // Further calls are safe and do not move.
    assert_eq!(cursor.next(), None);
    assert_eq!(cursor.offset(), 2);
    assert_eq!(cursor.position(), Position::at(1, 3, 2));
}

#[test]
fn test_cursor_empty_string() {
    let mut cursor = Cursor::new("");
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), None);
    assert_eq!(cursor.next(), None);
    assert_eq!(cursor.position(), Position::new());
}

#[test]
fn test_cursor_newline_starts_line_on_arrival() {
    let mut cursor = Cursor::new("a\nb");

    // Stepping onto the newline already counts as the new line.
    assert_eq!(cursor.next(), Some('\n'));
    assert_eq!(cursor.position(), Position::at(2, 1, 1));

    assert_eq!(cursor.next(), Some('b'));
    assert_eq!(cursor.position(), Position::at(2, 2, 2));

    assert_eq!(cursor.next(), None);
    assert_eq!(cursor.position(), Position::at(2, 3, 3));
}

#[test]
fn test_cursor_carriage_return_counts_as_newline() {
    let mut cursor = Cursor::new("a\r\nb");
    cursor.next();
    assert_eq!(cursor.position(), Position::at(2, 1, 1));
    cursor.next();
    assert_eq!(cursor.position(), Position::at(3, 1, 2));
}

#[test]
fn test_cursor_newline_after_quote_keeps_line() {
    let mut cursor = Cursor::new("'\n'");
    assert_eq!(cursor.next(), Some('\n'));
    assert_eq!(cursor.position(), Position::at(1, 2, 1));
    assert_eq!(cursor.next(), Some('\''));
    assert_eq!(cursor.position(), Position::at(1, 3, 2));
}

#[test]
fn test_cursor_newline_after_backslash_keeps_line() {
    let mut cursor = Cursor::new("\\\nx");
    assert_eq!(cursor.next(), Some('\n'));
    assert_eq!(cursor.position(), Position::at(1, 2, 1));
}

#[test]
fn test_cursor_prev_undoes_one_step() {
    let mut cursor = Cursor::new("abc");
    cursor.next();
    cursor.next();
    assert_eq!(cursor.offset(), 2);

    assert_eq!(cursor.prev(), Some('b'));
    assert_eq!(cursor.offset(), 1);

    // Only one level of history is kept.
    assert_eq!(cursor.prev(), Some('b'));
    assert_eq!(cursor.offset(), 1);
}

#[test]
fn test_cursor_prev_before_moving_is_noop() {
    let mut cursor = Cursor::new("abc");
    assert_eq!(cursor.prev(), Some('a'));
    assert_eq!(cursor.position(), Position::new());
}

#[test]
fn test_cursor_lookahead() {
    let mut cursor = Cursor::new("<<=x");
    assert_eq!(cursor.lookahead(0), "");
    assert_eq!(cursor.lookahead(3), "<<=");
    assert_eq!(cursor.lookahead(100), "<<=x");
    assert_eq!(cursor.offset(), 0);

    for _ in 0..4 {
        cursor.next();
    }
    assert_eq!(cursor.lookahead(5), "");
}

#[test]
fn test_cursor_unicode() {
    let mut cursor = Cursor::new("héllo");
    assert_eq!(cursor.lookahead(2), "hé");
    assert_eq!(cursor.next(), Some('é'));
    assert_eq!(cursor.next(), Some('l'));
    assert_eq!(cursor.offset(), 3);
    assert_eq!(cursor.position().column, 3);
}

#[test]
fn test_cursor_slice_from() {
    let mut cursor = Cursor::new("hello world");
    let start = cursor.position();
    for _ in 0..5 {
        cursor.next();
    }
    assert_eq!(cursor.slice_from(start), "hello");
}

#[test]
fn test_cursor_publishes_offset() {
    let probe = CursorProbe::new();
    let mut cursor = Cursor::with_probe("abc", probe.clone());
    cursor.next();
    cursor.next();
    assert_eq!(probe.offset(), 2);
    cursor.prev();
    assert_eq!(probe.offset(), 1);
}

#[test]
fn test_cursor_stops_once_cancelled() {
    let probe = CursorProbe::new();
    let mut cursor = Cursor::with_probe("abc", probe.clone());
    cursor.next();
    probe.cancel();

    assert!(cursor.is_cancelled());
    assert_eq!(cursor.next(), None);
    assert_eq!(cursor.offset(), 1);
}
