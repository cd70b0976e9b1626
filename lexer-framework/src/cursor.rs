use crate::matchers::is_newline;
use common_framework::{CursorProbe, Position};

/// A cursor for traversing input text during lexing.
///
/// The cursor sits *on* a character: [`Cursor::current`] is the character
/// under it, [`Cursor::next`] steps past it and returns the new lookahead.
/// Only one step of history is kept, so [`Cursor::prev`] can undo exactly
/// one move.
#[derive(Debug, Clone)]
pub struct Cursor<'input> {
    input: &'input str,
    position: Position,
    previous: Position,
    probe: CursorProbe,
}

impl<'input> Cursor<'input> {
    /// Creates a new cursor at the start of the input.
    pub fn new(input: &'input str) -> Self {
        Self::with_probe(input, CursorProbe::new())
    }

    /// Creates a cursor that publishes its offset to `probe` after every move.
    pub fn with_probe(input: &'input str, probe: CursorProbe) -> Self {
        probe.record(0);
        Self {
            input,
            position: Position::new(),
            previous: Position::invalid(),
            probe,
        }
    }

    /// Returns the whole input.
    pub fn input(&self) -> &'input str {
        self.input
    }

    /// Returns the current position in the source.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the position remembered for [`Cursor::prev`], which is
    /// invalid until the cursor has moved.
    pub fn previous(&self) -> Position {
        self.previous
    }

    /// Returns the current offset in bytes.
    pub fn offset(&self) -> usize {
        self.position.offset
    }

    /// Returns true if the cursor is at the end of the input.
    pub fn is_eof(&self) -> bool {
        self.position.offset >= self.input.len()
    }

    /// Returns the character under the cursor.
    pub fn current(&self) -> Option<char> {
        self.input.get(self.position.offset..)?.chars().next()
    }

    /// Steps past the current character and returns the new lookahead.
    ///
    /// Moving onto a newline (`\n` or `\r`) starts a new line, unless the
    /// character being left is a backslash or a single quote. In that case
    /// the column just keeps counting.
    ///
    /// At end of input, or once the probe has been cancelled, the cursor
    /// stays put and `None` is returned.
    pub fn next(&mut self) -> Option<char> {
        if self.probe.is_cancelled() {
            return None;
        }
        let left = self.current()?;

        self.previous = self.position;
        self.position.offset += left.len_utf8();
        self.position.column += 1;

        let lookahead = self.current();
        if left != '\\' && left != '\'' && lookahead.is_some_and(is_newline) {
            self.position.column = 1;
            self.position.line += 1;
        }

        self.probe.record(self.position.offset);
        lookahead
    }

    /// Rewinds to the remembered previous position and returns the character
    /// there. A cursor that has never moved stays where it is.
    pub fn prev(&mut self) -> Option<char> {
        if self.previous.is_valid() {
            self.position = self.previous;
            self.probe.record(self.position.offset);
        }
        self.current()
    }

    /// Returns up to `n` characters from the cursor without consuming them,
    /// clamped at end of input.
    pub fn lookahead(&self, n: usize) -> &'input str {
        let offset = self.position.offset.min(self.input.len());
        let remaining = &self.input[offset..];
        let end = remaining
            .char_indices()
            .nth(n)
            .map(|(i, _)| i)
            .unwrap_or(remaining.len());
        &remaining[..end]
    }

    /// Returns the input between `start` and the cursor.
    pub fn slice_from(&self, start: Position) -> &'input str {
        let end = self.position.offset.min(self.input.len());
        self.input.get(start.offset.min(end)..end).unwrap_or_default()
    }

    /// Returns true once the watchdog observing this cursor has tripped.
    pub fn is_cancelled(&self) -> bool {
        self.probe.is_cancelled()
    }
}
