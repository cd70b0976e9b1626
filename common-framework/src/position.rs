use std::fmt;

/// A point in the source: where a token or node starts or ends.
///
/// `line` and `column` are 1-based and `column` counts characters, while
/// `offset` counts bytes so it can slice the input directly. A position
/// with a zero line or column is the "no position" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    /// The first character of the input.
    pub fn new() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    pub fn at(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// The sentinel for "no position". It is never valid.
    pub const fn invalid() -> Self {
        Self {
            line: 0,
            column: 0,
            offset: 0,
        }
    }

    /// Reports whether line and column hold their 1-based minimums.
    pub fn is_valid(&self) -> bool {
        self.line > 0 && self.column > 0
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}:{}", self.line, self.column)
        } else {
            f.write_str("-")
        }
    }
}

/// A start/end pair of positions.
///
/// Displays as `line:startCol:endCol` when both ends share a line and as
/// `line:col:line:col` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    pub fn is_valid(&self) -> bool {
        self.start.is_valid() && self.end.is_valid()
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.line == self.end.line {
            write!(
                f,
                "{}:{}:{}",
                self.start.line, self.start.column, self.end.column
            )
        } else {
            write!(f, "{}:{}", self.start, self.end)
        }
    }
}
