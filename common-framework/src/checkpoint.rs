use crate::Position;

/// A saved cursor location.
///
/// The parser takes one before every rule action so that a try-next-rule
/// signal leaves its token cursor where the attempt began.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    index: usize,
    position: Position,
}

impl Checkpoint {
    pub fn new(index: usize, position: Position) -> Self {
        Self { index, position }
    }

    /// Token index to return to.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Source position of the token at `index`, for diagnostics.
    pub fn position(&self) -> Position {
        self.position
    }
}
