use common_framework::{Checkpoint, Kind, Position, RuleError, Token};

/// What rule actions receive past the end of the token stream.
static NO_TOKEN: Token = Token {
    kind: Kind::ILLEGAL,
    start: Position::invalid(),
    end: Position::invalid(),
    literal: String::new(),
};

/// A cursor over the lexed token sequence, shared by the engine and the rule
/// actions it runs.
///
/// Actions leave the cursor on the last token they consumed; the engine then
/// steps past it.
#[derive(Debug, Clone)]
pub struct ParseContext {
    tokens: Vec<Token>,
    index: usize,
}

impl ParseContext {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, index: 0 }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Index of the token under the cursor.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns true once the cursor has moved past the last token.
    pub fn is_eof(&self) -> bool {
        self.index >= self.tokens.len()
    }

    /// The token under the cursor, or the empty sentinel past the end.
    pub fn current(&self) -> &Token {
        self.tokens.get(self.index).unwrap_or(&NO_TOKEN)
    }

    /// Advances one token and returns the token now under the cursor.
    ///
    /// Once the stream is exhausted this keeps returning the empty sentinel.
    pub fn next(&mut self) -> &Token {
        self.index = (self.index + 1).min(self.tokens.len());
        self.current()
    }

    /// Retreats one token and returns the token now under the cursor.
    ///
    /// Backing up from the first token leaves the cursor where it is and
    /// returns the empty sentinel.
    pub fn backup(&mut self) -> &Token {
        match self.index.checked_sub(1) {
            Some(index) => {
                self.index = index;
                self.current()
            }
            None => &NO_TOKEN,
        }
    }

    /// The `n` tokens starting at the cursor, or `None` if fewer remain.
    pub fn lookahead(&self, n: usize) -> Option<&[Token]> {
        self.tokens.get(self.index..self.index.checked_add(n)?)
    }

    /// The `n` tokens before the cursor, or `None` if fewer precede it.
    pub fn lookbehind(&self, n: usize) -> Option<&[Token]> {
        self.tokens.get(self.index.checked_sub(n)?..self.index)
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::new(self.index, self.current().start)
    }

    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.index = checkpoint.index().min(self.tokens.len());
    }

    /// A signal that hands the current token to the next candidate rule.
    pub fn try_next_rule(&self, message: impl Into<String>) -> RuleError {
        RuleError::try_next(message, self.current().start)
    }

    /// A fatal error at the token under the cursor.
    pub fn error(&self, message: impl Into<String>) -> RuleError {
        RuleError::fatal(message, self.current().start)
    }
}
