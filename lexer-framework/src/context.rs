use crate::config::Symbols;
use crate::cursor::Cursor;
use common_framework::{CursorProbe, Kind, Position, RuleError, Token};

/// What a rule action sees while it runs: the cursor over the input and the
/// symbol tables used to classify finished literals.
///
/// One context lives for exactly one lex call.
#[derive(Debug)]
pub struct LexContext<'input> {
    cursor: Cursor<'input>,
    symbols: &'input Symbols,
}

impl<'input> LexContext<'input> {
    pub fn new(input: &'input str, symbols: &'input Symbols) -> Self {
        Self::with_probe(input, symbols, CursorProbe::new())
    }

    pub(crate) fn with_probe(
        input: &'input str,
        symbols: &'input Symbols,
        probe: CursorProbe,
    ) -> Self {
        Self {
            cursor: Cursor::with_probe(input, probe),
            symbols,
        }
    }

    /// Returns a reference to the cursor.
    pub fn cursor(&self) -> &Cursor<'input> {
        &self.cursor
    }

    pub fn input(&self) -> &'input str {
        self.cursor.input()
    }

    /// Returns the current position.
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    /// Returns true if at end of input.
    pub fn is_eof(&self) -> bool {
        self.cursor.is_eof()
    }

    /// Returns the character under the cursor.
    pub fn current(&self) -> Option<char> {
        self.cursor.current()
    }

    /// Advances one character and returns the new lookahead.
    pub fn next(&mut self) -> Option<char> {
        self.cursor.next()
    }

    /// Undoes the last move.
    pub fn prev(&mut self) -> Option<char> {
        self.cursor.prev()
    }

    /// Peeks at up to `n` characters from the cursor.
    pub fn lookahead(&self, n: usize) -> &'input str {
        self.cursor.lookahead(n)
    }

    /// Returns true once the loop watchdog has cancelled this lex call.
    pub fn is_cancelled(&self) -> bool {
        self.cursor.is_cancelled()
    }

    pub fn symbols(&self) -> &Symbols {
        self.symbols
    }

    /// Looks a literal up in the operator and keyword tables.
    pub fn lookup(&self, literal: &str) -> Option<Kind> {
        self.symbols.lookup(literal)
    }

    /// Opens a rule attempt: a token of `kind` starting at the cursor.
    pub fn start_rule(&self, kind: Kind) -> Token {
        Token {
            kind,
            start: self.position(),
            ..Token::default()
        }
    }

    /// Closes a rule attempt: stamps the end position and literal, and lets
    /// the symbol tables reclassify the literal unless the token carries a
    /// kind that must not be reclassified.
    pub fn end_rule(&self, mut token: Token) -> Token {
        token.end = self.position();
        token.literal = self.cursor.slice_from(token.start).to_owned();

        if token.kind.is_reclassifiable() {
            if let Some(kind) = self.lookup(&token.literal) {
                token.kind = kind;
            }
        }
        token
    }

    /// A signal that hands the current character to the next candidate rule.
    pub fn try_next_rule(&self, message: impl Into<String>) -> RuleError {
        RuleError::try_next(message, self.position())
    }

    /// A fatal error at the cursor.
    pub fn error(&self, message: impl Into<String>) -> RuleError {
        RuleError::fatal(message, self.position())
    }
}
