use common_framework::{Position, RuleError, Span};
use thiserror::Error;

/// Why a lex call failed. No tokens are returned alongside any of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A rule action reported a fatal error.
    #[error("lexer error: rule {rule:?} failed: {source}")]
    Rule {
        rule: String,
        #[source]
        source: RuleError,
    },

    /// A rule returned a token it never started or ended.
    #[error(
        "lexer error: rule {rule:?} at {position} produced a token with an invalid start and/or \
         end position (did you forget to start or end the rule?)"
    )]
    UnboundedToken { rule: String, position: Position },

    /// A rule returned a token without consuming any input.
    #[error("lexer error: rule {rule:?} produced an empty token at {position}")]
    EmptyToken { rule: String, position: Position },

    #[error("lexer error: illegal token at {span}: {literal:?}")]
    IllegalToken { span: Span, literal: String },

    #[error("lexer error: no rule to handle character {ch:?} at {position}")]
    NoMatchingRule { ch: char, position: Position },

    #[error("lexer error: detected a possible infinite loop at {position}")]
    LoopDetected { position: Position },
}

impl LexError {
    /// Where in the input the failure was detected, when known.
    pub fn position(&self) -> Option<Position> {
        match self {
            LexError::Rule { source, .. } => Some(source.position()),
            LexError::IllegalToken { span, .. } => Some(span.start),
            LexError::UnboundedToken { position, .. }
            | LexError::EmptyToken { position, .. }
            | LexError::NoMatchingRule { position, .. }
            | LexError::LoopDetected { position } => Some(*position),
        }
    }
}
