use common_framework::{RuleError, Span};
use lexer_framework::LexError;
use thiserror::Error;

/// Why a parse call failed. No nodes are returned alongside any of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input never made it to the parser.
    #[error("parser error: {0}")]
    Lex(#[from] LexError),

    #[error("parser error: rule {rule:?} failed: {source}")]
    Rule {
        rule: String,
        #[source]
        source: RuleError,
    },

    #[error("parser error: no rule to handle token {literal:?} at {span}")]
    NoMatchingRule { literal: String, span: Span },
}
