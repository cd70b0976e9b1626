//! Token predicates usable as rule matchers.

use common_framework::{Kind, Token};

pub type Matcher = fn(&Token) -> bool;

pub fn is_identifier(token: &Token) -> bool {
    token.kind == Kind::IDENT
}

/// Any kind in the caller keyword range.
pub fn is_keyword(token: &Token) -> bool {
    token.kind.is_keyword()
}

pub fn is_string(token: &Token) -> bool {
    token.kind == Kind::STRING
}

/// Building block for matchers on a single caller-defined kind.
pub fn is_kind(token: &Token, kind: Kind) -> bool {
    token.kind == kind
}
