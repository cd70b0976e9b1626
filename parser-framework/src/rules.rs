//! Reference rule actions.
//!
//! Each action is handed the token its matcher accepted, which is also the
//! token under the cursor, and leaves the cursor on the last token it used.

use crate::ast::{Identifier, Node, Package, Struct};
use crate::context::ParseContext;
use crate::reference::STRUCT;
use common_framework::{Kind, RuleError, Token};

fn identifier(token: &Token) -> Identifier {
    Identifier {
        name: token.literal.clone(),
        name_pos: token.start,
    }
}

/// A fatal error for `found`, the token after `prev`. Past the last token
/// the error points at the end of `prev`.
fn unexpected(ctx: &ParseContext, prev: &Token, expected: &str, found: &Token) -> RuleError {
    if found.is_valid() {
        ctx.error(format!("{expected}, got {found}"))
    } else {
        RuleError::fatal(format!("{expected}, got end of input"), prev.end)
    }
}

/// Wraps the current token as an identifier. Consumes exactly one token.
pub fn parse_identifier(_ctx: &mut ParseContext, token: &Token) -> Result<Node, RuleError> {
    Ok(identifier(token).into())
}

/// `package` followed by an identifier.
pub fn parse_package(ctx: &mut ParseContext, token: &Token) -> Result<Node, RuleError> {
    let name = ctx.next().clone();
    if name.kind != Kind::IDENT {
        return Err(unexpected(ctx, token, "expected package name", &name));
    }

    Ok(Package {
        token: token.start,
        name: identifier(&name),
    }
    .into())
}

/// `struct Name {}`. The body is not parsed.
pub fn parse_struct(ctx: &mut ParseContext, token: &Token) -> Result<Node, RuleError> {
    if token.kind != STRUCT {
        return Err(ctx.error(format!("expected struct, got {token}")));
    }

    let name = ctx.next().clone();
    if name.kind != Kind::IDENT {
        return Err(unexpected(ctx, token, "expected struct name", &name));
    }
    let public = name.literal.starts_with(char::is_uppercase);

    let lbrace = ctx.next().clone();
    if lbrace.kind != Kind::LBRACE {
        return Err(unexpected(ctx, &name, "expected '{' after struct name", &lbrace));
    }

    let rbrace = ctx.next().clone();
    if rbrace.kind != Kind::RBRACE {
        return Err(unexpected(ctx, &lbrace, "expected '}'", &rbrace));
    }

    Ok(Struct {
        token: token.start,
        name: identifier(&name),
        public,
        lbrace: lbrace.start,
        rbrace: rbrace.start,
    }
    .into())
}
