//! Built-in rule actions.
//!
//! Each action expects the cursor to sit on the character its matcher
//! accepted and leaves it on the first character after the token.

use crate::context::LexContext;
use crate::matchers::{is_letter_or_number, is_newline, is_number, is_whitespace};
use common_framework::{Kind, RuleError, Token};

/// Letters followed by letters or digits.
///
/// A leading digit is handed on to the next rule. The action steps over the
/// digit first so that the engine's single-step rewind lands back on it.
pub fn lex_identifier(ctx: &mut LexContext<'_>, ch: char) -> Result<Token, RuleError> {
    let token = ctx.start_rule(Kind::IDENT);

    if is_number(ch) {
        ctx.next();
        return Err(ctx.try_next_rule("first character of an identifier can't be a number"));
    }

    let mut ch = Some(ch);
    while ch.is_some_and(is_letter_or_number) {
        ch = ctx.next();
    }

    Ok(ctx.end_rule(token))
}

/// A single-quoted literal holding exactly one character.
pub fn lex_char(ctx: &mut LexContext<'_>, _ch: char) -> Result<Token, RuleError> {
    let token = ctx.start_rule(Kind::CHAR);

    match ctx.next() {
        None => return Err(ctx.error("unterminated char literal")),
        Some('\'') => return Err(ctx.error("empty char literal")),
        Some(_) => {}
    }

    match ctx.next() {
        Some('\'') => {}
        None => return Err(ctx.error("unterminated char literal")),
        Some(_) => return Err(ctx.error("too many characters in char literal")),
    }

    ctx.next();
    Ok(ctx.end_rule(token))
}

/// A double-quoted string. `\"` does not close the string; a literal newline
/// is an error.
pub fn lex_string(ctx: &mut LexContext<'_>, _ch: char) -> Result<Token, RuleError> {
    let token = ctx.start_rule(Kind::STRING);

    let mut escaped = false;
    loop {
        match ctx.next() {
            None => return Err(ctx.error("unterminated string literal")),
            Some(ch) if is_newline(ch) => {
                return Err(ctx.error("literal newlines aren't valid in a string"))
            }
            Some('"') if !escaped => {
                ctx.next();
                break;
            }
            Some(ch) => escaped = !escaped && ch == '\\',
        }
    }

    Ok(ctx.end_rule(token))
}

/// A back-quoted string running to the next back quote, newlines included.
pub fn lex_raw_string(ctx: &mut LexContext<'_>, _ch: char) -> Result<Token, RuleError> {
    let token = ctx.start_rule(Kind::STRING);

    loop {
        match ctx.next() {
            None => return Err(ctx.error("unterminated raw string literal")),
            Some('`') => {
                ctx.next();
                break;
            }
            Some(_) => {}
        }
    }

    Ok(ctx.end_rule(token))
}

/// Digits with at most one `.`, which turns the token into a FLOAT.
pub fn lex_number(ctx: &mut LexContext<'_>, ch: char) -> Result<Token, RuleError> {
    let mut token = ctx.start_rule(Kind::NUMBER);

    let mut ch = Some(ch);
    while ch.is_some_and(is_number) {
        ch = ctx.next();
        if ch == Some('.') && token.kind == Kind::NUMBER {
            token.kind = Kind::FLOAT;
            ch = ctx.next();
        }
    }

    Ok(ctx.end_rule(token))
}

/// The longest registered operator at the cursor.
///
/// Candidates start at the length of the longest registered operator and
/// shrink one character at a time until one is found in the operator table.
pub fn lex_operator(ctx: &mut LexContext<'_>, ch: char) -> Result<Token, RuleError> {
    let mut token = ctx.start_rule(Kind::ILLEGAL);

    let longest = ctx.symbols().longest_operator();
    let found = (1..=longest).rev().find_map(|len| {
        let candidate = ctx.lookahead(len);
        ctx.symbols()
            .operator(candidate)
            .map(|kind| (candidate, kind))
    });

    let Some((text, kind)) = found else {
        return Err(ctx.error(format!("invalid operator: {ch}")));
    };

    token.kind = kind;
    for _ in text.chars() {
        ctx.next();
    }

    Ok(ctx.end_rule(token))
}

/// A run of whitespace, for configurations that keep it.
pub fn lex_whitespace(ctx: &mut LexContext<'_>, ch: char) -> Result<Token, RuleError> {
    let token = ctx.start_rule(Kind::WHITESPACE);

    let mut ch = Some(ch);
    while ch.is_some_and(is_whitespace) {
        ch = ctx.next();
    }

    Ok(ctx.end_rule(token))
}
