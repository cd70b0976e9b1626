//! Character predicates usable as rule matchers.

pub type Matcher = fn(char) -> bool;

pub fn is_letter(ch: char) -> bool {
    ch.is_alphabetic()
}

pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Any numeric character, not just ASCII digits.
pub fn is_number(ch: char) -> bool {
    ch.is_numeric()
}

pub fn is_letter_or_number(ch: char) -> bool {
    is_letter(ch) || is_number(ch)
}

pub fn is_single_quote(ch: char) -> bool {
    ch == '\''
}

pub fn is_double_quote(ch: char) -> bool {
    ch == '"'
}

pub fn is_back_quote(ch: char) -> bool {
    ch == '`'
}

pub fn is_operator(ch: char) -> bool {
    is_symbol(ch) || is_punct(ch)
}

pub fn is_symbol(ch: char) -> bool {
    matches!(ch, '$' | '+' | '<' | '=' | '>' | '^' | '`' | '|' | '~')
}

pub fn is_punct(ch: char) -> bool {
    ch.is_ascii_punctuation() && !is_symbol(ch)
}

pub fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace()
}

/// Horizontal whitespace only.
pub fn is_space(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

pub fn is_newline(ch: char) -> bool {
    ch == '\n' || ch == '\r'
}
