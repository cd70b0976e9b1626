use crate::position::{Position, Span};
use std::fmt;

/// The kind of a token.
///
/// Kinds live in an open integer space. `0..1000` is reserved for the
/// framework (literal kinds and the built-in operators), and the ranges
/// starting at [`Kind::LITERAL_START`], [`Kind::OPERATOR_START`] and
/// [`Kind::KEYWORD_START`] are handed to caller-defined grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Kind(pub u32);

macro_rules! builtin_kinds {
    ($($name:ident = $value:literal => $text:literal),* $(,)?) => {
        impl Kind {
            $(pub const $name: Kind = Kind($value);)*

            /// Name of a framework-reserved kind, if it has one.
            pub fn name(self) -> Option<&'static str> {
                match self.0 {
                    $($value => Some(stringify!($name)),)*
                    _ => None,
                }
            }
        }

        /// Literal text of the built-in operator kinds.
        fn builtin_text(kind: Kind) -> Option<&'static str> {
            match kind.0 {
                $($value if !$text.is_empty() => Some($text),)*
                _ => None,
            }
        }
    };
}

builtin_kinds! {
    ILLEGAL = 0 => "",
    EOF = 1 => "",
    COMMENT = 2 => "",
    WHITESPACE = 3 => "",

    IDENT = 4 => "",
    STRING = 5 => "",
    CHAR = 6 => "",
    NUMBER = 7 => "",
    FLOAT = 8 => "",

    ADD = 9 => "+",
    SUB = 10 => "-",
    MUL = 11 => "*",
    QUO = 12 => "/",
    REM = 13 => "%",

    AND = 14 => "&",
    OR = 15 => "|",
    XOR = 16 => "^",
    SHL = 17 => "<<",
    SHR = 18 => ">>",
    AND_NOT = 19 => "&^",

    ADD_ASSIGN = 20 => "+=",
    SUB_ASSIGN = 21 => "-=",
    MUL_ASSIGN = 22 => "*=",
    QUO_ASSIGN = 23 => "/=",
    REM_ASSIGN = 24 => "%=",

    AND_ASSIGN = 25 => "&=",
    OR_ASSIGN = 26 => "|=",
    XOR_ASSIGN = 27 => "^=",
    SHL_ASSIGN = 28 => "<<=",
    SHR_ASSIGN = 29 => ">>=",
    AND_NOT_ASSIGN = 30 => "&^=",

    LAND = 31 => "&&",
    LOR = 32 => "||",
    ARROW = 33 => "<-",
    INC = 34 => "++",
    DEC = 35 => "--",

    EQL = 36 => "==",
    LSS = 37 => "<",
    GTR = 38 => ">",
    ASSIGN = 39 => "=",
    NOT = 40 => "!",

    NEQ = 41 => "!=",
    LEQ = 42 => "<=",
    GEQ = 43 => ">=",
    DEFINE = 44 => ":=",
    ELLIPSIS = 45 => "...",

    LPAREN = 46 => "(",
    LBRACK = 47 => "[",
    LBRACE = 48 => "{",
    COMMA = 49 => ",",
    PERIOD = 50 => ".",

    RPAREN = 51 => ")",
    RBRACK = 52 => "]",
    RBRACE = 53 => "}",
    SEMICOLON = 54 => ";",
    COLON = 55 => ":",
}

impl Kind {
    /// First kind available for caller-defined identifiers and literals.
    pub const LITERAL_START: u32 = 1000;
    /// First kind available for caller-defined operators.
    pub const OPERATOR_START: u32 = 2000;
    /// First kind available for caller-defined keywords.
    pub const KEYWORD_START: u32 = 3000;

    const BUILTIN_OPERATORS: std::ops::RangeInclusive<u32> = Kind::ADD.0..=Kind::COLON.0;

    /// The `n`th caller-defined literal kind.
    ///
    /// # Panics
    ///
    /// If `n` would leave the literal range.
    pub const fn literal(n: u32) -> Kind {
        assert!(n < Self::OPERATOR_START - Self::LITERAL_START, "literal kind out of range");
        Kind(Self::LITERAL_START + n)
    }

    /// The `n`th caller-defined operator kind.
    ///
    /// # Panics
    ///
    /// If `n` would leave the operator range.
    pub const fn operator(n: u32) -> Kind {
        assert!(n < Self::KEYWORD_START - Self::OPERATOR_START, "operator kind out of range");
        Kind(Self::OPERATOR_START + n)
    }

    /// The `n`th caller-defined keyword kind.
    ///
    /// # Panics
    ///
    /// If `n` would overflow the kind value.
    pub const fn keyword(n: u32) -> Kind {
        assert!(n <= u32::MAX - Self::KEYWORD_START, "keyword kind out of range");
        Kind(Self::KEYWORD_START + n)
    }

    pub fn is_illegal(self) -> bool {
        self == Kind::ILLEGAL
    }

    /// True for the built-in operators and the caller operator range.
    pub fn is_operator(self) -> bool {
        Self::BUILTIN_OPERATORS.contains(&self.0)
            || (Self::OPERATOR_START..Self::KEYWORD_START).contains(&self.0)
    }

    pub fn is_keyword(self) -> bool {
        self.0 >= Self::KEYWORD_START
    }

    /// True for the built-in literal kinds and the caller literal range.
    pub fn is_literal(self) -> bool {
        (Kind::IDENT.0..=Kind::FLOAT.0).contains(&self.0)
            || (Self::LITERAL_START..Self::OPERATOR_START).contains(&self.0)
    }

    /// Whether a symbol table lookup may overwrite this kind when a rule
    /// ends. Quoted literals, numbers and comments keep the kind their
    /// action gave them even if their text happens to be a registered symbol.
    pub fn is_reclassifiable(self) -> bool {
        !matches!(
            self,
            Kind::STRING | Kind::CHAR | Kind::NUMBER | Kind::FLOAT | Kind::COMMENT
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

/// The built-in operator table, longest-match friendly: every built-in
/// operator kind paired with its text.
pub fn builtin_operators() -> impl Iterator<Item = (&'static str, Kind)> {
    Kind::BUILTIN_OPERATORS.filter_map(|value| {
        let kind = Kind(value);
        builtin_text(kind).map(|text| (text, kind))
    })
}

/// A lexed token.
///
/// A token is well-formed only when both `start` and `end` are valid
/// positions; [`Token::default`] is the empty sentinel and is not.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: Kind,
    pub start: Position,
    pub end: Position,
    pub literal: String,
}

impl Token {
    pub fn new(kind: Kind, start: Position, end: Position, literal: impl Into<String>) -> Self {
        Self {
            kind,
            start,
            end,
            literal: literal.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.start.is_valid() && self.end.is_valid()
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}

impl Default for Token {
    fn default() -> Self {
        Self {
            kind: Kind::ILLEGAL,
            start: Position::invalid(),
            end: Position::invalid(),
            literal: String::new(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token{{Kind: {}, Start: {}, End: {}}}",
            self.kind, self.start, self.end
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_numbering() {
        assert_eq!(Kind::IDENT, Kind(4));
        assert_eq!(Kind::STRING, Kind(5));
        assert_eq!(Kind::CHAR, Kind(6));
        assert_eq!(Kind::FLOAT, Kind(8));
        assert_eq!(Kind::ADD, Kind(9));
        assert_eq!(Kind::COLON, Kind(55));
    }

    #[test]
    fn test_reserved_ranges() {
        assert_eq!(Kind::operator(1), Kind(2001));
        assert!(Kind::operator(1).is_operator());
        assert!(!Kind::operator(1).is_keyword());
        assert!(Kind::keyword(0).is_keyword());
        assert!(Kind::literal(3).is_literal());
        assert!(Kind::SHL_ASSIGN.is_operator());
        assert!(!Kind::IDENT.is_operator());
    }

    #[test]
    fn test_reserved_range_edges() {
        assert!(Kind::literal(999).is_literal());
        assert!(!Kind::literal(999).is_operator());
        assert!(Kind::operator(999).is_operator());
        assert!(!Kind::operator(999).is_keyword());
        assert_eq!(Kind::keyword(u32::MAX - 3000), Kind(u32::MAX));
    }

    #[test]
    #[should_panic(expected = "literal kind out of range")]
    fn test_literal_outside_range() {
        let _ = Kind::literal(1500);
    }

    #[test]
    #[should_panic(expected = "operator kind out of range")]
    fn test_operator_outside_range() {
        let _ = Kind::operator(1000);
    }

    #[test]
    #[should_panic(expected = "keyword kind out of range")]
    fn test_keyword_overflow() {
        let _ = Kind::keyword(u32::MAX);
    }

    #[test]
    fn test_builtin_operators_table() {
        let table: Vec<_> = builtin_operators().collect();
        assert_eq!(table.len(), 47);
        assert!(table.contains(&("<<=", Kind::SHL_ASSIGN)));
        assert!(table.contains(&("...", Kind::ELLIPSIS)));
        assert!(table.iter().all(|(_, kind)| kind.is_operator()));
    }

    #[test]
    fn test_reclassifiable() {
        assert!(Kind::IDENT.is_reclassifiable());
        assert!(Kind::ILLEGAL.is_reclassifiable());
        assert!(!Kind::STRING.is_reclassifiable());
        assert!(!Kind::CHAR.is_reclassifiable());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(Kind::IDENT.to_string(), "IDENT");
        assert_eq!(Kind::keyword(2).to_string(), "3002");
    }

    #[test]
    fn test_default_token_is_not_valid() {
        let token = Token::default();
        assert!(!token.is_valid());
        assert_eq!(token.kind, Kind::ILLEGAL);
    }

    #[test]
    fn test_token_span() {
        let token = Token::new(
            Kind::IDENT,
            Position::at(1, 1, 0),
            Position::at(1, 4, 3),
            "foo",
        );
        assert!(token.is_valid());
        assert_eq!(token.span().to_string(), "1:1:4");
    }
}
