use lexer_framework::matchers::{
    is_back_quote, is_double_quote, is_letter, is_number, is_operator, is_single_quote,
};
use lexer_framework::rules::{
    lex_char, lex_identifier, lex_number, lex_operator, lex_raw_string, lex_string,
};
use lexer_framework::{Config, Kind, LexError, Lexer, Position, Rule, RuleError, Token};
use rstest::rstest;

fn lex_with(config: Config, input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(config).lex(input)
}

fn kinds_and_literals(tokens: &[Token]) -> Vec<(Kind, &str)> {
    tokens
        .iter()
        .map(|token| (token.kind, token.literal.as_str()))
        .collect()
}

fn fatal_message(err: &LexError) -> &str {
    match err {
        LexError::Rule {
            source: RuleError::Fatal { message, .. },
            ..
        } => message,
        other => panic!("expected a fatal rule error, got {other:?}"),
    }
}

#[test]
fn test_lex_identifier() {
    let config = Config::new().rule(Rule::new("LexIdentifier", is_letter, lex_identifier));
    let tokens = lex_with(config, "foo").unwrap();

    assert_eq!(
        tokens,
        vec![Token::new(
            Kind::IDENT,
            Position::at(1, 1, 0),
            Position::at(1, 4, 3),
            "foo"
        )]
    );
}

#[rstest]
#[case::letter("'f'")]
#[case::newline("'\n'")]
fn test_lex_char(#[case] input: &str) {
    let config = Config::new().rule(Rule::new("LexChar", is_single_quote, lex_char));
    let tokens = lex_with(config, input).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, Kind::CHAR);
    assert_eq!(tokens[0].literal, input);
    assert_eq!(tokens[0].start, Position::at(1, 1, 0));
    assert_eq!(tokens[0].end, Position::at(1, 4, 3));
}

#[rstest]
#[case::too_long("'foo'", "too many characters in char literal")]
#[case::empty("''", "empty char literal")]
#[case::unterminated("'f", "unterminated char literal")]
fn test_lex_char_errors(#[case] input: &str, #[case] message: &str) {
    let config = Config::new().rule(Rule::new("LexChar", is_single_quote, lex_char));
    let err = lex_with(config, input).unwrap_err();
    assert_eq!(fatal_message(&err), message);
}

#[test]
fn test_lex_string() {
    let config = Config::new().rule(Rule::new("LexString", is_double_quote, lex_string));
    let tokens = lex_with(config, "\"foo\"").unwrap();

    assert_eq!(
        tokens,
        vec![Token::new(
            Kind::STRING,
            Position::at(1, 1, 0),
            Position::at(1, 6, 5),
            "\"foo\""
        )]
    );
}

#[test]
fn test_lex_string_escaped_quote() {
    let config = Config::new().rule(Rule::new("LexString", is_double_quote, lex_string));
    let input = r#""say \"hi\"""#;
    let tokens = lex_with(config, input).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].literal, input);
}

#[rstest]
#[case::newline("\"foo\n\"", "literal newlines aren't valid in a string")]
#[case::unterminated("\"foo", "unterminated string literal")]
fn test_lex_string_errors(#[case] input: &str, #[case] message: &str) {
    let config = Config::new().rule(Rule::new("LexString", is_double_quote, lex_string));
    let err = lex_with(config, input).unwrap_err();

    assert_eq!(fatal_message(&err), message);
    match err {
        LexError::Rule { rule, .. } => assert_eq!(rule, "LexString"),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
#[case::single_line("`hello world`", Position::at(1, 14, 13))]
#[case::multi_line("`hello\nworld`", Position::at(2, 8, 13))]
fn test_lex_raw_string(#[case] input: &str, #[case] end: Position) {
    let config = Config::new().rule(Rule::new("LexRawString", is_back_quote, lex_raw_string));
    let tokens = lex_with(config, input).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, Kind::STRING);
    assert_eq!(tokens[0].literal, input);
    assert_eq!(tokens[0].end, end);
}

#[test]
fn test_lex_raw_string_unterminated() {
    let config = Config::new().rule(Rule::new("LexRawString", is_back_quote, lex_raw_string));
    let err = lex_with(config, "`hello").unwrap_err();
    assert_eq!(fatal_message(&err), "unterminated raw string literal");
}

#[rstest]
#[case::integer("42", vec![(Kind::NUMBER, "42")])]
#[case::float("3.14", vec![(Kind::FLOAT, "3.14")])]
#[case::trailing_dot("7.", vec![(Kind::FLOAT, "7.")])]
#[case::second_dot("1.5.3", vec![(Kind::FLOAT, "1.5"), (Kind::PERIOD, "."), (Kind::NUMBER, "3")])]
fn test_lex_numbers(#[case] input: &str, #[case] expected: Vec<(Kind, &str)>) {
    let tokens = lex_with(Config::standard(), input).unwrap();
    assert_eq!(kinds_and_literals(&tokens), expected);
}

fn small_operator_table() -> Config {
    Config::new()
        .rule(Rule::new("LexOperator", is_operator, lex_operator))
        .operator("(", Kind::operator(1))
        .operator("+", Kind::operator(2))
        .operator("<<=", Kind::operator(3))
}

#[rstest]
#[case::paren("(", Kind::operator(1))]
#[case::plus("+", Kind::operator(2))]
#[case::longest("<<=", Kind::operator(3))]
fn test_lex_operator_longest_match(#[case] input: &str, #[case] kind: Kind) {
    let tokens = lex_with(small_operator_table(), input).unwrap();
    assert_eq!(kinds_and_literals(&tokens), vec![(kind, input)]);
}

#[test]
fn test_lex_operator_without_shorter_prefix() {
    let err = lex_with(small_operator_table(), "<<").unwrap_err();
    assert_eq!(fatal_message(&err), "invalid operator: <");
}

#[test]
fn test_lex_builtin_operators_prefer_longest() {
    let tokens = lex_with(Config::standard(), "<<= << < ...").unwrap();
    assert_eq!(
        kinds_and_literals(&tokens),
        vec![
            (Kind::SHL_ASSIGN, "<<="),
            (Kind::SHL, "<<"),
            (Kind::LSS, "<"),
            (Kind::ELLIPSIS, "..."),
        ]
    );
}

#[test]
fn test_lex_invalid_operator() {
    let err = lex_with(Config::standard(), "?").unwrap_err();
    assert_eq!(fatal_message(&err), "invalid operator: ?");
}

#[test]
fn test_keyword_reclassification() {
    let config = Config::standard().keyword("func", Kind::keyword(0));
    let tokens = lex_with(config, "func main").unwrap();

    assert_eq!(
        kinds_and_literals(&tokens),
        vec![(Kind::keyword(0), "func"), (Kind::IDENT, "main")]
    );
}

#[test]
fn test_quoted_keyword_is_not_reclassified() {
    let config = Config::standard().keyword("func", Kind::keyword(0));
    let tokens = lex_with(config, "\"func\"").unwrap();
    assert_eq!(kinds_and_literals(&tokens), vec![(Kind::STRING, "\"func\"")]);
}

#[test]
fn test_standard_statement() {
    let tokens = lex_with(Config::standard(), "x := 42 + y").unwrap();

    assert_eq!(
        kinds_and_literals(&tokens),
        vec![
            (Kind::IDENT, "x"),
            (Kind::DEFINE, ":="),
            (Kind::NUMBER, "42"),
            (Kind::ADD, "+"),
            (Kind::IDENT, "y"),
        ]
    );

    let starts: Vec<_> = tokens.iter().map(|token| token.start).collect();
    assert_eq!(
        starts,
        vec![
            Position::at(1, 1, 0),
            Position::at(1, 3, 2),
            Position::at(1, 6, 5),
            Position::at(1, 9, 8),
            Position::at(1, 11, 10),
        ]
    );
}

#[rstest]
#[case::empty("")]
#[case::blank("  \t ")]
#[case::newlines("\n\n")]
fn test_lex_nothing_to_do(#[case] input: &str) {
    let tokens = lex_with(Config::standard(), input).unwrap();
    assert!(tokens.is_empty());
}

#[test]
fn test_whitespace_is_significant_without_skip() {
    let config = Config::new()
        .rule(Rule::new("LexIdentifier", is_letter, lex_identifier))
        .rule(Rule::new("LexNumber", is_number, lex_number));
    let err = lex_with(config, "a b").unwrap_err();

    assert_eq!(
        err,
        LexError::NoMatchingRule {
            ch: ' ',
            position: Position::at(1, 2, 1),
        }
    );
}

#[test]
fn test_lexer_default_is_standard() {
    let tokens = Lexer::default().lex("a(1)").unwrap();
    assert_eq!(
        kinds_and_literals(&tokens),
        vec![
            (Kind::IDENT, "a"),
            (Kind::LPAREN, "("),
            (Kind::NUMBER, "1"),
            (Kind::RPAREN, ")"),
        ]
    );
}
