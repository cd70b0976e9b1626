//! A small front end built from the engines: `package` declarations,
//! empty `struct` declarations and bare identifiers.

use crate::ast::Node;
use crate::matchers::{is_identifier, is_kind};
use crate::parser::{Parser, ParserConfig};
use crate::rules::{parse_identifier, parse_package, parse_struct};
use crate::traits::Rule;
use common_framework::{Kind, Token};
use lexer_framework::{Config, Lexer};

pub const PACKAGE: Kind = Kind::keyword(0);
pub const STRUCT: Kind = Kind::keyword(1);

pub fn is_package(token: &Token) -> bool {
    is_kind(token, PACKAGE)
}

pub fn is_struct(token: &Token) -> bool {
    is_kind(token, STRUCT)
}

/// The stock lexer configuration plus the front end's keywords.
pub fn lexer_config() -> Config {
    Config::standard()
        .keyword("package", PACKAGE)
        .keyword("struct", STRUCT)
}

pub fn parser_config() -> ParserConfig<Node> {
    ParserConfig::new()
        .rule(Rule::new("ParsePackage", is_package, parse_package))
        .rule(Rule::new("ParseStruct", is_struct, parse_struct))
        .rule(Rule::new("ParseIdentifier", is_identifier, parse_identifier))
}

pub fn parser() -> Parser<Node> {
    Parser::new(Lexer::new(lexer_config()), parser_config())
}
