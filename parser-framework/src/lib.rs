pub mod ast;
pub mod context;
pub mod error;
pub mod matchers;
pub mod parser;
pub mod reference;
pub mod rules;
pub mod traits;

pub use ast::{Declaration, Expression, File, Identifier, Node, Package, Statement, Struct};
pub use common_framework::{Checkpoint, Kind, Position, RuleError, Span, Token};
pub use context::ParseContext;
pub use error::ParseError;
pub use parser::{Parser, ParserConfig};
pub use traits::{Action, AstNode, ParsingRule, Rule};
