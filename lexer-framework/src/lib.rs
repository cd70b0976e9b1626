pub mod config;
pub mod context;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod matchers;
pub mod rules;
pub mod traits;

pub use common_framework::{Kind, Position, RuleError, Span, Token, WatchdogConfig};
pub use config::{Config, Symbols};
pub use context::LexContext;
pub use cursor::Cursor;
pub use error::LexError;
pub use lexer::Lexer;
pub use traits::{Action, LexingRule, Rule};
