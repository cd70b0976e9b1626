//! Common Framework
//!
//! Value types and protocols shared by lexer-framework and parser-framework.

pub mod checkpoint;
pub mod error;
pub mod loop_detector;
pub mod position;
pub mod token;

pub use checkpoint::Checkpoint;
pub use error::RuleError;
pub use loop_detector::{CursorProbe, LoopDetector, Watchdog, WatchdogConfig};
pub use position::{Position, Span};
pub use token::{builtin_operators, Kind, Token};
