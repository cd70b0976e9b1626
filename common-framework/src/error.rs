use crate::Position;
use thiserror::Error;

/// What a rule action reports instead of a result.
///
/// Both engines interpret this the same way: `TryNextRule` is not a failure,
/// it asks the engine to rewind and offer the unit to the next candidate rule.
/// `Fatal` aborts the whole lex or parse call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("{message} at {position}")]
    TryNextRule { message: String, position: Position },

    #[error("{message} at {position}")]
    Fatal { message: String, position: Position },
}

impl RuleError {
    pub fn try_next(message: impl Into<String>, position: Position) -> Self {
        RuleError::TryNextRule {
            message: message.into(),
            position,
        }
    }

    pub fn fatal(message: impl Into<String>, position: Position) -> Self {
        RuleError::Fatal {
            message: message.into(),
            position,
        }
    }

    pub fn is_try_next(&self) -> bool {
        matches!(self, RuleError::TryNextRule { .. })
    }

    pub fn position(&self) -> Position {
        match self {
            RuleError::TryNextRule { position, .. } | RuleError::Fatal { position, .. } => {
                *position
            }
        }
    }
}
