use crate::context::ParseContext;
use crate::matchers::Matcher;
use common_framework::{Position, RuleError, Span, Token};
use std::borrow::Cow;
use std::fmt;

/// An AST node produced by the parser.
///
/// Every node knows where it starts and ends in the source.
pub trait AstNode {
    fn start(&self) -> Position;

    fn end(&self) -> Position;

    fn span(&self) -> Span {
        Span::new(self.start(), self.end())
    }
}

/// A rule action: reads tokens through the context and produces a node.
///
/// The action receives the token that satisfied the matcher, which is also
/// the token under the cursor when the action starts.
pub type Action<N> = fn(&mut ParseContext, &Token) -> Result<N, RuleError>;

/// A parsing rule: a matcher deciding whether the rule is eligible for the
/// current token, and an action that consumes tokens into a node of type `N`.
pub trait ParsingRule<N>: Send + Sync {
    /// Name used in trace output and error reports.
    fn name(&self) -> &str;

    /// Returns whether this rule should be attempted for `token`.
    fn matches(&self, token: &Token) -> bool;

    /// Runs the rule, leaving the cursor on the last token consumed. Signal
    /// [`RuleError::TryNextRule`] to give the token to the next candidate;
    /// the cursor is restored to where the attempt began.
    fn apply(&self, ctx: &mut ParseContext, token: &Token) -> Result<N, RuleError>;
}

/// A rule assembled from a name, a matcher function and an action function.
pub struct Rule<N> {
    name: Cow<'static, str>,
    matcher: Matcher,
    action: Action<N>,
}

impl<N> Rule<N> {
    pub fn new(name: impl Into<Cow<'static, str>>, matcher: Matcher, action: Action<N>) -> Self {
        Self {
            name: name.into(),
            matcher,
            action,
        }
    }
}

impl<N> ParsingRule<N> for Rule<N> {
    fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, token: &Token) -> bool {
        (self.matcher)(token)
    }

    fn apply(&self, ctx: &mut ParseContext, token: &Token) -> Result<N, RuleError> {
        (self.action)(ctx, token)
    }
}

impl<N> fmt::Debug for Rule<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}
