use crate::context::LexContext;
use crate::matchers::Matcher;
use common_framework::{RuleError, Token};
use std::borrow::Cow;
use std::fmt;

/// A rule action: consumes input through the context and produces a token.
///
/// The action receives the character that satisfied the matcher, which is
/// also the character under the cursor when the action starts.
pub type Action = fn(&mut LexContext<'_>, char) -> Result<Token, RuleError>;

/// A lexing rule: a matcher deciding whether the rule is eligible for the
/// current character, and an action that does the consuming.
///
/// Rules borrow the context only for the duration of [`LexingRule::apply`].
pub trait LexingRule: Send + Sync {
    /// Name used in trace output and error reports.
    fn name(&self) -> &str;

    /// Returns whether this rule should be attempted for `ch`.
    fn matches(&self, ch: char) -> bool;

    /// Runs the rule. Bracket the work with [`LexContext::start_rule`] and
    /// [`LexContext::end_rule`]; signal [`RuleError::TryNextRule`] to hand the
    /// character to the next candidate rule.
    fn apply(&self, ctx: &mut LexContext<'_>, ch: char) -> Result<Token, RuleError>;
}

/// A rule assembled from a name, a matcher function and an action function.
#[derive(Clone)]
pub struct Rule {
    name: Cow<'static, str>,
    matcher: Matcher,
    action: Action,
}

impl Rule {
    pub fn new(name: impl Into<Cow<'static, str>>, matcher: Matcher, action: Action) -> Self {
        Self {
            name: name.into(),
            matcher,
            action,
        }
    }
}

impl LexingRule for Rule {
    fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, ch: char) -> bool {
        (self.matcher)(ch)
    }

    fn apply(&self, ctx: &mut LexContext<'_>, ch: char) -> Result<Token, RuleError> {
        (self.action)(ctx, ch)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}
