use crate::ast::{File, Node};
use crate::context::ParseContext;
use crate::error::ParseError;
use crate::traits::ParsingRule;
use common_framework::{RuleError, Token};
use lexer_framework::Lexer;
use std::fmt;
use tracing::{debug, trace};

/// The ordered rule list of a [`Parser`].
///
/// Rules are tried in the order they were added.
pub struct ParserConfig<N = Node> {
    rules: Vec<Box<dyn ParsingRule<N>>>,
}

impl<N> ParserConfig<N> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule after every rule already configured.
    pub fn rule(mut self, rule: impl ParsingRule<N> + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn rules(&self) -> &[Box<dyn ParsingRule<N>>] {
        &self.rules
    }
}

impl<N> Default for ParserConfig<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> fmt::Debug for ParserConfig<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserConfig")
            .field(
                "rules",
                &self.rules.iter().map(|rule| rule.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// A parser that applies rules in order to a fully lexed token sequence.
///
/// For every token it offers the token to each rule whose matcher accepts
/// it until an action produces a node, then steps past the last token the
/// action consumed.
#[derive(Debug)]
pub struct Parser<N = Node> {
    lexer: Lexer,
    config: ParserConfig<N>,
}

impl<N> Parser<N> {
    pub fn new(lexer: Lexer, config: ParserConfig<N>) -> Self {
        Self { lexer, config }
    }

    pub fn lexer(&self) -> &Lexer {
        &self.lexer
    }

    pub fn config(&self) -> &ParserConfig<N> {
        &self.config
    }

    /// Lexes and parses the whole input.
    ///
    /// Lexing completes before parsing starts. Either every token is
    /// accounted for and the file is returned, or the first failure is.
    pub fn parse(&self, input: &str) -> Result<File<N>, ParseError> {
        let tokens = self.lexer.lex(input)?;
        self.parse_tokens(tokens)
    }

    /// Parses an already lexed token sequence.
    pub fn parse_tokens(&self, tokens: Vec<Token>) -> Result<File<N>, ParseError> {
        let mut ctx = ParseContext::new(tokens);
        let mut nodes = Vec::new();

        while !ctx.is_eof() {
            let node = self.dispatch(&mut ctx)?;
            nodes.push(node);
            ctx.next();
        }

        debug!(target: "parsekit::parser", nodes = nodes.len(), "parsed input");
        Ok(File::new(nodes))
    }

    fn dispatch(&self, ctx: &mut ParseContext) -> Result<N, ParseError> {
        let token = ctx.current().clone();

        for rule in self.config.rules() {
            trace!(target: "parsekit::parser", rule = rule.name(), token = %token, "attempting rule");
            if !rule.matches(&token) {
                continue;
            }

            debug!(target: "parsekit::parser", rule = rule.name(), "running action");
            let checkpoint = ctx.checkpoint();
            match rule.apply(ctx, &token) {
                Ok(node) => return Ok(node),
                Err(RuleError::TryNextRule { message, .. }) => {
                    debug!(
                        target: "parsekit::parser",
                        rule = rule.name(),
                        reason = %message,
                        restore_to = %checkpoint.position(),
                        "moving to next rule"
                    );
                    ctx.restore(checkpoint);
                }
                Err(source) => {
                    return Err(ParseError::Rule {
                        rule: rule.name().to_owned(),
                        source,
                    })
                }
            }
        }

        Err(ParseError::NoMatchingRule {
            span: token.span(),
            literal: token.literal,
        })
    }
}
