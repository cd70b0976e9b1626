use crate::config::Config;
use crate::context::LexContext;
use crate::error::LexError;
use crate::matchers::is_whitespace;
use common_framework::{CursorProbe, RuleError, Token, Watchdog};
use tracing::{debug, trace};

/// A lexer that applies rules in order.
///
/// For every position it offers the current character to each rule whose
/// matcher accepts it, in configuration order, until an action produces a
/// token. A loop watchdog runs alongside every call to [`Lexer::lex`].
#[derive(Debug)]
pub struct Lexer {
    config: Config,
}

impl Lexer {
    /// Creates a new lexer from a configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Lexes the whole input.
    ///
    /// Either every character is accounted for and the full token sequence
    /// is returned, or the first failure is returned and no tokens are.
    pub fn lex(&self, input: &str) -> Result<Vec<Token>, LexError> {
        let probe = CursorProbe::new();
        let _watchdog = Watchdog::spawn(probe.clone(), self.config.watchdog());

        let mut ctx = LexContext::with_probe(input, self.config.symbols(), probe);
        let mut tokens = Vec::new();

        while !ctx.is_eof() {
            if ctx.is_cancelled() {
                return Err(LexError::LoopDetected {
                    position: ctx.position(),
                });
            }

            if self.config.skips_whitespace() {
                while ctx.current().is_some_and(is_whitespace) {
                    if ctx.next().is_none() {
                        break;
                    }
                }
            }

            let Some(ch) = ctx.current() else {
                break;
            };

            let token = self.dispatch(&mut ctx, ch)?;
            tokens.push(token);
        }

        debug!(target: "parsekit::lexer", tokens = tokens.len(), "lexed input");
        Ok(tokens)
    }

    /// Runs the first rule that accepts the character under the cursor and
    /// succeeds.
    fn dispatch(&self, ctx: &mut LexContext<'_>, ch: char) -> Result<Token, LexError> {
        let mut ch = ch;

        for rule in self.config.rules() {
            trace!(target: "parsekit::lexer", rule = rule.name(), ch = ?ch, "attempting rule");
            if !rule.matches(ch) {
                continue;
            }

            debug!(target: "parsekit::lexer", rule = rule.name(), "running action");
            let started = ctx.position();
            let result = rule.apply(ctx, ch);

            if ctx.is_cancelled() {
                return Err(LexError::LoopDetected {
                    position: ctx.position(),
                });
            }

            let token = match result {
                Ok(token) => token,
                Err(RuleError::TryNextRule { message, .. }) => {
                    debug!(
                        target: "parsekit::lexer",
                        rule = rule.name(),
                        reason = %message,
                        "moving to next rule"
                    );
                    match ctx.prev() {
                        Some(rewound) => ch = rewound,
                        None => break,
                    }
                    continue;
                }
                Err(source) => {
                    return Err(LexError::Rule {
                        rule: rule.name().to_owned(),
                        source,
                    })
                }
            };

            if !token.is_valid() {
                return Err(LexError::UnboundedToken {
                    rule: rule.name().to_owned(),
                    position: started,
                });
            }

            // Every token must consume input.
            if token.end.offset <= token.start.offset {
                return Err(LexError::EmptyToken {
                    rule: rule.name().to_owned(),
                    position: token.start,
                });
            }

            if token.kind.is_illegal() {
                return Err(LexError::IllegalToken {
                    span: token.span(),
                    literal: token.literal,
                });
            }

            return Ok(token);
        }

        Err(LexError::NoMatchingRule {
            ch,
            position: ctx.position(),
        })
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new(Config::standard())
    }
}
