use crate::matchers;
use crate::rules;
use crate::traits::{LexingRule, Rule};
use common_framework::{builtin_operators, Kind, WatchdogConfig};
use std::collections::HashMap;
use std::fmt;

/// Operator and keyword tables mapping literal text to a reserved kind.
///
/// Operators win over keywords when the same text is registered in both.
#[derive(Debug, Clone, Default)]
pub struct Symbols {
    operators: HashMap<String, Kind>,
    keywords: HashMap<String, Kind>,
    longest_operator: usize,
}

impl Symbols {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_operator(&mut self, text: impl Into<String>, kind: Kind) {
        let text = text.into();
        self.longest_operator = self.longest_operator.max(text.chars().count());
        self.operators.insert(text, kind);
    }

    pub fn insert_keyword(&mut self, text: impl Into<String>, kind: Kind) {
        self.keywords.insert(text.into(), kind);
    }

    pub fn operator(&self, text: &str) -> Option<Kind> {
        self.operators.get(text).copied()
    }

    pub fn keyword(&self, text: &str) -> Option<Kind> {
        self.keywords.get(text).copied()
    }

    /// Looks `literal` up as an operator, then as a keyword.
    pub fn lookup(&self, literal: &str) -> Option<Kind> {
        self.operator(literal).or_else(|| self.keyword(literal))
    }

    /// Length in characters of the longest registered operator.
    pub fn longest_operator(&self) -> usize {
        self.longest_operator
    }
}

/// Configures a [`Lexer`](crate::Lexer): the ordered rule list, the symbol
/// tables, whitespace handling and loop detection.
///
/// Rules are tried in the order they were added; the first one whose matcher
/// accepts the current character and whose action succeeds wins.
#[derive(Default)]
pub struct Config {
    skip_whitespace: bool,
    rules: Vec<Box<dyn LexingRule>>,
    symbols: Symbols,
    loop_detection: WatchdogConfig,
}

impl Config {
    /// An empty configuration: no rules, no symbols, whitespace significant.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock configuration: whitespace skipped, the built-in actions for
    /// identifiers, numbers, chars, strings, raw strings and operators, and
    /// the built-in operator table.
    pub fn standard() -> Self {
        Self::new()
            .skip_whitespace(true)
            .rule(Rule::new("LexIdentifier", matchers::is_letter, rules::lex_identifier))
            .rule(Rule::new("LexNumber", matchers::is_number, rules::lex_number))
            .rule(Rule::new("LexChar", matchers::is_single_quote, rules::lex_char))
            .rule(Rule::new("LexString", matchers::is_double_quote, rules::lex_string))
            .rule(Rule::new("LexRawString", matchers::is_back_quote, rules::lex_raw_string))
            .rule(Rule::new("LexOperator", matchers::is_operator, rules::lex_operator))
            .operators(builtin_operators())
    }

    pub fn skip_whitespace(mut self, skip: bool) -> Self {
        self.skip_whitespace = skip;
        self
    }

    /// Appends a rule after every rule already configured.
    pub fn rule(mut self, rule: impl LexingRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn operator(mut self, text: impl Into<String>, kind: Kind) -> Self {
        self.symbols.insert_operator(text, kind);
        self
    }

    pub fn operators<I, S>(mut self, operators: I) -> Self
    where
        I: IntoIterator<Item = (S, Kind)>,
        S: Into<String>,
    {
        for (text, kind) in operators {
            self.symbols.insert_operator(text, kind);
        }
        self
    }

    pub fn keyword(mut self, text: impl Into<String>, kind: Kind) -> Self {
        self.symbols.insert_keyword(text, kind);
        self
    }

    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = (S, Kind)>,
        S: Into<String>,
    {
        for (text, kind) in keywords {
            self.symbols.insert_keyword(text, kind);
        }
        self
    }

    pub fn loop_detection(mut self, watchdog: WatchdogConfig) -> Self {
        self.loop_detection = watchdog;
        self
    }

    pub fn skips_whitespace(&self) -> bool {
        self.skip_whitespace
    }

    pub fn rules(&self) -> &[Box<dyn LexingRule>] {
        &self.rules
    }

    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }

    pub fn watchdog(&self) -> WatchdogConfig {
        self.loop_detection
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("skip_whitespace", &self.skip_whitespace)
            .field(
                "rules",
                &self.rules.iter().map(|rule| rule.name()).collect::<Vec<_>>(),
            )
            .field("symbols", &self.symbols)
            .field("loop_detection", &self.loop_detection)
            .finish()
    }
}
