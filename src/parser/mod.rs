//! Command-line grammar: tokenizer, switch validator and the reusable parser.
use tracing::debug;

use crate::lib::errors::ValidationError;

pub mod quoting;
pub mod switches;
pub mod tokenizer;
pub mod validator;

pub use quoting::{join_arguments, quote_argument, render_command_line};
pub use switches::{looks_like_switch, RequiredField, Switch, ValueSwitch};
pub use tokenizer::tokenize;
pub use validator::{validate, LaunchConfig, ParseState};

/// Reusable parser with two entry points: a raw command line or a token list.
///
/// Every parse starts from a clean state and a failed parse leaves the parser
/// empty, so one instance can be reused for any number of sequential parses.
#[derive(Debug, Default)]
pub struct ArgumentParser {
    command_line: Option<String>,
    arguments: Vec<String>,
    config: LaunchConfig,
}

impl ArgumentParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize and validate a raw command line.
    pub fn parse_command_line(&mut self, raw: &str) -> Result<&LaunchConfig, ValidationError> {
        self.reset();
        self.command_line = Some(raw.to_string());
        self.arguments = tokenize(raw);
        self.evaluate()
    }

    /// Validate an already tokenized argument list.
    pub fn parse_arguments<I, S>(&mut self, arguments: I) -> Result<&LaunchConfig, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reset();
        self.arguments = arguments.into_iter().map(Into::into).collect();
        self.evaluate()
    }

    /// Result of the last successful parse, or defaults.
    pub fn config(&self) -> &LaunchConfig {
        &self.config
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    pub fn has_arguments(&self) -> bool {
        !self.arguments.is_empty()
    }

    /// The raw command line if one was parsed, otherwise the arguments joined by spaces.
    pub fn argument_string(&self) -> String {
        match &self.command_line {
            Some(raw) if !raw.is_empty() => raw.clone(),
            _ => self.arguments.join(" "),
        }
    }

    fn evaluate(&mut self) -> Result<&LaunchConfig, ValidationError> {
        match validate(&self.arguments) {
            Ok(config) => {
                debug!(
                    target: "run_as_registry::parser",
                    tokens = self.arguments.len(),
                    help = config.help,
                    self_test = config.self_test,
                    "Command line accepted"
                );
                self.config = config;
                Ok(&self.config)
            }
            Err(err) => {
                debug!(
                    target: "run_as_registry::parser",
                    tokens = self.arguments.len(),
                    kind = err.kind(),
                    reason = %err,
                    "Command line rejected"
                );
                self.reset();
                Err(err)
            }
        }
    }

    fn reset(&mut self) {
        self.command_line = None;
        self.arguments.clear();
        self.config = LaunchConfig::default();
    }
}
